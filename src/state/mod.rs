pub mod gesture;
pub mod motion;
pub mod selection;
pub mod tracker;

pub use gesture::{Gesture, GesturePhase, TouchEdge};
pub use tracker::PointTracker;
