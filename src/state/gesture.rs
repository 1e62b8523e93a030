//! Bounding-rectangle gesture state.
//!
//! The gesture rectangle is the bounding box of every active touch. A gesture
//! is active while the rectangle exists; entering it captures the rectangle
//! origin as the anchor and the whole rectangle as the growth baseline.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::geometry::{Point, Rect};

/// Which pointer event caused the gesture to be recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEdge {
    Down,
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    /// Not enough touches for a gesture.
    #[default]
    Idle,
    Gesturing {
        /// Rectangle origin when the gesture (re)started; moves to the current
        /// origin after every frame that applied motion.
        start_position: Point,
        /// Rectangle at gesture start, the baseline for growth.
        start_size: Rect,
    },
}

impl GesturePhase {
    #[must_use]
    pub fn is_gesturing(&self) -> bool {
        matches!(self, Self::Gesturing { .. })
    }

    #[must_use]
    pub fn start_position(&self) -> Option<Point> {
        match self {
            Self::Gesturing { start_position, .. } => Some(*start_position),
            Self::Idle => None,
        }
    }

    #[must_use]
    pub fn start_size(&self) -> Option<Rect> {
        match self {
            Self::Gesturing { start_size, .. } => Some(*start_size),
            Self::Idle => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gesture {
    /// Bounding box of the active touches; `None` below the minimum touch count.
    pub rect: Option<Rect>,
    pub phase: GesturePhase,
}

impl Gesture {
    /// Next gesture after a pointer event, given the freshly computed bounds.
    ///
    /// Down and up always re-baseline on the new rectangle since the touch set
    /// changed. A move keeps an existing anchor and baseline.
    #[must_use]
    pub fn recompute(&self, edge: TouchEdge, rect: Option<Rect>) -> Gesture {
        let phase = match (rect, edge, self.phase) {
            (None, _, _) => GesturePhase::Idle,
            (Some(_), TouchEdge::Move, phase @ GesturePhase::Gesturing { .. }) => phase,
            (Some(r), _, _) => GesturePhase::Gesturing {
                start_position: r.origin(),
                start_size: r,
            },
        };
        Gesture { rect, phase }
    }

    /// Move the anchor to the current rectangle origin, leaving the baseline alone.
    #[must_use]
    pub fn reanchored(&self) -> Gesture {
        match (self.rect, self.phase) {
            (Some(rect), GesturePhase::Gesturing { start_size, .. }) => Gesture {
                rect: self.rect,
                phase: GesturePhase::Gesturing {
                    start_position: rect.origin(),
                    start_size,
                },
            },
            _ => *self,
        }
    }
}
