//! Stage data model: things, the gesture snapshot and the reducer that
//! produces the next stage value for every pointer event and frame.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::rc::Rc;
use yew::Reducible;

use crate::config::MotionTuning;
use crate::geometry::{Point, Rect};
use crate::state::{Gesture, TouchEdge, motion, selection};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thing {
    pub id: usize,
    /// Normalized position of the thing's center.
    pub x: f64,
    pub y: f64,
    /// Normalized hit radius.
    pub radius: f64,
    pub selected: bool,
}

impl Thing {
    pub fn new(id: usize, at: Point, radius: f64) -> Self {
        Self {
            id,
            x: at.x,
            y: at.y,
            radius,
            selected: false,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn moved_to(&self, at: Point) -> Self {
        Self {
            x: at.x,
            y: at.y,
            ..*self
        }
    }
}

/// Create `count` things at positions drawn from `rng`, which must yield
/// values in `[0, 1)`.
pub fn scatter(count: usize, radius: f64, mut rng: impl FnMut() -> f64) -> Vec<Thing> {
    (0..count)
        .map(|id| {
            let at = Point::new(rng(), rng()).clamp_unit();
            Thing::new(id, at, radius)
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Stage {
    pub things: Vec<Thing>,
    pub gesture: Gesture,
    /// Motion vector of the latest frame; decays while idle in the drift model.
    pub offset: Point,
    pub tuning: MotionTuning,
    /// Frames advanced so far.
    pub frame: u64,
}

impl Stage {
    pub fn new(things: Vec<Thing>, tuning: MotionTuning) -> Self {
        Self {
            things,
            tuning,
            ..Self::default()
        }
    }

    pub fn selected_count(&self) -> usize {
        self.things.iter().filter(|t| t.selected).count()
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum StageAction {
    /// The touch set changed; `rect` is the tracker's new bounding box.
    Touch { edge: TouchEdge, rect: Option<Rect> },
    /// One animation frame. `lead` is the oldest touch's offset vector.
    Frame { lead: Option<Point> },
}

impl Reducible for Stage {
    type Action = StageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use StageAction::*;
        let mut new = (*self).clone();
        match action {
            Touch { edge, rect } => {
                new.gesture = self.gesture.recompute(edge, rect);
                // Selection follows the touch set, not finger motion.
                if edge != TouchEdge::Move {
                    new.things = selection::resolve(&self.things, new.gesture.rect.as_ref());
                }
            }
            Frame { lead } => {
                let step = motion::advance(&self.things, &self.gesture, self.offset, lead, &self.tuning);
                new.things = step.things;
                new.offset = step.offset;
                new.gesture = self.gesture.reanchored();
                new.frame = new.frame.wrapping_add(1);
            }
        }
        Rc::new(new)
    }
}
