//! Per-frame motion of things.
//!
//! While idle, the drift model keeps pushing every thing by the leftover
//! offset, decaying it each frame and wrapping positions around the edges.
//! The attract model leaves idle things alone.
//!
//! While gesturing only selected things move, and their positions are clamped
//! to the stage:
//!
//! | Model | Selected thing moves by |
//! |-------|-------------------------|
//! | Drift | `drag_gain` × offset of the lead touch |
//! | Attract | vector to the rect center × growth multiplier |

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::config::{MotionModel, MotionTuning};
use crate::geometry::{Point, Rect, vector_between};
use crate::model::Thing;
use crate::state::gesture::{Gesture, GesturePhase};

/// Result of advancing one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    pub things: Vec<Thing>,
    pub offset: Point,
}

/// Signed change in half-diagonal since gesture start.
///
/// Positive when the rectangle shrank, negative when it grew.
pub fn growth(start: &Rect, current: &Rect) -> f64 {
    start.half_diagonal() - current.half_diagonal()
}

/// Growth bounded to `±max_growth`, halved.
pub fn growth_multiplier(start: &Rect, current: &Rect, max_growth: f64) -> f64 {
    let bound = max_growth.max(0.0);
    growth(start, current).clamp(-bound, bound) * 0.5
}

pub fn advance(
    things: &[Thing],
    gesture: &Gesture,
    offset: Point,
    lead: Option<Point>,
    tuning: &MotionTuning,
) -> Motion {
    match (gesture.phase, gesture.rect) {
        (GesturePhase::Gesturing { start_position, start_size }, Some(rect)) => match tuning.model {
            MotionModel::Drift => drag(things, offset, lead, tuning),
            MotionModel::Attract => attract(things, start_position, &start_size, &rect, tuning),
        },
        _ => idle(things, offset, tuning),
    }
}

fn idle(things: &[Thing], offset: Point, tuning: &MotionTuning) -> Motion {
    if tuning.model == MotionModel::Attract || offset == Point::ZERO {
        return Motion {
            things: things.to_vec(),
            offset,
        };
    }
    let things = things
        .iter()
        .map(|t| t.moved_to((t.position() + offset).wrap_unit()))
        .collect();
    let decayed = offset * tuning.idle_decay;
    let offset = if decayed.is_negligible(tuning.rest_epsilon) {
        Point::ZERO
    } else {
        decayed
    };
    Motion { things, offset }
}

fn drag(things: &[Thing], offset: Point, lead: Option<Point>, tuning: &MotionTuning) -> Motion {
    let Some(lead) = lead else {
        return Motion {
            things: things.to_vec(),
            offset,
        };
    };
    let step = lead * tuning.drag_gain;
    Motion {
        things: move_selected(things, |_| step),
        offset: lead * tuning.gesture_damping,
    }
}

fn attract(
    things: &[Thing],
    start_position: Point,
    start_size: &Rect,
    rect: &Rect,
    tuning: &MotionTuning,
) -> Motion {
    let k = growth_multiplier(start_size, rect, tuning.max_growth);
    let center = rect.center();
    Motion {
        things: move_selected(things, |at| vector_between(at, center) * k),
        offset: vector_between(start_position, rect.origin()) * tuning.gesture_damping,
    }
}

fn move_selected(things: &[Thing], step: impl Fn(Point) -> Point) -> Vec<Thing> {
    things
        .iter()
        .map(|t| {
            if t.selected {
                let at = t.position();
                t.moved_to((at + step(at)).clamp_unit())
            } else {
                *t
            }
        })
        .collect()
}
