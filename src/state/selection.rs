//! Which things the current gesture rectangle holds.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::geometry::Rect;
use crate::model::Thing;

/// Whether the thing's circle overlaps `rect`.
pub fn intersects(thing: &Thing, rect: &Rect) -> bool {
    rect.intersects_circle(thing.position(), thing.radius)
}

/// Re-evaluate every thing against `rect`. No rectangle selects nothing.
pub fn resolve(things: &[Thing], rect: Option<&Rect>) -> Vec<Thing> {
    things
        .iter()
        .map(|t| Thing {
            selected: rect.is_some_and(|r| intersects(t, r)),
            ..*t
        })
        .collect()
}
