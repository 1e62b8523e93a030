//! Per-touch sample buffer.
//!
//! Each active pointer keeps its first sample plus a bounded window of recent
//! samples. Touches are kept in the order they were first seen, so iterating
//! yields the oldest touch first.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use std::collections::VecDeque;

use crate::geometry::{self, Point, Rect};

/// History of a single touch.
#[derive(Debug, Clone)]
pub struct TrackedPoint {
    id: String,
    initial: Point,
    samples: VecDeque<Point>,
}

impl TrackedPoint {
    fn new(id: &str, at: Point) -> Self {
        let mut samples = VecDeque::new();
        samples.push_back(at);
        Self {
            id: id.to_string(),
            initial: at,
            samples,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Position of the first sample, kept even after it leaves the window.
    pub fn initial(&self) -> Point {
        self.initial
    }

    /// Most recent position.
    pub fn last(&self) -> Point {
        self.samples.back().copied().unwrap_or(self.initial)
    }

    /// Offset from where the touch started to where it is now.
    pub fn vector_cartesian(&self) -> Point {
        geometry::vector_between(self.initial(), self.last())
    }

    /// Number of samples currently buffered.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[derive(Debug, Clone)]
pub struct PointTracker {
    sample_limit: usize,
    points: Vec<TrackedPoint>,
}

impl PointTracker {
    /// `sample_limit` is the per-touch window size; values below 1 are raised to 1.
    pub fn new(sample_limit: usize) -> Self {
        Self {
            sample_limit: sample_limit.max(1),
            points: Vec::new(),
        }
    }

    /// Record a sample for `id`, starting a new track if the id is unknown.
    pub fn seen(&mut self, id: &str, at: Point) {
        match self.points.iter_mut().find(|p| p.id == id) {
            Some(tracked) => {
                tracked.samples.push_back(at);
                while tracked.samples.len() > self.sample_limit {
                    tracked.samples.pop_front();
                }
            }
            None => self.points.push(TrackedPoint::new(id, at)),
        }
    }

    /// Stop tracking `id`. Returns whether it was tracked.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        self.points.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.points.iter().any(|p| p.id == id)
    }

    /// Count of active touches.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Samples buffered across all touches.
    pub fn buffered_samples(&self) -> usize {
        self.points.iter().map(TrackedPoint::sample_count).sum()
    }

    /// Latest position of every touch, oldest touch first.
    pub fn values_by_age(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(TrackedPoint::last)
    }

    /// Every tracked touch, oldest first.
    pub fn tracked_by_age(&self) -> impl Iterator<Item = &TrackedPoint> + '_ {
        self.points.iter()
    }

    /// Offset vector of the oldest touch, if any touch is active.
    pub fn lead_vector(&self) -> Option<Point> {
        self.tracked_by_age().next().map(TrackedPoint::vector_cartesian)
    }

    /// Bounding rectangle of all touches once at least `min_touches` are active.
    pub fn bounds(&self, min_touches: usize) -> Option<Rect> {
        if self.len() >= min_touches {
            geometry::bbox(self.values_by_age())
        } else {
            None
        }
    }
}
