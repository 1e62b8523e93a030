//! The state owner for one stage.
//!
//! A `Session` is created when the stage mounts and shared by handle with
//! every pointer listener and the frame loop. It holds the configuration, the
//! touch tracker and the current [`Stage`] value; every event replaces the
//! stage through [`Reducible::reduce`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;
use yew::Reducible;

use crate::config::StageConfig;
use crate::error::StageError;
use crate::geometry::Point;
use crate::model::{Stage, StageAction, Thing};
use crate::render::RenderSink;
use crate::state::tracker::TrackedPoint;
use crate::state::{PointTracker, TouchEdge};

pub struct Session {
    config: StageConfig,
    tracker: PointTracker,
    stage: Rc<Stage>,
}

impl Session {
    pub fn new(config: StageConfig, things: Vec<Thing>) -> Self {
        let tracker = PointTracker::new(config.sample_limit);
        let stage = Rc::new(Stage::new(things, config.tuning));
        Self {
            config,
            tracker,
            stage,
        }
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn tracker(&self) -> &PointTracker {
        &self.tracker
    }

    pub fn stage(&self) -> &Rc<Stage> {
        &self.stage
    }

    fn dispatch(&mut self, action: StageAction) {
        let was_gesturing = self.stage.gesture.phase.is_gesturing();
        self.stage = self.stage.clone().reduce(action);
        let gesturing = self.stage.gesture.phase.is_gesturing();
        if was_gesturing == gesturing {
            return;
        }
        let phase = self.stage.gesture.phase;
        match (phase.start_position(), phase.start_size()) {
            (Some(at), Some(size)) => log::debug!(
                "gesture started at ({:.3}, {:.3}), span {:.3}, {} touch(es) led by {}",
                at.x,
                at.y,
                size.half_diagonal(),
                self.tracker.len(),
                self.tracker.tracked_by_age().next().map_or("?", TrackedPoint::id)
            ),
            _ => log::debug!("gesture ended after frame {}", self.stage.frame),
        }
    }

    fn touch(&mut self, edge: TouchEdge) {
        let rect = self.tracker.bounds(self.config.min_touches);
        self.dispatch(StageAction::Touch { edge, rect });
        if edge != TouchEdge::Move {
            log::debug!("selection: {} thing(s)", self.stage.selected_count());
        }
    }

    pub fn pointer_down(&mut self, id: &str, at: Point) {
        self.tracker.seen(id, at);
        self.touch(TouchEdge::Down);
    }

    /// Moves of pointers that never went down (hover) are ignored.
    pub fn pointer_move(&mut self, id: &str, at: Point) {
        if !self.tracker.contains(id) {
            return;
        }
        self.tracker.seen(id, at);
        self.touch(TouchEdge::Move);
    }

    /// Handles both release and cancel.
    pub fn pointer_up(&mut self, id: &str) {
        if !self.tracker.delete(id) {
            return;
        }
        if self.tracker.is_empty() {
            log::debug!("last touch released");
        }
        self.touch(TouchEdge::Up);
    }

    /// Advance one frame, then hand every thing to `sink`.
    ///
    /// Stops at the first sink error; the stage has already advanced by then.
    pub fn frame(&mut self, sink: &mut impl RenderSink) -> Result<(), StageError> {
        let lead = self.tracker.lead_vector();
        self.dispatch(StageAction::Frame { lead });
        for thing in &self.stage.things {
            sink.place(thing)?;
        }
        Ok(())
    }
}
