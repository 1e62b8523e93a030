//! Startup configuration.
//!
//! Values are fixed for the lifetime of a session. The browser build looks for
//! a JSON override in local storage; any field left out keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Local storage key holding an optional JSON override.
pub const STORAGE_KEY: &str = "pt_config";

/// Upper bound on `things`; every thing is a DOM element.
pub const MAX_THINGS: usize = 10_000;
/// Upper bound on `sample_limit`, per touch.
pub const MAX_SAMPLES: usize = 100_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// How things move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionModel {
    /// Selected things follow the lead finger; released motion keeps drifting,
    /// decays and wraps around the edges.
    Drift,
    /// Selected things are pulled toward or pushed from the gesture center as
    /// the gesture rectangle shrinks or grows.
    #[default]
    Attract,
}

/// Per-frame motion factors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    pub model: MotionModel,
    /// Idle drift multiplier applied to the offset each frame.
    pub idle_decay: f64,
    /// Scale applied to the live offset while gesturing.
    pub gesture_damping: f64,
    /// Share of the lead finger offset applied to selected things (drift).
    pub drag_gain: f64,
    /// Bound on the absolute growth value before halving (attract).
    pub max_growth: f64,
    /// Offsets below this on both axes snap to zero.
    pub rest_epsilon: f64,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            model: MotionModel::default(),
            idle_decay: 0.8,
            gesture_damping: 0.99,
            drag_gain: 0.7,
            max_growth: 0.5,
            rest_epsilon: 1e-4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Number of things created at startup.
    pub things: usize,
    /// Hit radius of a thing in normalized units.
    pub thing_radius: f64,
    /// Samples kept per touch.
    pub sample_limit: usize,
    /// Touches required before a gesture rectangle exists.
    pub min_touches: usize,
    pub tuning: MotionTuning,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::attract()
    }
}

impl StageConfig {
    /// Finger-following drift with decay and wrapping.
    pub fn drift() -> Self {
        Self {
            things: 50,
            thing_radius: 0.04,
            sample_limit: 5,
            min_touches: 1,
            tuning: MotionTuning {
                model: MotionModel::Drift,
                ..MotionTuning::default()
            },
        }
    }

    /// Pinch to gather, spread to scatter.
    pub fn attract() -> Self {
        Self {
            things: 100,
            thing_radius: 0.03,
            sample_limit: 3000,
            min_touches: 1,
            tuning: MotionTuning {
                model: MotionModel::Attract,
                ..MotionTuning::default()
            },
        }
    }

    /// Parse a JSON override, filling in defaults for missing fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tuning;
        if self.min_touches == 0 {
            return Err(ConfigError::Invalid("min_touches must be at least 1"));
        }
        if self.sample_limit == 0 {
            return Err(ConfigError::Invalid("sample_limit must be at least 1"));
        }
        if self.things > MAX_THINGS {
            return Err(ConfigError::Invalid("things must be at most 10000"));
        }
        if self.sample_limit > MAX_SAMPLES {
            return Err(ConfigError::Invalid("sample_limit must be at most 100000"));
        }
        if !(self.thing_radius.is_finite() && self.thing_radius >= 0.0) {
            return Err(ConfigError::Invalid("thing_radius must be a non-negative number"));
        }
        if !(t.idle_decay.is_finite() && (0.0..1.0).contains(&t.idle_decay)) {
            return Err(ConfigError::Invalid("idle_decay must be in [0, 1)"));
        }
        if !(t.gesture_damping.is_finite() && t.drag_gain.is_finite()) {
            return Err(ConfigError::Invalid("gesture_damping and drag_gain must be finite"));
        }
        if !(t.max_growth.is_finite() && t.max_growth >= 0.0) {
            return Err(ConfigError::Invalid("max_growth must be a non-negative number"));
        }
        if !(t.rest_epsilon.is_finite() && t.rest_epsilon >= 0.0) {
            return Err(ConfigError::Invalid("rest_epsilon must be a non-negative number"));
        }
        Ok(())
    }

    /// Read the override from local storage, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten());
        match raw {
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => {
                    log::info!("using config override from local storage");
                    config
                }
                Err(e) => {
                    log::warn!("ignoring stored config: {e}");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
