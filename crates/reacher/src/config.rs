use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ReacherError;
use crate::reset::DEFAULT_GOAL_NOISE_STD;

/// Episode and reward parameters.
///
/// Every field has a default, so a JSON document only needs to name the
/// values it overrides:
///
/// ```json
/// { "max_steps": 200, "success_threshold": 0.1 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReacherConfig {
    /// Episode length; `done` is raised on this step
    pub max_steps: u32,
    /// Simulator substeps per environment step
    pub frame_skip: u32,
    /// Tip-to-goal distance at or under which a step counts as a success
    pub success_threshold: f64,
    /// Weight of the squared-action penalty
    pub ctrl_cost_weight: f64,
    /// Reward added on a successful step
    pub success_bonus: f64,
    /// Per-axis standard deviation of the goal perturbation
    pub goal_noise_std: f64,
}

impl Default for ReacherConfig {
    fn default() -> Self {
        Self {
            max_steps: 100,
            frame_skip: 2,
            success_threshold: 0.25,
            ctrl_cost_weight: 1e-4,
            success_bonus: 1.0,
            goal_noise_std: DEFAULT_GOAL_NOISE_STD,
        }
    }
}

impl ReacherConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ReacherError::ConfigParse`] for malformed JSON and
    /// [`ReacherError::Config`] for values that fail [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ReacherError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// I/O errors plus everything [`Self::from_json_str`] reports.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReacherError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// # Errors
    ///
    /// Returns [`ReacherError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ReacherError> {
        if self.max_steps == 0 {
            return Err(ReacherError::Config("max_steps must be at least 1".into()));
        }
        if self.frame_skip == 0 {
            return Err(ReacherError::Config("frame_skip must be at least 1".into()));
        }
        for (name, value) in [
            ("success_threshold", self.success_threshold),
            ("ctrl_cost_weight", self.ctrl_cost_weight),
            ("goal_noise_std", self.goal_noise_std),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ReacherError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !self.success_bonus.is_finite() {
            return Err(ReacherError::Config("success_bonus must be finite".into()));
        }
        Ok(())
    }
}
