use thiserror::Error;

use crate::phase::Phase;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid animation configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duration for {phase} must be finite and non-negative, got {value}")]
    InvalidDuration { phase: Phase, value: f64 },
    #[error("segment budget must be at least one, got {0}")]
    InvalidSegmentBudget(f64),
}
