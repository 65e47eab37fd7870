use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::phase::{Phase, Variant};
use crate::segment::INITIAL_SEGMENT_BUDGET;

/// Phase durations in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseDurations {
    pub tangent: f64,
    pub tan_pause: f64,
    /// Pacing of the secant sweep and of the vertical line to ∞.
    pub line: f64,
    pub line_pause: f64,
    pub negate: f64,
    pub infinity_symbol: f64,
    pub done: f64,
}

impl Default for PhaseDurations {
    fn default() -> Self {
        PhaseDurations {
            tangent: 500.0,
            tan_pause: 300.0,
            line: 500.0,
            line_pause: 500.0,
            negate: 1000.0,
            infinity_symbol: 1.0,
            done: 1000.0,
        }
    }
}

impl PhaseDurations {
    /// How long `phase` lasts. Label is a single tick and has no duration.
    pub fn of(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Label => 0.0,
            Phase::Tangent => self.tangent,
            Phase::TanPause => self.tan_pause,
            Phase::Sweep | Phase::Line => self.line,
            Phase::LinePause => self.line_pause,
            Phase::Negate => self.negate,
            Phase::InfinitySymbol => self.infinity_symbol,
            Phase::Done => self.done,
        }
    }

    /// Sum of the durations of every phase of `variant`.
    pub fn total(&self, variant: Variant) -> f64 {
        variant.phases().iter().map(|phase| self.of(*phase)).sum()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let phases = [
            Phase::Tangent,
            Phase::TanPause,
            Phase::Line,
            Phase::LinePause,
            Phase::Negate,
            Phase::InfinitySymbol,
            Phase::Done,
        ];
        for phase in phases {
            let value = self.of(phase);
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDuration { phase, value });
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub durations: PhaseDurations,
    /// Segments the sweep may draw per tick before any wrap.
    pub segment_budget: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            durations: PhaseDurations::default(),
            segment_budget: INITIAL_SEGMENT_BUDGET,
        }
    }
}

impl AnimationConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AnimationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.durations.validate().inspect_err(|err| {
            log::warn!("rejected animation configuration: {err}");
        })?;
        if !self.segment_budget.is_finite() || self.segment_budget < 1.0 {
            log::warn!(
                "rejected animation configuration: segment budget {}",
                self.segment_budget
            );
            return Err(ConfigError::InvalidSegmentBudget(self.segment_budget));
        }
        Ok(())
    }

    /// Every phase lasts `ms`; handy for fast headless runs.
    pub fn uniform(ms: f64) -> Self {
        AnimationConfig {
            durations: PhaseDurations {
                tangent: ms,
                tan_pause: ms,
                line: ms,
                line_pause: ms,
                negate: ms,
                infinity_symbol: ms,
                done: ms,
            },
            ..Self::default()
        }
    }
}
