//! Configuration for the demonstrations, loaded from JSON.

use animation::AnimationConfig;
use curve::{Curve, CurveParameters};
use serde::{Deserialize, Serialize};

use crate::constants::{
    ADD_PAUSE_MS, CYCLE_PAUSE_MS, DOUBLING_MOVE_MS, DOUBLING_PAUSE_MS, EXCHANGE_PAUSE_MS,
};
use crate::errors::DemoError;

/// Pacing of the repeated-doubling animation.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoublingTiming {
    pub move_ms: f64,
    pub pause_ms: f64,
}

impl Default for DoublingTiming {
    fn default() -> Self {
        Self {
            move_ms: DOUBLING_MOVE_MS,
            pause_ms: DOUBLING_PAUSE_MS,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub curve: CurveParameters,
    pub animation: AnimationConfig,
    pub doubling: DoublingTiming,
    pub add_pause_ms: f64,
    pub cycle_pause_ms: f64,
    pub exchange_pause_ms: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            curve: CurveParameters::default(),
            animation: AnimationConfig::default(),
            doubling: DoublingTiming::default(),
            add_pause_ms: ADD_PAUSE_MS,
            cycle_pause_ms: CYCLE_PAUSE_MS,
            exchange_pause_ms: EXCHANGE_PAUSE_MS,
        }
    }
}

impl DemoConfig {
    /// Parse a configuration, falling back to defaults for missing fields.
    pub fn from_json(json: &str) -> Result<Self, DemoError> {
        let config: DemoConfig = serde_json::from_str(json)?;
        config.animation.validate()?;
        config.curve()?;
        Ok(config)
    }

    /// The validated curve described by this configuration.
    pub fn curve(&self) -> Result<Curve, DemoError> {
        Curve::new(&self.curve).map_err(|err| {
            log::warn!("rejected curve configuration: {err}");
            DemoError::from(err)
        })
    }

    /// Every duration divided by `factor`, for quick headless runs.
    pub fn sped_up(mut self, factor: f64) -> Self {
        let d = &mut self.animation.durations;
        for value in [
            &mut d.tangent,
            &mut d.tan_pause,
            &mut d.line,
            &mut d.line_pause,
            &mut d.negate,
            &mut d.infinity_symbol,
            &mut d.done,
            &mut self.doubling.move_ms,
            &mut self.doubling.pause_ms,
            &mut self.add_pause_ms,
            &mut self.cycle_pause_ms,
            &mut self.exchange_pause_ms,
        ] {
            *value /= factor;
        }
        self
    }
}
