use std::collections::BTreeMap;

use animation::{Addition, Completion, CompletionState, LabelOptions, RenderSession, RenderSurface};
use curve::{Curve, Point};

use crate::config::DemoConfig;
use crate::events::DemoEvent;

enum Stage {
    Idle,
    Adding(Completion),
    Pausing { started: Option<f64> },
    /// The step limit was reached; report the last point on the next tick.
    Closing(Point),
    Finished,
}

/// Adds P to a running point again and again: `P, 2P, 3P, ...`.
///
/// Once the sum reaches the point at infinity the walk starts over from P.
pub struct RepeatedAddition {
    base: Point,
    current: Point,
    multiple: u64,
    labels: LabelOptions,
    pause_ms: f64,
    limit: Option<u64>,
    steps: u64,
    stage: Stage,
}

impl RepeatedAddition {
    pub fn new(curve: &Curve, pause_ms: f64) -> Self {
        let base = curve.base_point();
        RepeatedAddition {
            base,
            current: base,
            multiple: 1,
            labels: LabelOptions::default().with_coords(),
            pause_ms,
            limit: None,
            steps: 0,
            stage: Stage::Idle,
        }
    }

    /// Paced by the configured pause between additions.
    pub fn from_config(curve: &Curve, config: &DemoConfig) -> Self {
        Self::new(curve, config.add_pause_ms)
    }

    /// Stop after `steps` additions instead of running forever.
    pub fn with_limit(mut self, steps: u64) -> Self {
        self.limit = Some(steps);
        self
    }

    /// The multiple and point the next addition starts from.
    pub fn current(&self) -> (u64, Point) {
        (self.multiple, self.current)
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Finished)
    }

    pub fn advance<S: RenderSurface>(&mut self, timestamp: f64, session: &mut RenderSession<S>) -> Option<DemoEvent> {
        match &mut self.stage {
            Stage::Idle => {
                let request = Addition::new(self.base, self.current)
                    .with_multiples(1, self.multiple)
                    .with_labels(self.labels.clone())
                    .with_redraw(BTreeMap::from([(1, self.base)]));
                self.stage = Stage::Adding(session.start_addition(request));
                None
            }
            Stage::Adding(completion) => {
                session.advance(timestamp);
                match completion.poll() {
                    CompletionState::Pending => None,
                    CompletionState::Ready(result) => {
                        self.steps += 1;
                        if result.point.is_infinity() {
                            log::info!("{}P is the point at infinity, starting over", result.multiple);
                            self.current = self.base;
                            self.multiple = 1;
                        } else {
                            self.current = result.point;
                            self.multiple = result.multiple;
                        }

                        self.stage = if self.limit.is_some_and(|limit| self.steps >= limit) {
                            Stage::Closing(result.point)
                        } else {
                            Stage::Pausing { started: None }
                        };
                        Some(DemoEvent::Step {
                            multiple: result.multiple,
                            point: result.point,
                        })
                    }
                    CompletionState::Cancelled => {
                        log::warn!("addition onto {}P was cancelled, retrying", self.multiple);
                        self.stage = Stage::Idle;
                        None
                    }
                }
            }
            Stage::Pausing { started } => {
                let started = *started.get_or_insert(timestamp);
                if timestamp - started > self.pause_ms {
                    self.stage = Stage::Idle;
                }
                None
            }
            Stage::Closing(point) => {
                let point = *point;
                self.stage = Stage::Finished;
                Some(DemoEvent::Finished(point))
            }
            Stage::Finished => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animation::{AnimationConfig, RecordingSurface};

    #[test]
    fn test_restarts_after_infinity() {
        let curve = Curve::demo();
        let p = curve.base_point();
        let mut session = RenderSession::new(RecordingSurface::new(), curve, AnimationConfig::uniform(10.0));
        let mut demo = RepeatedAddition::new(&curve, 50.0).with_limit(6);

        let mut steps = Vec::new();
        let mut finished = None;
        for i in 1..50_000 {
            match demo.advance(i as f64 * 16.0, &mut session) {
                Some(DemoEvent::Step { multiple, point }) => steps.push((multiple, point)),
                Some(DemoEvent::Finished(point)) => {
                    finished = Some(point);
                    break;
                }
                None => {}
            }
        }

        // (3, 6) has order 5
        let expected: Vec<(u64, Point)> = [2, 3, 4, 5, 2, 3]
            .iter()
            .map(|n| (*n, curve.point_mult(&p, *n)))
            .collect();
        assert_eq!(steps, expected);
        assert_eq!(steps[3].1, Point::INFINITY);
        assert_eq!(finished, Some(curve.point_mult(&p, 3)));
        assert_eq!(demo.current(), (3, curve.point_mult(&p, 3)));
        assert!(demo.is_finished());
    }

    #[test]
    fn test_pause_comes_from_config() {
        let curve = Curve::demo();
        let config = DemoConfig::default().sped_up(10.0);
        let mut session = RenderSession::new(RecordingSurface::new(), curve, config.animation);
        let mut demo = RepeatedAddition::from_config(&curve, &config).with_limit(2);

        let mut step_times = Vec::new();
        for i in 1..50_000 {
            let t = i as f64 * 16.0;
            match demo.advance(t, &mut session) {
                Some(DemoEvent::Step { .. }) => step_times.push(t),
                Some(DemoEvent::Finished(_)) => break,
                None => {}
            }
        }

        assert_eq!(step_times.len(), 2);
        assert!(step_times[1] - step_times[0] > config.add_pause_ms);
        assert_eq!(demo.current(), (3, curve.point_mult(&curve.base_point(), 3)));
    }

    #[test]
    fn test_labels_show_coordinates() {
        let curve = Curve::demo();
        let mut session = RenderSession::new(RecordingSurface::new(), curve, AnimationConfig::uniform(10.0));
        let mut demo = RepeatedAddition::new(&curve, 50.0).with_limit(1);

        for i in 1..5_000 {
            if let Some(DemoEvent::Finished(_)) = demo.advance(i as f64 * 16.0, &mut session) {
                break;
            }
        }
        assert!(session.surface().has_text("2P"));
        assert!(session.surface().has_text("(80, 10)"));
        assert!(session.surface().has_text("(3, 6)"));
    }
}
