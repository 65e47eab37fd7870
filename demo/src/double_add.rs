use std::collections::{BTreeMap, VecDeque};

use animation::{Addition, Completion, CompletionState, LabelOptions, RenderSession, RenderSurface};
use curve::{Curve, Point, binary_terms, pick_demo_scalar, top_bit};
use rand::Rng;

use crate::config::{DemoConfig, DoublingTiming};
use crate::doubling::QuickDoubles;
use crate::events::DemoEvent;

enum Stage {
    Doubling(QuickDoubles),
    Adding(Completion),
    /// Between two additions, so each step gets its own tick.
    Settled,
    Finished,
}

/// Animates `n * base` the way double-and-add computes it.
///
/// The powers of two up to the top bit of `n` are drawn first. Then, from the
/// lowest set bit up, each bit's multiple is added onto the running total.
pub struct DoubleAndAdd {
    n: u64,
    labels: LabelOptions,
    /// Every multiple known so far, redrawn after each addition.
    points: BTreeMap<u64, Point>,
    pending: VecDeque<u64>,
    running: u64,
    stage: Stage,
}

impl DoubleAndAdd {
    pub fn new(curve: &Curve, base: Point, n: u64, labels: LabelOptions, timing: DoublingTiming) -> Self {
        let Some(top) = top_bit(n) else {
            return DoubleAndAdd {
                n,
                labels,
                points: BTreeMap::new(),
                pending: VecDeque::new(),
                running: 0,
                stage: Stage::Settled,
            };
        };

        let doubles = QuickDoubles::new(curve, base, top, labels.clone(), timing);
        let points = doubles.multiples().iter().copied().collect();
        let mut pending: VecDeque<u64> = binary_terms(n).into();
        let running = pending.pop_front().unwrap_or(0);

        DoubleAndAdd {
            n,
            labels,
            points,
            pending,
            running,
            stage: Stage::Doubling(doubles),
        }
    }

    pub fn scalar(&self) -> u64 {
        self.n
    }

    /// The multiple accumulated so far.
    pub fn running_total(&self) -> u64 {
        self.running
    }

    pub fn points(&self) -> &BTreeMap<u64, Point> {
        &self.points
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Finished)
    }

    fn total(&self) -> Point {
        self.points
            .get(&self.running)
            .copied()
            .unwrap_or(Point::INFINITY)
    }

    pub fn advance<S: RenderSurface>(&mut self, timestamp: f64, session: &mut RenderSession<S>) -> Option<DemoEvent> {
        match &mut self.stage {
            Stage::Doubling(doubles) => match doubles.advance(timestamp, session)? {
                DemoEvent::Finished(_) => {
                    self.stage = Stage::Settled;
                    None
                }
                step => Some(step),
            },
            Stage::Adding(completion) => {
                session.advance(timestamp);
                match completion.poll() {
                    CompletionState::Pending => None,
                    CompletionState::Ready(result) => {
                        self.running = result.multiple;
                        self.points.insert(result.multiple, result.point);
                        self.stage = Stage::Settled;
                        Some(DemoEvent::Step {
                            multiple: result.multiple,
                            point: result.point,
                        })
                    }
                    CompletionState::Cancelled => {
                        log::warn!("double-and-add for {} interrupted at {}", self.n, self.running);
                        self.stage = Stage::Finished;
                        None
                    }
                }
            }
            Stage::Settled => self.next_addition(session),
            Stage::Finished => None,
        }
    }

    /// Start adding the next set bit, or finish when none are left.
    fn next_addition<S: RenderSurface>(&mut self, session: &mut RenderSession<S>) -> Option<DemoEvent> {
        let Some(bit) = self.pending.pop_front() else {
            self.stage = Stage::Finished;
            let total = self.total();
            log::debug!("{}{} = {total}", self.n, self.labels.base_label);
            return Some(DemoEvent::Finished(total));
        };

        let addend = self.points.get(&bit).copied().unwrap_or(Point::INFINITY);
        let request = Addition::new(addend, self.total())
            .with_multiples(bit, self.running)
            .with_labels(self.labels.clone())
            .with_redraw(self.points.clone());
        self.stage = Stage::Adding(session.start_addition(request));
        None
    }
}

/// Endless double-and-add rounds on demo scalars, pausing between rounds.
pub struct DoubleAndAddDemo<R> {
    curve: Curve,
    rng: R,
    config: DemoConfig,
    current: Option<DoubleAndAdd>,
    pause_started: Option<f64>,
    rounds: u64,
}

impl<R: Rng> DoubleAndAddDemo<R> {
    pub fn new(curve: Curve, config: DemoConfig, rng: R) -> Self {
        DoubleAndAddDemo {
            curve,
            rng,
            config,
            current: None,
            pause_started: None,
            rounds: 0,
        }
    }

    /// The scalar of the round in progress.
    pub fn target(&self) -> Option<u64> {
        self.current.as_ref().map(DoubleAndAdd::scalar)
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn advance<S: RenderSurface>(&mut self, timestamp: f64, session: &mut RenderSession<S>) -> Option<DemoEvent> {
        if let Some(started) = self.pause_started {
            if timestamp - started <= self.config.cycle_pause_ms {
                return None;
            }
            self.pause_started = None;
        }

        if self.current.is_none() {
            let n = pick_demo_scalar(&mut self.rng);
            log::info!("double-and-add round {}: {n}P", self.rounds + 1);
            self.current = Some(DoubleAndAdd::new(
                &self.curve,
                self.curve.base_point(),
                n,
                LabelOptions::default(),
                self.config.doubling,
            ));
        }
        let round = self.current.as_mut()?;

        let event = round.advance(timestamp, session);
        if round.is_finished() {
            self.current = None;
            self.pause_started = Some(timestamp);
            self.rounds += 1;
        }
        event
    }
}
