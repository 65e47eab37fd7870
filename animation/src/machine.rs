//! The phased animation of a single point addition.

use std::collections::BTreeMap;

use curve::{Curve, Point};

use crate::canvas::{Canvas, LabelOptions};
use crate::config::{AnimationConfig, PhaseDurations};
use crate::ease::{ease_in_out, fraction};
use crate::geometry::{display_slope, line_box_bounds, order_by_x, total_x_length, Coord, EPS};
use crate::phase::{Phase, Variant};
use crate::render::{DotStyle, LineStyle, RenderSurface};
use crate::segment::SegmentWalker;

/// A request to animate `n_p·B + n_q·B = (n_p + n_q)·B` for some base `B`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Addition {
    pub p: Point,
    pub n_p: u64,
    pub q: Point,
    pub n_q: u64,
    pub labels: LabelOptions,
    /// Points already on screen, redrawn whenever the plot is reset.
    pub redraw: BTreeMap<u64, Point>,
}

impl Addition {
    pub fn new(p: Point, q: Point) -> Self {
        Addition {
            p,
            n_p: 1,
            q,
            n_q: 1,
            labels: LabelOptions::default(),
            redraw: BTreeMap::new(),
        }
    }

    pub fn doubling(p: Point) -> Self {
        Self::new(p, p)
    }

    pub fn with_multiples(mut self, n_p: u64, n_q: u64) -> Self {
        self.n_p = n_p;
        self.n_q = n_q;
        self
    }

    pub fn with_labels(mut self, labels: LabelOptions) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_redraw(mut self, redraw: BTreeMap<u64, Point>) -> Self {
        self.redraw = redraw;
        self
    }

    pub fn result_multiple(&self) -> u64 {
        self.n_p.saturating_add(self.n_q)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AdditionResult {
    pub multiple: u64,
    pub point: Point,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Running,
    Done(AdditionResult),
    Cancelled,
}

/// Geometry carried between ticks of the sweep phase.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepCache {
    pub last: Coord,
    pub x_left: f64,
    pub x_per_ms: f64,
    pub segment_budget: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RunState {
    Running,
    Finished(AdditionResult),
    Cancelled,
}

pub struct AddAnimation {
    request: Addition,
    modulus: u64,
    result: Point,
    neg_result: Point,
    slope: Option<f64>,
    variant: Variant,
    durations: PhaseDurations,
    segment_budget: f64,
    index: usize,
    started: Vec<Option<f64>>,
    prev: Option<f64>,
    sweep: Option<SweepCache>,
    state: RunState,
}

impl AddAnimation {
    pub fn new(curve: &Curve, request: Addition, config: &AnimationConfig) -> Self {
        let result = curve.point_add(&request.p, &request.q);
        let variant = if request.p.is_infinity() || request.q.is_infinity() {
            Variant::Identity
        } else if result.is_infinity() {
            Variant::Infinite
        } else {
            Variant::Finite
        };
        let slope = curve
            .slope(&request.p, &request.q)
            .map(|lambda| display_slope(lambda, curve.modulus()));

        AddAnimation {
            modulus: curve.modulus(),
            neg_result: curve.negate(&result),
            result,
            slope,
            variant,
            durations: config.durations,
            segment_budget: config.segment_budget,
            index: 0,
            started: vec![None; variant.phases().len()],
            prev: None,
            sweep: None,
            state: RunState::Running,
            request,
        }
    }

    pub fn request(&self) -> &Addition {
        &self.request
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn phase(&self) -> Phase {
        let phases = self.variant.phases();
        phases[self.index.min(phases.len() - 1)]
    }

    /// The timestamp of the first tick spent in `phase`, if it has been reached.
    pub fn phase_started(&self, phase: Phase) -> Option<f64> {
        self.variant
            .phases()
            .iter()
            .position(|p| *p == phase)
            .and_then(|i| self.started[i])
    }

    pub fn sweep_cache(&self) -> Option<&SweepCache> {
        self.sweep.as_ref()
    }

    /// What the animation completes with.
    pub fn result(&self) -> AdditionResult {
        AdditionResult {
            multiple: self.request.result_multiple(),
            point: self.result,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, RunState::Finished(_))
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == RunState::Cancelled
    }

    /// Stop the animation. Later calls to `advance` report `Cancelled`.
    pub fn cancel(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Cancelled;
            self.sweep = None;
        }
    }

    /// Do the work due at `timestamp`.
    ///
    /// Exactly one phase is worked on per call. A timestamp that does not move
    /// past the previous one does nothing.
    pub fn advance<S: RenderSurface>(&mut self, timestamp: f64, canvas: &mut Canvas<S>) -> StepOutcome {
        match self.state {
            RunState::Cancelled => return StepOutcome::Cancelled,
            RunState::Finished(result) => return StepOutcome::Done(result),
            RunState::Running => {}
        }
        if self.prev.is_some_and(|prev| timestamp <= prev) {
            return StepOutcome::Running;
        }

        let phase = self.phase();
        let started = *self.started[self.index].get_or_insert(timestamp);
        let elapsed = timestamp - started;
        let duration = self.durations.of(phase);

        let finished = match phase {
            Phase::Label => {
                self.draw_operands(canvas);
                true
            }
            Phase::Tangent => {
                let reach = ease_in_out(fraction(elapsed, duration));
                match self.slope {
                    Some(slope) => self.draw_tangent(canvas, slope, reach),
                    None => self.draw_vertical(canvas, reach, &LineStyle::TANGENT),
                }
                elapsed > duration
            }
            Phase::TanPause | Phase::LinePause | Phase::Done => elapsed > duration,
            Phase::Sweep => self.sweep(canvas, timestamp),
            Phase::Line => {
                self.draw_vertical(canvas, 1.0, &LineStyle::SECANT);
                elapsed > duration
            }
            Phase::Negate => self.draw_negation(canvas, elapsed, duration),
            Phase::InfinitySymbol => {
                canvas.infinity_symbol();
                true
            }
        };
        self.prev = Some(timestamp);

        if !finished {
            return StepOutcome::Running;
        }
        log::debug!("{phase} finished at {timestamp:.1} ms");

        if phase == Phase::Done {
            return self.finish(canvas);
        }
        self.index += 1;
        StepOutcome::Running
    }

    fn draw_operands<S: RenderSurface>(&self, canvas: &mut Canvas<S>) {
        let request = &self.request;
        canvas.dot(&request.p, &DotStyle::BASE);
        canvas.dot(&request.q, &DotStyle::OPERAND);
        canvas.label_point(request.n_p, &request.p, &request.labels);
        if request.n_q != request.n_p || request.q != request.p {
            canvas.label_point(request.n_q, &request.q, &request.labels);
        }
    }

    fn draw_operand_dots<S: RenderSurface>(&self, canvas: &mut Canvas<S>) {
        canvas.dot(&self.request.p, &DotStyle::BASE);
        canvas.dot(&self.request.q, &DotStyle::OPERAND);
    }

    /// The dashed line through P grown to `reach` of its extent in the box.
    fn draw_tangent<S: RenderSurface>(&self, canvas: &mut Canvas<S>, slope: f64, reach: f64) {
        let Some(origin) = Coord::of(&self.request.p) else {
            return;
        };
        let (lo, hi) = line_box_bounds(origin, slope, self.modulus as f64);
        let forward = (hi - origin.x) * reach;
        let back = (origin.x - lo) * reach;

        canvas.line(
            origin,
            Coord::new(origin.x + forward, origin.y + forward * slope),
            &LineStyle::TANGENT,
        );
        canvas.line(
            origin,
            Coord::new(origin.x - back, origin.y - back * slope),
            &LineStyle::TANGENT,
        );
        self.draw_operand_dots(canvas);
    }

    /// The vertical through P grown to `reach` of the way to both edges.
    fn draw_vertical<S: RenderSurface>(&self, canvas: &mut Canvas<S>, reach: f64, style: &LineStyle) {
        let Some(origin) = Coord::of(&self.request.p) else {
            return;
        };
        let up = (self.modulus as f64 - origin.y) * reach;
        let down = origin.y * reach;

        canvas.line(origin, Coord::new(origin.x, origin.y + up), style);
        canvas.line(origin, Coord::new(origin.x, origin.y - down), style);
        self.draw_operand_dots(canvas);
    }

    /// Walk this tick's share of the modular line. True once all of it is drawn.
    fn sweep<S: RenderSurface>(&mut self, canvas: &mut Canvas<S>, timestamp: f64) -> bool {
        let Some(slope) = self.slope else {
            return true;
        };
        let walker = SegmentWalker::new(self.modulus, slope);
        let dt = self.prev.map_or(0.0, |prev| timestamp - prev);

        if self.sweep.is_none() {
            self.sweep = Some(self.start_sweep());
        }
        let Some(cache) = self.sweep.as_mut() else {
            return true;
        };

        let todo = (cache.x_per_ms * dt).min(cache.x_left);
        let walk = walker.walk(cache.last, todo, cache.segment_budget);
        for segment in &walk.segments {
            log::trace!("segment {:?} -> {:?}", segment.from, segment.to);
            canvas.line(segment.from, segment.to, &LineStyle::SECANT);
        }
        cache.last = walk.end;
        cache.x_left -= walk.consumed_x;
        cache.segment_budget = walk.budget;
        let exhausted = cache.x_left <= EPS;

        self.draw_operand_dots(canvas);
        if exhausted {
            self.sweep = None;
            canvas.dot(&self.neg_result, &DotStyle::THIRD);
        }
        exhausted
    }

    fn start_sweep(&self) -> SweepCache {
        let (leftmost, _) = order_by_x(self.request.p, self.request.q);
        let x_left = total_x_length(&self.request.p, &self.request.q, &self.neg_result, self.modulus);
        let x_per_ms = if self.durations.line > 0.0 {
            x_left / self.durations.line
        } else {
            x_left
        };

        SweepCache {
            last: Coord::of(&leftmost).unwrap_or(Coord::new(0.0, 0.0)),
            x_left,
            x_per_ms,
            segment_budget: self.segment_budget,
        }
    }

    /// Dashed reflection growing from -R towards R.
    fn draw_negation<S: RenderSurface>(&self, canvas: &mut Canvas<S>, elapsed: f64, duration: f64) -> bool {
        let (Some(from), Some(to)) = (Coord::of(&self.neg_result), Coord::of(&self.result)) else {
            return true;
        };
        let reach = ease_in_out(fraction(elapsed, duration));
        canvas.line(from, from.lerp(&to, reach), &LineStyle::REFLECTION);
        canvas.dot(&self.neg_result, &DotStyle::THIRD);
        self.draw_operand_dots(canvas);

        if elapsed <= duration {
            return false;
        }
        canvas.dot(&self.result, &DotStyle::RESULT);
        canvas.label_point(self.request.result_multiple(), &self.result, &self.request.labels);
        true
    }

    fn finish<S: RenderSurface>(&mut self, canvas: &mut Canvas<S>) -> StepOutcome {
        let result = self.result();

        canvas.reset();
        canvas.draw_and_label_points(&self.request.redraw, &self.request.labels);
        if result.point.is_infinity() {
            canvas.infinity_symbol();
        } else {
            if !self.request.p.is_infinity() {
                canvas.label_point(self.request.n_p, &self.request.p, &self.request.labels);
            }
            canvas.dot(&result.point, &DotStyle::RESULT);
            canvas.label_point(result.multiple, &result.point, &self.request.labels);
        }

        self.state = RunState::Finished(result);
        log::debug!(
            "{} + {} = {} ({}·{})",
            self.request.p,
            self.request.q,
            result.point,
            result.multiple,
            self.request.labels.base_label
        );
        StepOutcome::Done(result)
    }
}
