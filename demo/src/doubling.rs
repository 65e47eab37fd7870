use std::collections::BTreeMap;

use animation::{Coord, DotStyle, LabelOptions, RenderSession, RenderSurface, ease_in_out, fraction};
use curve::{Curve, Point};

use crate::config::DoublingTiming;
use crate::events::DemoEvent;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Stage {
    Moving { started: Option<f64> },
    Pausing { started: Option<f64> },
    Finished,
}

/// Shows `P, 2P, 4P, ...` up to a limit, sliding a dot from each power of two
/// to the next.
#[derive(Clone, Debug)]
pub struct QuickDoubles {
    multiples: Vec<(u64, Point)>,
    shown: BTreeMap<u64, Point>,
    labels: LabelOptions,
    timing: DoublingTiming,
    /// Index into `multiples` of the point being moved to.
    target: usize,
    stage: Stage,
    prev: Option<f64>,
}

impl QuickDoubles {
    pub fn new(curve: &Curve, base: Point, limit: u64, labels: LabelOptions, timing: DoublingTiming) -> Self {
        let multiples = curve.multiples_of_two(&base, limit.max(1));
        let shown = multiples.iter().take(1).copied().collect();

        QuickDoubles {
            multiples,
            shown,
            labels,
            timing,
            target: 1,
            stage: Stage::Moving { started: None },
            prev: None,
        }
    }

    /// Every multiple drawn so far, keyed by multiple.
    pub fn shown(&self) -> &BTreeMap<u64, Point> {
        &self.shown
    }

    /// All powers of two this run covers, drawn or not.
    pub fn multiples(&self) -> &[(u64, Point)] {
        &self.multiples
    }

    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Finished
    }

    /// The highest power of two reached so far.
    pub fn top(&self) -> (u64, Point) {
        self.shown
            .last_key_value()
            .map(|(n, point)| (*n, *point))
            .unwrap_or((0, Point::INFINITY))
    }

    pub fn advance<S: RenderSurface>(&mut self, timestamp: f64, session: &mut RenderSession<S>) -> Option<DemoEvent> {
        if self.stage == Stage::Finished || self.prev.is_some_and(|prev| timestamp <= prev) {
            return None;
        }
        if self.prev.is_none() {
            session.reset();
        }
        self.prev = Some(timestamp);

        if self.target >= self.multiples.len() {
            self.stage = Stage::Finished;
            self.redraw(session);
            let (_, point) = self.top();
            return Some(DemoEvent::Finished(point));
        }

        match &mut self.stage {
            Stage::Moving { started } => {
                let started = *started.get_or_insert(timestamp);
                let progress = fraction(timestamp - started, self.timing.move_ms);
                let (_, from) = self.multiples[self.target - 1];
                let (multiple, to) = self.multiples[self.target];

                self.redraw(session);
                if let (Some(a), Some(b)) = (Coord::of(&from), Coord::of(&to)) {
                    let dot = a.lerp(&b, ease_in_out(progress));
                    session.canvas_mut().dot_at(dot, &DotStyle::THIRD);
                }

                if progress < 1.0 {
                    return None;
                }
                self.shown.insert(multiple, to);
                self.redraw(session);
                self.stage = Stage::Pausing { started: None };
                log::debug!("{multiple}{} = {to}", self.labels.base_label);
                Some(DemoEvent::Step { multiple, point: to })
            }
            Stage::Pausing { started } => {
                let started = *started.get_or_insert(timestamp);
                if timestamp - started > self.timing.pause_ms {
                    self.target += 1;
                    self.stage = Stage::Moving { started: None };
                }
                None
            }
            Stage::Finished => None,
        }
    }

    fn redraw<S: RenderSurface>(&self, session: &mut RenderSession<S>) {
        let canvas = session.canvas_mut();
        canvas.reset();
        canvas.draw_and_label_points(&self.shown, &self.labels);
    }
}
