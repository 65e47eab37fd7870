//! Incremental drawing of a modular line.
//!
//! Over F_p the line `y = λx + c` leaves the `[0, p]` box and reappears on the
//! opposite edge. The walker splits each frame's share of the line into
//! straight pieces that stay inside the box, wrapping both axes.

use crate::geometry::{Coord, EPS};

/// Segments drawn per frame before any wrap has happened.
pub const INITIAL_SEGMENT_BUDGET: f64 = 5.0;

/// Budget growth applied on every wrap so steep lines keep up with the clock.
pub const BUDGET_GROWTH: f64 = 1.1;

/// Hard ceiling on steps taken by a single call to [`SegmentWalker::walk`].
pub const RETRY_CEILING: usize = 10;

/// A straight piece of the line, never crossing the edge of the box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub from: Coord,
    pub to: Coord,
}

impl Segment {
    pub fn x_length(&self) -> f64 {
        self.to.x - self.from.x
    }
}

/// What one call to [`SegmentWalker::walk`] produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Walk {
    pub segments: Vec<Segment>,
    /// Where the next call should resume, already wrapped into the box.
    pub end: Coord,
    /// X-distance covered; equals the request unless the walk was cut short.
    pub consumed_x: f64,
    /// Budget to carry into the next call.
    pub budget: f64,
    /// Whether the retry ceiling stopped the walk.
    pub truncated: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentWalker {
    modulus: f64,
    slope: f64,
}

impl SegmentWalker {
    pub fn new(modulus: u64, slope: f64) -> Self {
        SegmentWalker {
            modulus: modulus as f64,
            slope,
        }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Advance up to `todo_x` along the line from `start`.
    ///
    /// Stops when the request is met, when `budget` segments have been
    /// emitted, or after [`RETRY_CEILING`] steps. Every wrap multiplies the
    /// budget by [`BUDGET_GROWTH`]. A budget below one segment (or NaN) is
    /// raised to one so every call makes progress.
    pub fn walk(&self, start: Coord, todo_x: f64, budget: f64) -> Walk {
        let mut current = self.normalize(start);
        let mut todo = todo_x.max(0.0);
        let mut budget = if budget.is_nan() { 1.0 } else { budget.max(1.0) };
        let mut segments = Vec::new();
        let mut consumed_x = 0.0;
        let mut truncated = false;

        while todo > EPS && (segments.len() as f64) < budget {
            if segments.len() == RETRY_CEILING {
                log::debug!(
                    "segment walk hit the retry ceiling with {todo} of x left at {current:?}"
                );
                truncated = true;
                break;
            }

            let (segment, wraps) = self.step(current, todo);
            consumed_x += segment.x_length();
            todo -= segment.x_length();
            budget *= BUDGET_GROWTH.powi(wraps);
            current = self.wrap(segment.to);
            segments.push(segment);
        }

        Walk {
            segments,
            end: current,
            consumed_x,
            budget,
            truncated,
        }
    }

    /// One segment from `from`, ending at the first edge hit or after `todo`.
    fn step(&self, from: Coord, todo: f64) -> (Segment, i32) {
        let p = self.modulus;
        let to_right = p - from.x;
        let to_edge = if self.slope > 0.0 {
            (p - from.y) / self.slope
        } else if self.slope < 0.0 {
            from.y / -self.slope
        } else {
            f64::INFINITY
        };

        let mut dx = todo.min(to_right).min(to_edge);
        if todo - dx <= EPS {
            dx = todo;
        }

        let hits_right = (to_right - dx).abs() <= EPS;
        let hits_edge = (to_edge - dx).abs() <= EPS;

        let x = if hits_right { p } else { from.x + dx };
        let y = match (hits_edge, self.slope > 0.0) {
            (true, true) => p,
            (true, false) => 0.0,
            (false, _) => (from.y + dx * self.slope).clamp(0.0, p),
        };
        let segment = Segment {
            from,
            to: Coord::new(x, y),
        };

        (segment, hits_right as i32 + hits_edge as i32)
    }

    /// Move a point sitting on an exit edge to the matching entry edge.
    fn wrap(&self, at: Coord) -> Coord {
        let p = self.modulus;
        let x = if at.x >= p - EPS { 0.0 } else { at.x };
        let y = if self.slope > 0.0 && at.y >= p - EPS {
            0.0
        } else if self.slope < 0.0 && at.y <= EPS {
            p
        } else {
            at.y
        };
        Coord::new(x, y)
    }

    fn normalize(&self, at: Coord) -> Coord {
        let p = self.modulus;
        self.wrap(Coord::new(at.x.clamp(0.0, p), at.y.clamp(0.0, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_box(c: &Coord, p: f64) -> bool {
        (0.0..=p).contains(&c.x) && (0.0..=p).contains(&c.y)
    }

    #[test]
    fn test_flat_line_wraps_on_x() {
        let walker = SegmentWalker::new(97, 0.0);
        let walk = walker.walk(Coord::new(90.0, 5.0), 10.0, INITIAL_SEGMENT_BUDGET);

        assert_eq!(walk.segments.len(), 2);
        assert_eq!(walk.segments[0].to, Coord::new(97.0, 5.0));
        assert_eq!(walk.segments[1].from, Coord::new(0.0, 5.0));
        assert!((walk.end.x - 3.0).abs() < 1e-9);
        assert!((walk.consumed_x - 10.0).abs() < 1e-9);
        assert!((walk.budget - INITIAL_SEGMENT_BUDGET * BUDGET_GROWTH).abs() < 1e-9);
    }

    #[test]
    fn test_negative_slope_reenters_from_the_top() {
        let walker = SegmentWalker::new(97, -38.0);
        let walk = walker.walk(Coord::new(3.0, 6.0), 1.0, INITIAL_SEGMENT_BUDGET);

        let first = walk.segments[0];
        assert_eq!(first.to.y, 0.0);
        assert_eq!(walk.segments[1].from.y, 97.0);
        for segment in &walk.segments {
            assert!(in_box(&segment.from, 97.0));
            assert!(in_box(&segment.to, 97.0));
        }
        assert!((walk.consumed_x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_limits_segments() {
        let walker = SegmentWalker::new(97, 48.0);
        // one wrap per step: 1.0 -> 1.1 -> 1.21 allows exactly two segments
        let walk = walker.walk(Coord::new(0.0, 0.0), 50.0, 1.0);

        assert_eq!(walk.segments.len(), 2);
        assert!(walk.consumed_x < 50.0);
        assert!(!walk.truncated);
    }

    #[test]
    fn test_degenerate_budget_still_progresses() {
        let walker = SegmentWalker::new(97, 2.0);
        for budget in [0.0, -3.0, f64::NAN] {
            let walk = walker.walk(Coord::new(4.0, 4.0), 1.0, budget);
            assert_eq!(walk.segments.len(), 1);
            assert!((walk.consumed_x - 1.0).abs() < EPS);
            assert_eq!(walk.end, Coord::new(5.0, 6.0));
        }
    }

    #[test]
    fn test_retry_ceiling() {
        let walker = SegmentWalker::new(97, 48.0);
        let walk = walker.walk(Coord::new(0.0, 0.0), 50.0, 1000.0);

        assert_eq!(walk.segments.len(), RETRY_CEILING);
        assert!(walk.truncated);
    }

    #[test]
    fn test_zero_request_does_nothing() {
        let walker = SegmentWalker::new(97, 2.0);
        let walk = walker.walk(Coord::new(4.0, 4.0), 0.0, INITIAL_SEGMENT_BUDGET);

        assert!(walk.segments.is_empty());
        assert_eq!(walk.end, Coord::new(4.0, 4.0));
        assert_eq!(walk.consumed_x, 0.0);
    }

    #[test]
    fn test_resumes_where_it_stopped() {
        let walker = SegmentWalker::new(97, -38.0);
        let mut at = Coord::new(3.0, 6.0);
        let mut budget = INITIAL_SEGMENT_BUDGET;
        let mut left = 77.0;

        while left > EPS {
            let walk = walker.walk(at, left.min(2.5), budget);
            assert!(!walk.segments.is_empty());
            at = walk.end;
            budget = walk.budget;
            left -= walk.consumed_x;
        }

        // the tangent at (3, 6) lands on -2P = (80, 87)
        assert!((at.x - 80.0).abs() < 1e-6);
        assert!((at.y - 87.0).abs() < 1e-6);
    }
}
