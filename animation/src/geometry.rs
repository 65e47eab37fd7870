//! Display-space geometry for lines drawn over the field.
//!
//! Coordinates here are real-valued field coordinates: `x` and `y` in
//! `[0, p]`. Mapping them onto pixels is left to the render surface.

use curve::{FieldElement, Point};

/// Tolerance used when snapping to the edges of the field.
pub const EPS: f64 = 1e-7;

/// A position in field coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub const fn new(x: f64, y: f64) -> Self {
        Coord { x, y }
    }

    /// The position of an affine point, `None` for the point at infinity.
    pub fn of(point: &Point) -> Option<Self> {
        point
            .coordinates()
            .map(|(x, y)| Coord::new(x as f64, y as f64))
    }

    /// Linear interpolation towards `other`.
    pub fn lerp(&self, other: &Coord, t: f64) -> Coord {
        Coord::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// The slope to draw for the field slope `lambda`.
///
/// Picks the representative of `lambda` in `(-p/2, p/2]`. Any integer
/// representative passes through every integer point of the modular line;
/// the centred one wraps the fewest times.
pub fn display_slope(lambda: FieldElement, p: u64) -> f64 {
    let lambda = lambda % p;
    if lambda > p / 2 {
        lambda as f64 - p as f64
    } else {
        lambda as f64
    }
}

/// Order two points by x, keeping `p` first on ties.
pub fn order_by_x(p: Point, q: Point) -> (Point, Point) {
    if q.x < p.x {
        (q, p)
    } else {
        (p, q)
    }
}

/// Total x-distance the secant sweep covers.
///
/// Starting at the leftmost operand and moving right (wrapping at `p`), the
/// sweep must pass P, Q and -R. When all three share an x-coordinate, as for
/// the tangent at a point of order 3, the line is drawn once around the field.
pub fn total_x_length(p: &Point, q: &Point, neg_r: &Point, modulus: u64) -> f64 {
    let (start, _) = order_by_x(*p, *q);
    let length = [p.x, q.x, neg_r.x]
        .iter()
        .map(|x| (x + modulus - start.x) % modulus)
        .max()
        .unwrap_or(0);

    if length == 0 {
        modulus as f64
    } else {
        length as f64
    }
}

/// The x-range over which the line through `origin` with `slope` stays inside
/// the `[0, p] x [0, p]` box.
pub fn line_box_bounds(origin: Coord, slope: f64, p: f64) -> (f64, f64) {
    if slope > 0.0 {
        let hi = (origin.x + (p - origin.y) / slope).min(p);
        let lo = (origin.x - origin.y / slope).max(0.0);
        (lo, hi)
    } else if slope < 0.0 {
        let hi = (origin.x + origin.y / -slope).min(p);
        let lo = (origin.x - (p - origin.y) / -slope).max(0.0);
        (lo, hi)
    } else {
        (0.0, p)
    }
}
