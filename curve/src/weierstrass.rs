// E(GF(97)) : y^2 = x^3 + 2x + 3 (the default classroom curve)
// Curve order: 100 = 2^2 * 5^2, so the group is not cyclic
// Default base point (3, 6) has order 5; (0, 10) has order 50

use crate::{CurveError, CurveParameters, FieldElement, Point, PrimeField};

/// A short-Weierstrass curve `y^2 = x^3 + a*x + b` over a small prime field,
/// together with its designated base point.
///
/// A `Curve` is validated on construction and immutable afterwards, so every
/// operation on it is total.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    field: PrimeField,
    a: FieldElement,
    b: FieldElement,
    base: Point,
}

impl Curve {
    /// Validate `params` and build the curve.
    pub fn new(params: &CurveParameters) -> Result<Self, CurveError> {
        let field = PrimeField::new(params.p)?;
        for coefficient in [params.a, params.b] {
            if coefficient >= params.p {
                return Err(CurveError::CoefficientOutOfRange(coefficient));
            }
        }

        // 4a^3 + 27b^2 != 0
        let four_a3 = field.mul(4, field.pow(params.a, 3));
        let twenty_seven_b2 = field.mul(27, field.mul(params.b, params.b));
        if field.add(four_a3, twenty_seven_b2) == 0 {
            return Err(CurveError::Singular {
                a: params.a,
                b: params.b,
            });
        }

        let curve = Self {
            field,
            a: params.a,
            b: params.b,
            base: Point::INFINITY,
        };
        let curve = curve.with_base_point(Point::new(params.base.x, params.base.y))?;

        log::debug!(
            "configured curve y^2 = x^3 + {}x + {} over F_{} with base point {}",
            curve.a,
            curve.b,
            params.p,
            curve.base
        );
        Ok(curve)
    }

    /// The default classroom curve `y^2 = x^3 + 2x + 3 mod 97`, base `(3, 6)`.
    pub fn demo() -> Self {
        Self {
            field: PrimeField::new_unchecked(97),
            a: 2,
            b: 3,
            base: Point::new(3, 6),
        }
    }

    /// The same curve with a different base point.
    pub fn with_base_point(&self, base: Point) -> Result<Self, CurveError> {
        if base.is_infinity() {
            return Err(CurveError::BasePointAtInfinity);
        }
        if !self.is_on_curve(&base) {
            return Err(CurveError::BasePointNotOnCurve {
                x: base.x,
                y: base.y,
            });
        }
        Ok(Self { base, ..*self })
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// The field modulus `p`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.field.modulus()
    }

    #[inline]
    pub fn a(&self) -> FieldElement {
        self.a
    }

    #[inline]
    pub fn b(&self) -> FieldElement {
        self.b
    }

    /// The configured base point `P`.
    #[inline]
    pub fn base_point(&self) -> Point {
        self.base
    }

    /// Right-hand side `x^3 + a*x + b`.
    pub fn rhs(&self, x: FieldElement) -> FieldElement {
        let f = &self.field;
        let x3 = f.pow(x, 3);
        f.add(f.add(x3, f.mul(self.a, x)), self.b)
    }

    /// Every `y` with `(x, y)` on the curve: none, one (`y = 0`) or two.
    pub fn y_values(&self, x: FieldElement) -> Vec<FieldElement> {
        self.field.sqrt(self.rhs(x))
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point.coordinates() {
            None => true,
            Some((x, y)) => {
                let p = self.modulus();
                x < p && y < p && self.field.mul(y, y) == self.rhs(x)
            }
        }
    }

    /// Reflect about the x-axis: `(x, p - y)`.
    pub fn negate(&self, point: &Point) -> Point {
        if point.is_infinity() {
            return *point;
        }
        Point::new(point.x, self.field.neg(point.y))
    }

    /// Slope of the line through `p` and `q` used by the addition law.
    ///
    /// The tangent slope `(3x^2 + a) / 2y` when the points coincide, the
    /// secant slope otherwise. `None` when the line is vertical or either
    /// operand is the point at infinity.
    pub fn slope(&self, p: &Point, q: &Point) -> Option<FieldElement> {
        if p.is_infinity() || q.is_infinity() {
            return None;
        }

        let f = &self.field;
        if p.x == q.x {
            if p.y != q.y || p.y == 0 {
                return None;
            }
            let numerator = f.add(f.mul(3, f.mul(p.x, p.x)), self.a);
            let denominator = f.mul(2, p.y);
            f.div(numerator, denominator)
        } else {
            f.div(f.sub(q.y, p.y), f.sub(q.x, p.x))
        }
    }

    /// Chord-and-tangent addition.
    pub fn point_add(&self, p: &Point, q: &Point) -> Point {
        // Handle infinity cases
        if p.is_infinity() {
            return *q;
        }
        if q.is_infinity() {
            return *p;
        }

        // Points are inverses, this also covers doubling a point with y = 0
        if *q == self.negate(p) {
            return Point::INFINITY;
        }

        let lambda = match self.slope(p, q) {
            Some(lambda) => lambda,
            None => return Point::INFINITY,
        };

        // x_r = λ^2 - x1 - x2
        let f = &self.field;
        let x_r = f.sub(f.sub(f.mul(lambda, lambda), p.x), q.x);

        // y_r = λ(x1 - x_r) - y1
        let y_r = f.sub(f.mul(lambda, f.sub(p.x, x_r)), p.y);

        Point::new(x_r, y_r)
    }

    /// Point doubling: 2*P.
    #[inline]
    pub fn point_double(&self, p: &Point) -> Point {
        self.point_add(p, p)
    }

    /// All affine points of the curve, ordered by x then y.
    pub fn points(&self) -> Vec<Point> {
        (0..self.modulus())
            .flat_map(|x| self.y_values(x).into_iter().map(move |y| Point::new(x, y)))
            .collect()
    }

    /// The smallest `k >= 1` with `k * point` equal to the point at infinity.
    ///
    /// Returns `None` for a point that is not on the curve, whose multiples
    /// need never reach infinity.
    pub fn order_of(&self, point: &Point) -> Option<u64> {
        if !self.is_on_curve(point) {
            return None;
        }
        let mut order = 1;
        let mut current = *point;
        while !current.is_infinity() {
            current = self.point_add(&current, point);
            order += 1;
        }
        Some(order)
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::demo()
    }
}
