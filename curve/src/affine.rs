use crate::field::FieldElement;
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

/// Affine point on the curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
///
/// Points are plain values: curve operations always return a freshly
/// constructed point and never modify their inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// The x-coordinate, in `[0, p)`
    pub x: FieldElement,
    /// The y-coordinate, in `[0, p)`
    pub y: FieldElement,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Point {
    /// The point at infinity (identity element)
    pub const INFINITY: Self = Point {
        x: 0,
        y: 0,
        is_infinity: true,
    };

    /// Create a new affine point.
    pub const fn new(x: FieldElement, y: FieldElement) -> Self {
        Point {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// The `(x, y)` pair, or `None` for the point at infinity.
    #[inline]
    pub fn coordinates(&self) -> Option<(FieldElement, FieldElement)> {
        if self.is_infinity {
            None
        } else {
            Some((self.x, self.y))
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.coordinates() {
            Some((x, y)) => write!(f, "({x}, {y})"),
            None => write!(f, "\u{221E}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinity() {
        let inf = Point::INFINITY;
        assert!(inf.is_infinity());
        assert_eq!(inf.coordinates(), None);
        assert_eq!(inf.to_string(), "\u{221E}");
    }

    #[test]
    fn test_affine_display() {
        let p = Point::new(3, 6);
        assert!(!p.is_infinity());
        assert_eq!(p.coordinates(), Some((3, 6)));
        assert_eq!(p.to_string(), "(3, 6)");
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Point::new(80, 10);
        let json = serde_json::to_string(&p).expect("serialize");
        let back: Point = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, p);
    }
}
