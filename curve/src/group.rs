use crate::{Curve, Point};

/// The powers of two set in `n`, lowest first.
///
/// `13 = 0b1101` decomposes into `[1, 4, 8]`.
pub fn binary_terms(n: u64) -> Vec<u64> {
    (0..u64::BITS)
        .map(|bit| 1u64 << bit)
        .filter(|term| n & term != 0)
        .collect()
}

/// The highest power of two in `n`, `None` for zero.
pub fn top_bit(n: u64) -> Option<u64> {
    if n == 0 {
        None
    } else {
        Some(1 << (u64::BITS - 1 - n.leading_zeros()))
    }
}

impl Curve {
    /// Scalar multiplication `n * point` by double-and-add.
    ///
    /// Bits are consumed least significant first, the same order in which the
    /// animations replay the partial sums.
    pub fn point_mult(&self, point: &Point, n: u64) -> Point {
        if n == 0 {
            return Point::INFINITY;
        }
        if n == 1 {
            return *point;
        }

        let mut result = Point::INFINITY;
        let mut temp = *point;
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = self.point_add(&result, &temp);
            }
            bits >>= 1;
            if bits > 0 {
                temp = self.point_double(&temp);
            }
        }

        result
    }

    /// `[(1, P), (2, 2P), (4, 4P), ...]` for every power of two up to `limit`.
    pub fn multiples_of_two(&self, point: &Point, limit: u64) -> Vec<(u64, Point)> {
        let mut multiples = Vec::new();
        let mut n = 1u64;
        let mut current = *point;

        while n <= limit {
            multiples.push((n, current));
            match n.checked_mul(2) {
                Some(next) => {
                    n = next;
                    current = self.point_double(&current);
                }
                None => break,
            }
        }

        multiples
    }
}
