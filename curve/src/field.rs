//! Prime field F_p with exact integer arithmetic.
//!
//! The demo fields are tiny (p is in the tens or hundreds), so elements are
//! plain `u64` values reduced into `[0, p)` and every product of two elements
//! fits in a `u64` without widening.

use crate::errors::CurveError;

/// An element of F_p, always kept in `[0, p)`.
pub type FieldElement = u64;

/// The prime field F_p.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// Create the field F_p, checking that `p` is an odd prime in range.
    pub fn new(p: u64) -> Result<Self, CurveError> {
        if p <= 3 {
            return Err(CurveError::ModulusTooSmall(p));
        }
        if p >= 1 << 32 {
            return Err(CurveError::ModulusTooLarge(p));
        }
        if !is_prime(p) {
            return Err(CurveError::NotPrime(p));
        }
        Ok(Self { p })
    }

    /// Construct a field whose modulus is known to be valid.
    pub(crate) const fn new_unchecked(p: u64) -> Self {
        Self { p }
    }

    /// The modulus `p`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.p
    }

    /// Reduce any integer into `[0, p)`.
    #[inline]
    pub fn reduce(&self, a: u64) -> FieldElement {
        a % self.p
    }

    /// Reduce a signed integer into `[0, p)`.
    #[inline]
    pub fn reduce_signed(&self, a: i64) -> FieldElement {
        a.rem_euclid(self.p as i64) as u64
    }

    #[inline]
    pub fn add(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        (self.reduce(a) + self.reduce(b)) % self.p
    }

    #[inline]
    pub fn sub(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        (self.reduce(a) + self.p - self.reduce(b)) % self.p
    }

    #[inline]
    pub fn mul(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        self.reduce(a) * self.reduce(b) % self.p
    }

    #[inline]
    pub fn neg(&self, a: FieldElement) -> FieldElement {
        self.reduce_signed(-(self.reduce(a) as i64))
    }

    /// Square-and-multiply exponentiation.
    pub fn pow(&self, base: FieldElement, exp: u64) -> FieldElement {
        let mut result = 1 % self.p;
        let mut square = self.reduce(base);
        let mut bits = exp;

        while bits > 0 {
            if bits & 1 == 1 {
                result = self.mul(result, square);
            }
            square = self.mul(square, square);
            bits >>= 1;
        }

        result
    }

    /// Multiplicative inverse via Fermat's little theorem, `None` for zero.
    pub fn inv(&self, a: FieldElement) -> Option<FieldElement> {
        let a = self.reduce(a);
        if a == 0 {
            return None;
        }
        Some(self.pow(a, self.p - 2))
    }

    /// `a / b`, `None` when `b` is zero.
    pub fn div(&self, a: FieldElement, b: FieldElement) -> Option<FieldElement> {
        self.inv(b).map(|b_inv| self.mul(a, b_inv))
    }

    /// Euler's criterion. Zero counts as a square.
    pub fn is_square(&self, a: FieldElement) -> bool {
        let a = self.reduce(a);
        a == 0 || self.pow(a, (self.p - 1) / 2) == 1
    }

    /// All square roots of `a`, in ascending order.
    ///
    /// Returns an empty vector for a quadratic non-residue, `[0]` for zero and
    /// two distinct roots otherwise.
    pub fn sqrt(&self, a: FieldElement) -> Vec<FieldElement> {
        let a = self.reduce(a);
        if a == 0 {
            return vec![0];
        }
        if !self.is_square(a) {
            return Vec::new();
        }

        let root = if self.p % 4 == 3 {
            self.pow(a, (self.p + 1) / 4)
        } else {
            self.tonelli_shanks(a)
        };

        let mut roots = vec![root, self.neg(root)];
        roots.sort_unstable();
        roots
    }

    /// Tonelli-Shanks for a known quadratic residue `a`.
    fn tonelli_shanks(&self, a: FieldElement) -> FieldElement {
        // p - 1 = q * 2^s with q odd
        let mut q = self.p - 1;
        let mut s = 0u32;
        while q % 2 == 0 {
            q /= 2;
            s += 1;
        }

        let mut z = 2;
        while self.is_square(z) {
            z += 1;
        }

        let mut m = s;
        let mut c = self.pow(z, q);
        let mut t = self.pow(a, q);
        let mut r = self.pow(a, (q + 1) / 2);

        while t != 1 {
            // least i in (0, m) with t^(2^i) == 1
            let mut i = 0;
            let mut t2i = t;
            while t2i != 1 {
                t2i = self.mul(t2i, t2i);
                i += 1;
            }

            let b = self.pow(c, 1 << (m - i - 1));
            m = i;
            c = self.mul(b, b);
            t = self.mul(t, c);
            r = self.mul(r, b);
        }

        r
    }
}

/// Trial division, plenty for moduli below 2^32.
fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
