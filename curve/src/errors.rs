//! Error types for curve configuration.

/// Errors raised while validating curve parameters.
///
/// Arithmetic on a validated [`Curve`](crate::Curve) never fails: an `x` with
/// no matching `y`, or a non-residue passed to a square root, is reported as
/// an empty result instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// The configured modulus is composite.
    #[error("modulus {0} is not prime")]
    NotPrime(u64),

    /// Short-Weierstrass curves need a field of characteristic greater than 3.
    #[error("modulus {0} is too small, a prime greater than 3 is required")]
    ModulusTooSmall(u64),

    /// Products of two field elements must fit in a `u64`.
    #[error("modulus {0} is too large, it must be below 2^32")]
    ModulusTooLarge(u64),

    /// A curve coefficient was not reduced into `[0, p)`.
    #[error("coefficient {0} is not reduced modulo p")]
    CoefficientOutOfRange(u64),

    /// The discriminant `4a^3 + 27b^2` vanishes modulo `p`.
    #[error("curve y^2 = x^3 + {a}x + {b} is singular")]
    Singular { a: u64, b: u64 },

    /// The configured base point does not satisfy the curve equation.
    #[error("base point ({x}, {y}) is not on the curve")]
    BasePointNotOnCurve { x: u64, y: u64 },

    /// The identity cannot generate anything worth drawing.
    #[error("base point must not be the point at infinity")]
    BasePointAtInfinity,
}
