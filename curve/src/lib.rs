//! Elliptic curve group over a small prime field.
//!
//! This crate provides exact arithmetic in F_p, affine curve points, the
//! chord-and-tangent addition law and double-and-add scalar multiplication
//! for a single short-Weierstrass curve `y^2 = x^3 + a*x + b`. The field is
//! deliberately tiny so that every point can be drawn; nothing here is meant
//! to be cryptographically secure.

mod affine;
mod errors;
mod field;
mod group;
mod params;
mod random;
mod weierstrass;

pub use affine::Point;
pub use errors::CurveError;
pub use field::{FieldElement, PrimeField};
pub use group::{binary_terms, top_bit};
pub use params::{BasePoint, CurveParameters};
pub use random::pick_demo_scalar;
pub use weierstrass::Curve;
