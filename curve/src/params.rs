//! Serializable curve configuration.

use serde::{Deserialize, Serialize};

/// Coordinates of the configured base point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePoint {
    pub x: u64,
    pub y: u64,
}

/// Parameters of `y^2 = x^3 + a*x + b` over F_p with a designated base point.
///
/// These are unvalidated; [`Curve::new`](crate::Curve::new) checks them.
/// The default is the classroom curve `y^2 = x^3 + 2x + 3 mod 97` with base
/// point `(3, 6)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParameters {
    pub p: u64,
    pub a: u64,
    pub b: u64,
    pub base: BasePoint,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            p: 97,
            a: 2,
            b: 3,
            base: BasePoint { x: 3, y: 6 },
        }
    }
}
