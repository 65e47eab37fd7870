//! Private and public keys for the Diffie-Hellman demonstration.

use curve::{Curve, Point};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::DemoError;

/// A private key: a non-zero multiple of the base point.
///
/// On a curve this small the key offers no secrecy at all; it only exists to
/// be drawn.
///
/// # Example
///
/// ```
/// use demo::PrivateKey;
///
/// let key = PrivateKey::new(21).expect("non-zero");
/// assert_eq!(key.scalar(), 21);
/// assert!(PrivateKey::new(0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    scalar: u64,
}

/// A public key: the base point multiplied by a private key.
///
/// Public keys travel between the parties as `bincode` bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    point: Point,
}

impl PrivateKey {
    /// Wraps `scalar`, rejecting zero.
    pub fn new(scalar: u64) -> Result<Self, DemoError> {
        if scalar == 0 {
            return Err(DemoError::ZeroPrivateKey);
        }
        Ok(Self { scalar })
    }

    /// A random key in `[1, order)` where `order` is the order of the base
    /// point, so no two keys name the same public point.
    ///
    /// # Example
    ///
    /// ```
    /// use curve::Curve;
    /// use demo::PrivateKey;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let curve = Curve::demo();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let key = PrivateKey::random(&mut rng, &curve);
    /// assert!(key.scalar() >= 1);
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R, curve: &Curve) -> Self {
        let order = curve.order_of(&curve.base_point()).unwrap_or(2).max(2);
        Self {
            scalar: rng.random_range(1..order),
        }
    }

    pub fn scalar(&self) -> u64 {
        self.scalar
    }

    /// Derives the public key `scalar * G` for the curve's base point `G`.
    pub fn public_key(&self, curve: &Curve) -> PublicKey {
        PublicKey {
            point: curve.point_mult(&curve.base_point(), self.scalar),
        }
    }

    /// Multiplies the other party's public key by this private key.
    ///
    /// Both parties arrive at `a * b * G`.
    pub fn shared_secret(&self, curve: &Curve, theirs: &PublicKey) -> Point {
        curve.point_mult(&theirs.point, self.scalar)
    }
}

impl PublicKey {
    /// Accepts `point` as a public key if it lies on `curve`.
    ///
    /// Any point flagged as infinity is stored as [`Point::INFINITY`], so
    /// keys decoded from the wire compare equal to computed ones.
    pub fn from_point(curve: &Curve, point: Point) -> Result<Self, DemoError> {
        if point.is_infinity() {
            return Ok(Self {
                point: Point::INFINITY,
            });
        }
        if !curve.is_on_curve(&point) {
            return Err(DemoError::InvalidPublicKey {
                x: point.x,
                y: point.y,
            });
        }
        Ok(Self { point })
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DemoError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a public key received from the other party and checks it
    /// against `curve`.
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> Result<Self, DemoError> {
        let key: PublicKey = bincode::deserialize(bytes)?;
        Self::from_point(curve, key.point)
    }
}
