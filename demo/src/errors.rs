//! Error types for the demonstrations.

use animation::ConfigError;
use curve::CurveError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Zero would make every public key the point at infinity.
    #[error("private key must not be zero")]
    ZeroPrivateKey,

    #[error("public key encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("invalid demo configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Animation(#[from] ConfigError),

    /// A received public key is not a point of the curve in use.
    #[error("public key ({x}, {y}) is not on the curve")]
    InvalidPublicKey { x: u64, y: u64 },
}
