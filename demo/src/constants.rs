//! Timings and texts shared by the demonstrations.

/// Time taken to slide a dot from one power of two to the next.
pub const DOUBLING_MOVE_MS: f64 = 500.0;

/// Dwell after each doubling.
pub const DOUBLING_PAUSE_MS: f64 = 100.0;

/// Dwell between additions of the repeated-addition demo.
pub const ADD_PAUSE_MS: f64 = 1500.0;

/// Dwell between rounds of the double-and-add cycle.
pub const CYCLE_PAUSE_MS: f64 = 2500.0;

/// Dwell between publishing public keys and deriving the shared secret.
pub const EXCHANGE_PAUSE_MS: f64 = 3000.0;

/// Shown on Bob's plot until his turn comes.
pub const IDLE_BANNER: &str = "Waiting for contact from Alice";
