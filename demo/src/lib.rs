//! Animated demonstrations of elliptic curve arithmetic.
//!
//! Each demonstration is a small state machine advanced by frame timestamps.
//! It drives point-addition animations on one or more
//! [`RenderSession`](animation::RenderSession)s and reports progress as
//! [`DemoEvent`]s:
//!
//! - [`QuickDoubles`]: `P, 2P, 4P, ...` up to a limit.
//! - [`DoubleAndAdd`]: `nP` computed the way double-and-add does it.
//! - [`DoubleAndAddDemo`]: endless double-and-add rounds on demo scalars.
//! - [`RepeatedAddition`]: `P, 2P, 3P, ...` until the point at infinity.
//! - [`KeyExchange`]: Diffie-Hellman between Alice and Bob.
//!
//! # Example
//!
//! ```
//! use animation::{RecordingSurface, RenderSession};
//! use demo::{DemoConfig, DemoEvent, DoubleAndAdd};
//! use animation::LabelOptions;
//!
//! let config = DemoConfig::default().sped_up(50.0);
//! let curve = config.curve().expect("valid curve");
//! let mut session = RenderSession::new(RecordingSurface::new(), curve, config.animation);
//! let mut run = DoubleAndAdd::new(&curve, curve.base_point(), 13, LabelOptions::default(), config.doubling);
//!
//! let mut t = 0.0;
//! let result = loop {
//!     t += 16.0;
//!     if let Some(DemoEvent::Finished(point)) = run.advance(t, &mut session) {
//!         break point;
//!     }
//! };
//! assert_eq!(result, curve.point_mult(&curve.base_point(), 13));
//! ```

mod config;
mod constants;
mod double_add;
mod doubling;
mod errors;
mod events;
mod exchange;
mod keys;
mod repeated_add;

#[cfg(test)]
mod tests;

pub use config::{DemoConfig, DoublingTiming};
pub use constants::IDLE_BANNER;
pub use double_add::{DoubleAndAdd, DoubleAndAddDemo};
pub use doubling::QuickDoubles;
pub use errors::DemoError;
pub use events::DemoEvent;
pub use exchange::{ExchangeEvent, KeyExchange, Party};
pub use keys::{PrivateKey, PublicKey};
pub use repeated_add::RepeatedAddition;
