//! Time-driven drawing of elliptic curve point addition.
//!
//! An [`AddAnimation`] walks through the phases of `P + Q` (label, tangent,
//! sweep of the modular line, reflection) one frame at a time and emits draw
//! calls on a [`RenderSurface`]. A [`RenderSession`] owns the surface, caches
//! the plotted curve and makes sure only one addition animates on it.

mod canvas;
mod clock;
mod config;
mod ease;
mod errors;
pub mod geometry;
mod machine;
mod phase;
mod render;
pub mod segment;
mod session;

pub use canvas::{Canvas, LabelOptions, CURVE_DOT_RADIUS, POINT_DOT_RADIUS};
pub use clock::{drive, FixedStepClock, FrameClock};
pub use config::{AnimationConfig, PhaseDurations};
pub use ease::{ease_in_out, fraction};
pub use errors::ConfigError;
pub use geometry::Coord;
pub use machine::{AddAnimation, Addition, AdditionResult, StepOutcome, SweepCache};
pub use phase::{Phase, Variant};
pub use render::{Color, DotStyle, DrawCommand, LineStyle, RecordingSurface, RenderSurface, TextStyle};
pub use segment::{Segment, SegmentWalker, Walk};
pub use session::{Completion, CompletionState, RenderSession};
