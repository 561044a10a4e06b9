//! Core types shared by the stardrift crates.

mod clock;
mod color;
mod geometry;
mod step;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use color::GlowColor;
pub use geometry::{CellSize, Point, Viewport};
pub use step::AngleStep;
