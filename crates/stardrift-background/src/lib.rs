//! Orbiting stars and arcing comets for terminal backgrounds.
//!
//! A [`Scene`] owns a population of stars circling the viewport center and a
//! small batch of comets that launch after a random delay, fly a parabolic
//! arc and fade out. Time only moves when the owner calls [`Scene::tick`];
//! viewport changes arrive through [`Scene::resize`]. [`SceneWidget`] draws
//! the current frame with ratatui.

pub mod animations;
mod chars;
mod color;
pub mod generate;
pub mod kinematics;
mod render;
mod scene;
pub mod scheduler;
mod sprite;

pub use color::shade;
pub use render::{Glyph, SceneWidget, rasterize};
pub use scene::{Scene, SceneOptions};
pub use sprite::{Sprite, SpriteKind};
