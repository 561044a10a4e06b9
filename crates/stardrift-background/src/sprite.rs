//! Renderer-independent description of what to draw.

use stardrift_core::Point;

/// What a sprite depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Star,
    Comet,
}

/// One positioned, styled element of the render tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Top-left corner in pixels, relative to the viewport origin.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub rgb: (u8, u8, u8),
    /// 0.0 (invisible) to 1.0.
    pub opacity: f64,
    /// Brightness multiplier, 1.0 for unboosted.
    pub brightness: f64,
}

impl Sprite {
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}
