//! Color utility functions for background sprites.

use ratatui::style::Color;

/// Scale a color by `opacity * brightness`, blending toward a black backdrop.
pub fn shade(rgb: (u8, u8, u8), opacity: f64, brightness: f64) -> Color {
    let factor = (opacity.clamp(0.0, 1.0) * brightness.max(0.0)) as f32;
    let (r, g, b) = rgb;
    Color::Rgb(scale(r, factor), scale(g, factor), scale(b, factor))
}

fn scale(channel: u8, factor: f32) -> u8 {
    (channel as f32 * factor).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_dims() {
        assert_eq!(shade((200, 100, 50), 0.5, 1.0), Color::Rgb(100, 50, 25));
        assert_eq!(shade((200, 100, 50), 0.0, 1.3), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_shade_saturates() {
        assert_eq!(shade((255, 214, 165), 1.0, 1.2), Color::Rgb(255, 255, 198));
    }
}
