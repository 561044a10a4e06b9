//! Pure motion math for stars and comets.

use std::f64::consts::TAU;

use stardrift_core::Point;

/// Vertical bobbing amplitude of a star, in pixels.
pub const FLOAT_AMPLITUDE: f64 = 10.0;

/// Milliseconds per radian of the vertical bobbing phase.
const FLOAT_MS_PER_RADIAN: f64 = 500.0;

/// Advance an angle in degrees by `angular_speed` (fraction of a circle per
/// second of step) and wrap the result into `[0, 360)`.
pub fn advance_angle(angle_deg: f64, angular_speed: f64, step_seconds: f64) -> f64 {
    let next = (angle_deg + angular_speed * 360.0 * step_seconds).rem_euclid(360.0);
    // rem_euclid rounds tiny negative values up to exactly 360
    if next >= 360.0 { 0.0 } else { next }
}

/// Vertical bobbing offset of a star `elapsed_ms` into its animation.
pub fn float_offset(elapsed_ms: f64, float_seed: f64) -> f64 {
    FLOAT_AMPLITUDE * (elapsed_ms / FLOAT_MS_PER_RADIAN + float_seed).sin()
}

/// Top-left corner of a star of `size` pixels orbiting `center`.
pub fn orbit_position(
    center: Point,
    orbit_radius: f64,
    angle_deg: f64,
    size: f64,
    float_offset: f64,
) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(
        center.x + orbit_radius * rad.cos() - size / 2.0,
        center.y + orbit_radius * rad.sin() - size / 2.0 + float_offset,
    )
}

/// Fraction of a comet flight completed after `elapsed_ms`, clamped to `[0, 1]`.
pub fn arc_progress(elapsed_ms: f64, duration_seconds: f64) -> f64 {
    if duration_seconds <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / (duration_seconds * 1000.0)).clamp(0.0, 1.0)
}

/// Position of a comet along its parabolic arc.
///
/// The arc starts and ends at `start.y` and peaks `arc_height` pixels above
/// it at half progress. The streak is shifted left by five times its size so
/// that its head sits on the path.
pub fn arc_position(
    start: Point,
    arc_width: f64,
    arc_height: f64,
    size: f64,
    progress: f64,
) -> Point {
    Point::new(
        start.x + arc_width * progress - size * 5.0,
        start.y - 4.0 * arc_height * progress * (1.0 - progress),
    )
}

/// Glow state of a star at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    /// 0.5 at rest, 1.0 at the peak of a pulse.
    pub opacity: f64,
    /// 1.0 at rest, 1.3 at the peak of a pulse.
    pub brightness: f64,
}

/// Ease-in-out glow pulse with one full rest-peak-rest cycle per `period_ms`.
pub fn glow_pulse(elapsed_ms: f64, period_ms: f64) -> Glow {
    let phase = if period_ms > 0.0 {
        elapsed_ms.rem_euclid(period_ms) / period_ms
    } else {
        0.0
    };
    let wave = 0.5 - 0.5 * (phase * TAU).cos();
    Glow {
        opacity: 0.5 + 0.5 * wave,
        brightness: 1.0 + 0.3 * wave,
    }
}
