//! Star and comet parameter generation.

use rand::Rng;
use stardrift_core::{GlowColor, Point, Viewport};

/// Viewport area, in square pixels, that earns one star.
pub const PIXELS_PER_STAR: f64 = 12_000.0;

/// Comets generated per batch.
pub const COMET_COUNT: usize = 3;

/// Smallest orbit a star can have.
pub const MIN_ORBIT_RADIUS: f64 = 20.0;

/// Identity of a generated element. Only unique within one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    /// Generation batch the element belongs to.
    pub batch: u64,
    /// Position within the batch.
    pub index: usize,
}

/// Parameters of one orbiting star.
#[derive(Debug, Clone, PartialEq)]
pub struct StarParams {
    pub id: ElementId,
    /// Diameter in pixels (1-3).
    pub size: f64,
    /// Distance from the viewport center in pixels.
    pub orbit_radius: f64,
    /// Starting angle in degrees.
    pub initial_angle: f64,
    /// Signed fraction of a circle per second of step.
    pub angular_speed: f64,
    pub glow_color: GlowColor,
    /// Phase offset of the vertical bobbing (0-1000).
    pub float_seed: f64,
    /// Length of one glow pulse cycle (2000-5000ms).
    pub pulse_period_ms: f64,
}

/// Parameters of one comet flight.
#[derive(Debug, Clone, PartialEq)]
pub struct CometParams {
    pub id: ElementId,
    pub start_x: f64,
    pub start_y: f64,
    /// Streak scale (2-5).
    pub size: f64,
    pub start_delay_seconds: f64,
    pub duration_seconds: f64,
    /// Height of the arc peak above the start, in pixels.
    pub arc_height: f64,
    /// Horizontal distance travelled, in pixels.
    pub arc_width: f64,
}

impl CometParams {
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }
}

/// Number of stars that fit a viewport.
pub fn star_count(viewport: Viewport) -> usize {
    (viewport.area() / PIXELS_PER_STAR).floor().max(0.0) as usize
}

/// Generate a full set of stars for the viewport.
pub fn generate_stars<R: Rng + ?Sized>(
    viewport: Viewport,
    batch: u64,
    rng: &mut R,
) -> Vec<StarParams> {
    let center = viewport.center();
    let max_extra_radius = center.x.min(center.y).max(0.0) * 0.9;

    (0..star_count(viewport))
        .map(|index| {
            let orbit_radius = rng.r#gen::<f64>() * max_extra_radius + MIN_ORBIT_RADIUS;
            let initial_angle = rng.r#gen::<f64>() * 360.0;
            let size = rng.r#gen::<f64>() * 2.0 + 1.0;
            let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            let angular_speed = (rng.r#gen::<f64>() * 0.01 + 0.002) * direction;
            let glow_color = GlowColor::ALL[rng.gen_range(0..GlowColor::ALL.len())];
            StarParams {
                id: ElementId { batch, index },
                size,
                orbit_radius,
                initial_angle,
                angular_speed,
                glow_color,
                float_seed: rng.r#gen::<f64>() * 1000.0,
                pulse_period_ms: 2000.0 + rng.r#gen::<f64>() * 3000.0,
            }
        })
        .collect()
}

/// Generate a batch of comets launching from the central band of the viewport.
pub fn generate_comets<R: Rng + ?Sized>(
    viewport: Viewport,
    batch: u64,
    rng: &mut R,
) -> Vec<CometParams> {
    (0..COMET_COUNT)
        .map(|index| CometParams {
            id: ElementId { batch, index },
            start_x: rng.r#gen::<f64>() * viewport.width * 0.7 + viewport.width * 0.15,
            start_y: rng.r#gen::<f64>() * viewport.height * 0.4 + viewport.height * 0.1,
            size: rng.r#gen::<f64>() * 3.0 + 2.0,
            start_delay_seconds: rng.r#gen::<f64>() * 15.0,
            duration_seconds: rng.r#gen::<f64>() * 3.0 + 3.0,
            arc_height: rng.r#gen::<f64>() * 100.0 + 50.0,
            arc_width: rng.r#gen::<f64>() * 300.0 + 200.0,
        })
        .collect()
}
