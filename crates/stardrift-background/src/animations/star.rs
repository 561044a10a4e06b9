//! Orbiting star animation (stateful).

use stardrift_core::{AngleStep, Point, Viewport};

use crate::animations::ElementKey;
use crate::generate::StarParams;
use crate::kinematics::{self, Glow};
use crate::scheduler::{FrameId, FrameScheduler};
use crate::sprite::{Sprite, SpriteKind};

/// Animation state of one star.
///
/// Once activated a star requests a frame after every frame until it is torn
/// down.
#[derive(Debug)]
pub struct StarAnimator {
    params: StarParams,
    key: ElementKey,
    step: AngleStep,
    /// Current angle in degrees, always in `[0, 360)`.
    angle: f64,
    /// Timestamp of the first frame.
    start_ms: Option<f64>,
    /// Timestamp of the latest frame.
    last_frame_ms: Option<f64>,
    frames: u64,
    pending: Option<FrameId>,
}

impl StarAnimator {
    pub fn new(params: StarParams, key: ElementKey, step: AngleStep) -> Self {
        let angle = params.initial_angle.rem_euclid(360.0);
        Self {
            params,
            key,
            step,
            angle,
            start_ms: None,
            last_frame_ms: None,
            frames: 0,
            pending: None,
        }
    }

    pub fn params(&self) -> &StarParams {
        &self.params
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Frames handled since activation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Milliseconds between the first and the latest frame.
    pub fn elapsed_ms(&self) -> f64 {
        match (self.start_ms, self.last_frame_ms) {
            (Some(start), Some(last)) => last - start,
            _ => 0.0,
        }
    }

    /// Whether a frame request is outstanding.
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Start the frame loop.
    pub fn activate(&mut self, scheduler: &mut FrameScheduler<ElementKey>) {
        if self.pending.is_none() {
            self.pending = Some(scheduler.request_frame(self.key));
        }
    }

    /// Handle a frame at `timestamp_ms` and request the next one.
    pub fn on_frame(&mut self, timestamp_ms: f64, scheduler: &mut FrameScheduler<ElementKey>) {
        self.pending = None;
        self.start_ms.get_or_insert(timestamp_ms);

        let delta_ms = timestamp_ms - self.last_frame_ms.unwrap_or(timestamp_ms);
        self.angle = kinematics::advance_angle(
            self.angle,
            self.params.angular_speed,
            self.step.step_seconds(delta_ms),
        );
        self.last_frame_ms = Some(timestamp_ms);
        self.frames += 1;

        self.pending = Some(scheduler.request_frame(self.key));
    }

    /// Stop the frame loop. No frame reaches this star afterwards.
    pub fn teardown(&mut self, scheduler: &mut FrameScheduler<ElementKey>) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel_frame(id);
        }
    }

    /// Top-left corner of the star within `viewport`.
    pub fn position(&self, viewport: Viewport) -> Point {
        let float = kinematics::float_offset(self.elapsed_ms(), self.params.float_seed);
        kinematics::orbit_position(
            viewport.center(),
            self.params.orbit_radius,
            self.angle,
            self.params.size,
            float,
        )
    }

    pub fn glow(&self) -> Glow {
        kinematics::glow_pulse(self.elapsed_ms(), self.params.pulse_period_ms)
    }

    pub fn sprite(&self, viewport: Viewport) -> Sprite {
        let glow = self.glow();
        Sprite {
            kind: SpriteKind::Star,
            position: self.position(viewport),
            width: self.params.size,
            height: self.params.size,
            rgb: self.params.glow_color.rgb(),
            opacity: glow.opacity,
            brightness: glow.brightness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::ElementId;
    use stardrift_core::GlowColor;

    const EPS: f64 = 1e-9;
    const KEY: ElementKey = ElementKey::Star(0);

    fn star(initial_angle: f64, angular_speed: f64) -> StarParams {
        StarParams {
            id: ElementId { batch: 0, index: 0 },
            size: 2.0,
            orbit_radius: 100.0,
            initial_angle,
            angular_speed,
            glow_color: GlowColor::Aqua,
            float_seed: 0.0,
            pulse_period_ms: 3000.0,
        }
    }

    fn run_frames(
        animator: &mut StarAnimator,
        scheduler: &mut FrameScheduler<ElementKey>,
        times: &[f64],
    ) {
        for &t in times {
            for key in scheduler.take_frames() {
                assert_eq!(key, KEY);
                animator.on_frame(t, scheduler);
            }
        }
    }

    #[test]
    fn test_fixed_step_angle() {
        let mut scheduler = FrameScheduler::new();
        let mut animator = StarAnimator::new(star(10.0, 0.01), KEY, AngleStep::Fixed);
        animator.activate(&mut scheduler);

        // Uneven frame spacing must not matter under the fixed policy.
        let times = [0.0, 5.0, 40.0, 41.0, 100.0, 250.0, 251.0, 300.0];
        run_frames(&mut animator, &mut scheduler, &times);

        let n = times.len() as f64;
        let expected = (10.0 + n * 0.01 * 360.0 * 0.016).rem_euclid(360.0);
        assert_eq!(animator.frames(), times.len() as u64);
        assert!((animator.angle() - expected).abs() < EPS);
    }

    #[test]
    fn test_fixed_step_wraps_backwards() {
        let mut scheduler = FrameScheduler::new();
        let mut animator = StarAnimator::new(star(0.0, -0.012), KEY, AngleStep::Fixed);
        animator.activate(&mut scheduler);
        run_frames(&mut animator, &mut scheduler, &[0.0, 16.0, 32.0]);

        let expected = (3.0f64 * -0.012 * 360.0 * 0.016).rem_euclid(360.0);
        assert!((animator.angle() - expected).abs() < EPS);
        assert!(animator.angle() > 359.0);
    }

    #[test]
    fn test_elapsed_step_follows_real_time() {
        let mut scheduler = FrameScheduler::new();
        let mut animator = StarAnimator::new(star(0.0, 0.01), KEY, AngleStep::Elapsed);
        animator.activate(&mut scheduler);

        // First frame contributes nothing, the rest span one second.
        run_frames(&mut animator, &mut scheduler, &[500.0, 750.0, 1500.0]);
        assert!((animator.angle() - 3.6).abs() < EPS);
        assert_eq!(animator.elapsed_ms(), 1000.0);
    }

    #[test]
    fn test_position_includes_float() {
        let mut scheduler = FrameScheduler::new();
        let mut animator = StarAnimator::new(star(0.0, 0.0), KEY, AngleStep::Fixed);
        animator.activate(&mut scheduler);
        let quarter = 500.0 * std::f64::consts::FRAC_PI_2;
        run_frames(&mut animator, &mut scheduler, &[0.0, quarter]);

        let p = animator.position(Viewport::new(1200.0, 800.0));
        assert!((p.x - 699.0).abs() < EPS);
        assert!((p.y - 409.0).abs() < EPS);
    }

    #[test]
    fn test_sprite_glows() {
        let animator = StarAnimator::new(star(0.0, 0.01), KEY, AngleStep::Fixed);
        let sprite = animator.sprite(Viewport::new(1200.0, 800.0));
        assert_eq!(sprite.kind, SpriteKind::Star);
        assert_eq!(sprite.rgb, (0xaa, 0xff, 0xff));
        assert_eq!(sprite.width, 2.0);
        assert!((sprite.opacity - 0.5).abs() < EPS);
    }

    #[test]
    fn test_keeps_requesting_frames() {
        let mut scheduler = FrameScheduler::new();
        let mut animator = StarAnimator::new(star(0.0, 0.01), KEY, AngleStep::Fixed);
        animator.activate(&mut scheduler);
        animator.activate(&mut scheduler);
        assert_eq!(scheduler.pending_frames(), 1);

        run_frames(&mut animator, &mut scheduler, &[0.0, 16.0, 32.0]);
        assert_eq!(scheduler.pending_frames(), 1);
        assert!(animator.is_scheduled());
    }

    #[test]
    fn test_teardown_stops_frames() {
        let mut scheduler = FrameScheduler::new();
        let mut animator = StarAnimator::new(star(0.0, 0.01), KEY, AngleStep::Fixed);
        animator.activate(&mut scheduler);
        run_frames(&mut animator, &mut scheduler, &[0.0]);

        animator.teardown(&mut scheduler);
        assert!(!animator.is_scheduled());
        assert!(scheduler.is_idle());
        assert!(scheduler.take_frames().is_empty());
    }
}
