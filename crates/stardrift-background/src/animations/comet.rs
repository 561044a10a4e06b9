//! Arcing comet animation (stateful).

use stardrift_core::Point;

use crate::animations::ElementKey;
use crate::generate::CometParams;
use crate::kinematics;
use crate::scheduler::{FrameId, FrameScheduler, TimerId};
use crate::sprite::{Sprite, SpriteKind};

/// Streak width in multiples of the comet size.
const STREAK_WIDTH: f64 = 10.0;
/// Streak height in multiples of the comet size.
const STREAK_HEIGHT: f64 = 3.0;

/// Lifecycle of a comet flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CometPhase {
    /// Waiting for the start delay to elapse.
    Pending,
    /// Flying along the arc.
    Animating,
    /// Flight finished; fully transparent.
    Done,
}

/// Animation state of one comet.
#[derive(Debug)]
pub struct CometAnimator {
    params: CometParams,
    key: ElementKey,
    phase: CometPhase,
    /// Arc progress in `[0, 1]`, never decreasing.
    progress: f64,
    start_ms: Option<f64>,
    timer: Option<TimerId>,
    frame: Option<FrameId>,
}

impl CometAnimator {
    pub fn new(params: CometParams, key: ElementKey) -> Self {
        Self {
            params,
            key,
            phase: CometPhase::Pending,
            progress: 0.0,
            start_ms: None,
            timer: None,
            frame: None,
        }
    }

    pub fn params(&self) -> &CometParams {
        &self.params
    }

    pub fn phase(&self) -> CometPhase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn opacity(&self) -> f64 {
        1.0 - self.progress
    }

    /// Whether a timer or frame request is outstanding.
    pub fn is_scheduled(&self) -> bool {
        self.timer.is_some() || self.frame.is_some()
    }

    /// Arm the start delay timer.
    pub fn activate(&mut self, scheduler: &mut FrameScheduler<ElementKey>) {
        if self.phase == CometPhase::Pending && self.timer.is_none() {
            let delay_ms = self.params.start_delay_seconds * 1000.0;
            self.timer = Some(scheduler.set_timeout(self.key, delay_ms));
        }
    }

    /// The start delay elapsed: begin flying on the next frame.
    pub fn on_timer(&mut self, scheduler: &mut FrameScheduler<ElementKey>) {
        self.timer = None;
        if self.phase == CometPhase::Pending {
            self.phase = CometPhase::Animating;
            self.frame = Some(scheduler.request_frame(self.key));
        }
    }

    /// Handle a frame at `timestamp_ms`.
    pub fn on_frame(&mut self, timestamp_ms: f64, scheduler: &mut FrameScheduler<ElementKey>) {
        self.frame = None;
        if self.phase != CometPhase::Animating {
            return;
        }

        let start = *self.start_ms.get_or_insert(timestamp_ms);
        let progress = kinematics::arc_progress(timestamp_ms - start, self.params.duration_seconds);
        self.progress = self.progress.max(progress);

        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.phase = CometPhase::Done;
        } else {
            self.frame = Some(scheduler.request_frame(self.key));
        }
    }

    /// Cancel whatever is scheduled for this comet.
    pub fn teardown(&mut self, scheduler: &mut FrameScheduler<ElementKey>) {
        if let Some(id) = self.timer.take() {
            scheduler.clear_timeout(id);
        }
        if let Some(id) = self.frame.take() {
            scheduler.cancel_frame(id);
        }
    }

    /// Top-left corner of the streak.
    pub fn position(&self) -> Point {
        kinematics::arc_position(
            self.params.start(),
            self.params.arc_width,
            self.params.arc_height,
            self.params.size,
            self.progress,
        )
    }

    /// Sprite for the current frame. A comet waiting to launch sits fully
    /// opaque at the start of its arc.
    pub fn sprite(&self) -> Sprite {
        Sprite {
            kind: SpriteKind::Comet,
            position: self.position(),
            width: self.params.size * STREAK_WIDTH,
            height: self.params.size * STREAK_HEIGHT,
            rgb: (255, 255, 255),
            opacity: self.opacity(),
            brightness: 1.0,
        }
    }
}
