//! Scene container owning every star and comet.

use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stardrift_core::{AngleStep, Viewport};

use crate::animations::ElementKey;
use crate::animations::comet::{CometAnimator, CometPhase};
use crate::animations::star::StarAnimator;
use crate::generate::{self, CometParams, StarParams};
use crate::scheduler::FrameScheduler;
use crate::sprite::Sprite;

/// Behavior switches for a [`Scene`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneOptions {
    /// Star angle stepping policy.
    pub angle_step: AngleStep,
    /// Also regenerate comets when the viewport is resized.
    pub regenerate_comets_on_resize: bool,
    /// Launch a fresh batch of comets once every comet has finished.
    pub relaunch_comets: bool,
}

/// The animated background: stars, comets and the scheduler driving them.
#[derive(Debug)]
pub struct Scene {
    viewport: Viewport,
    options: SceneOptions,
    rng: ChaCha8Rng,
    scheduler: FrameScheduler<ElementKey>,
    stars: Vec<StarAnimator>,
    comets: Vec<CometAnimator>,
    star_batch: u64,
    comet_batch: u64,
}

impl Scene {
    /// Create a scene with a reproducible random source.
    pub fn new(viewport: Viewport, options: SceneOptions, seed: u64) -> Self {
        let mut scene = Self {
            viewport,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            scheduler: FrameScheduler::new(),
            stars: Vec::new(),
            comets: Vec::new(),
            star_batch: 0,
            comet_batch: 0,
        };
        scene.regenerate_stars();
        scene.regenerate_comets();
        scene
    }

    /// Create a scene seeded from the system clock.
    pub fn with_time_seed(viewport: Viewport, options: SceneOptions) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(viewport, options, seed)
    }

    /// Current star parameters, in generation order.
    pub fn stars(&self) -> impl Iterator<Item = &StarParams> {
        self.stars.iter().map(StarAnimator::params)
    }

    /// Current comet parameters, in generation order.
    pub fn comets(&self) -> impl Iterator<Item = &CometParams> {
        self.comets.iter().map(CometAnimator::params)
    }

    pub fn star_animators(&self) -> &[StarAnimator] {
        &self.stars
    }

    pub fn comet_animators(&self) -> &[CometAnimator] {
        &self.comets
    }

    /// Frame requests currently outstanding.
    pub fn pending_frames(&self) -> usize {
        self.scheduler.pending_frames()
    }

    /// Comet launch timers currently armed.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_timers()
    }

    /// Notify the scene that the viewport changed size.
    ///
    /// Returns true when the scene was regenerated.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.regenerate_stars();
        if self.options.regenerate_comets_on_resize {
            self.regenerate_comets();
        }
        true
    }

    /// Advance the scene to `now_ms`: fire due timers, then run the frames
    /// requested before this call.
    pub fn tick(&mut self, now_ms: f64) {
        for key in self.scheduler.advance_to(now_ms) {
            if let ElementKey::Comet(index) = key
                && let Some(comet) = self.comets.get_mut(index)
            {
                comet.on_timer(&mut self.scheduler);
            }
        }

        for key in self.scheduler.take_frames() {
            match key {
                ElementKey::Star(index) => {
                    if let Some(star) = self.stars.get_mut(index) {
                        star.on_frame(now_ms, &mut self.scheduler);
                    }
                }
                ElementKey::Comet(index) => {
                    if let Some(comet) = self.comets.get_mut(index) {
                        comet.on_frame(now_ms, &mut self.scheduler);
                    }
                }
            }
        }

        if self.options.relaunch_comets
            && !self.comets.is_empty()
            && self.comets.iter().all(|c| c.phase() == CometPhase::Done)
        {
            self.regenerate_comets();
        }
    }

    /// Cancel every outstanding frame and timer. The scene stays drawable but
    /// no longer moves; later ticks are no-ops.
    pub fn teardown(&mut self) {
        for star in &mut self.stars {
            star.teardown(&mut self.scheduler);
        }
        for comet in &mut self.comets {
            comet.teardown(&mut self.scheduler);
        }
        trace!(
            "scene torn down ({} stars, {} comets)",
            self.stars.len(),
            self.comets.len()
        );
    }

    /// Render tree for the current frame: stars first, comets on top.
    pub fn sprites(&self) -> Vec<Sprite> {
        let stars = self.stars.iter().map(|s| s.sprite(self.viewport));
        let comets = self.comets.iter().map(CometAnimator::sprite);
        stars.chain(comets).collect()
    }

    fn regenerate_stars(&mut self) {
        for star in &mut self.stars {
            star.teardown(&mut self.scheduler);
        }

        self.star_batch += 1;
        let params = generate::generate_stars(self.viewport, self.star_batch, &mut self.rng);
        self.stars = params
            .into_iter()
            .enumerate()
            .map(|(index, p)| {
                StarAnimator::new(p, ElementKey::Star(index), self.options.angle_step)
            })
            .collect();
        for star in &mut self.stars {
            star.activate(&mut self.scheduler);
        }

        debug!(
            "generated {} stars for {}x{} viewport (batch {})",
            self.stars.len(),
            self.viewport.width,
            self.viewport.height,
            self.star_batch
        );
    }

    fn regenerate_comets(&mut self) {
        for comet in &mut self.comets {
            comet.teardown(&mut self.scheduler);
        }

        self.comet_batch += 1;
        let params = generate::generate_comets(self.viewport, self.comet_batch, &mut self.rng);
        self.comets = params
            .into_iter()
            .enumerate()
            .map(|(index, p)| CometAnimator::new(p, ElementKey::Comet(index)))
            .collect();
        for comet in &mut self.comets {
            comet.activate(&mut self.scheduler);
        }

        debug!("launched comet batch {}", self.comet_batch);
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.teardown();
    }
}
