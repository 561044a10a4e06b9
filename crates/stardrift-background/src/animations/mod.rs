//! Per-element animators driven by the frame scheduler.

pub mod comet;
pub mod star;

/// Scheduler address of an animator inside the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKey {
    Star(usize),
    Comet(usize),
}
