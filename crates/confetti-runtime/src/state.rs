//! Shared simulation context threaded through the control API and the loop

use std::time::Instant;

use confetti_core::ConfettiConfig;
use confetti_particles::Simulation;
use confetti_render::Surface;

use crate::scheduler::FrameHandle;

/// Everything the animation owns, behind one handle.
///
/// Mutated either synchronously inside a control call or inside the frame
/// callback; the host serializes those, so no locking is involved.
pub(crate) struct ConfettiState {
    pub(crate) config: ConfettiConfig,
    pub(crate) sim: Simulation,
    /// Created lazily on first `start` and reused for the process lifetime
    pub(crate) surface: Option<Box<dyn Surface>>,
    /// True while the population is being replenished
    pub(crate) streaming: bool,
    /// True while ticks must not advance or reschedule
    pub(crate) paused: bool,
    /// The at-most-one pending frame callback
    pub(crate) scheduled: Option<FrameHandle>,
    /// Timestamp of the last executed (non-skipped) frame
    pub(crate) last_frame_time: Instant,
    /// Deferred-stop deadlines from `start(timeout)`; stacked, earliest wins
    pub(crate) stop_deadlines: Vec<Instant>,
}

impl ConfettiState {
    pub(crate) fn new(config: ConfettiConfig) -> Self {
        Self {
            config,
            sim: Simulation::from_time(),
            surface: None,
            streaming: false,
            paused: false,
            scheduled: None,
            last_frame_time: Instant::now(),
            stop_deadlines: Vec::new(),
        }
    }
}
