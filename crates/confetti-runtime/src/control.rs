//! Control API for the confetti field

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use std::time::{Duration, Instant};

use confetti_core::{ConfettiConfig, ConfettiError, Result};
use confetti_render::Surface;
use log::debug;

use crate::animation::{schedule_frame, SharedScheduler, SharedState};
use crate::scheduler::FrameScheduler;
use crate::state::ConfettiState;

/// Lazily acquires the drawing surface on the first `start`.
///
/// The core neither knows nor cares how the surface is located or attached
/// to a display tree; it calls the factory once and reuses the result.
pub type SurfaceFactory = Box<dyn FnMut() -> Result<Box<dyn Surface>>>;

/// Options for [`Confetti::start_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StartOptions {
    /// Stop streaming automatically after this delay
    pub timeout: Option<Duration>,
    /// Lower bound on how many particles to add
    pub min: Option<u32>,
    /// Upper bound on how many particles to add
    pub max: Option<u32>,
}

/// The confetti field and its imperative control surface.
///
/// All calls are side-effect-only except the two boolean queries. The
/// scheduler is shared so the host keeps driving it (pumping the fallback
/// timer, say) while this handle mutates the simulation.
pub struct Confetti {
    state: SharedState,
    scheduler: SharedScheduler,
    surface_factory: SurfaceFactory,
}

impl Confetti {
    pub fn new(surface_factory: SurfaceFactory, scheduler: Rc<RefCell<dyn FrameScheduler>>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ConfettiState::new(ConfettiConfig::default()))),
            scheduler,
            surface_factory,
        }
    }

    /// Replace the default configuration before first use.
    pub fn with_config(self, config: ConfettiConfig) -> Self {
        self.state.borrow_mut().config = config;
        self
    }

    pub fn config(&self) -> Ref<'_, ConfettiConfig> {
        Ref::map(self.state.borrow(), |st| &st.config)
    }

    /// Knobs are read fresh each cycle, so edits here apply from the next
    /// executed frame.
    pub fn config_mut(&self) -> RefMut<'_, ConfettiConfig> {
        RefMut::map(self.state.borrow_mut(), |st| &mut st.config)
    }

    /// Start (or keep) streaming with default options.
    pub fn start(&mut self) -> Result<()> {
        self.start_with(StartOptions::default())
    }

    /// Start (or keep) streaming: acquire the surface if this is the first
    /// call, grow the population per the spawn policy, clear any pause, and
    /// make sure the loop is armed.
    ///
    /// Calling this while already running is loop-idempotent but still
    /// re-applies the spawn policy, so the population can grow further; with
    /// `timeout` set, a deferred stop is stacked each call and the earliest
    /// one to expire wins.
    pub fn start_with(&mut self, options: StartOptions) -> Result<()> {
        {
            let mut guard = self.state.borrow_mut();
            if guard.surface.is_none() {
                guard.surface = Some((self.surface_factory)()?);
            }
            let st = &mut *guard;
            let (width, height) = match st.surface.as_ref() {
                Some(surface) => (surface.width(), surface.height()),
                None => return Err(ConfettiError::Surface("no drawing surface".into())),
            };

            let target = st
                .sim
                .resolve_spawn_target(st.config.max_count, options.min, options.max);
            st.sim.populate(target, width, height, st.config.alpha);

            st.streaming = true;
            st.paused = false;
            if let Some(timeout) = options.timeout {
                st.stop_deadlines.push(Instant::now() + timeout);
            }
            debug!("[confetti] start: population {}", st.sim.store().len());
        }
        schedule_frame(&self.state, &self.scheduler);
        Ok(())
    }

    /// Stop streaming. Existing particles keep animating and drain out; the
    /// loop idles by itself once the field empties. A no-op when already
    /// stopped.
    pub fn stop(&mut self) {
        let mut st = self.state.borrow_mut();
        if st.streaming {
            debug!("[confetti] stop: draining {} particles", st.sim.store().len());
        }
        st.streaming = false;
    }

    /// `stop` if streaming, else `start` with defaults.
    pub fn toggle(&mut self) -> Result<()> {
        if self.is_running() {
            self.stop();
            Ok(())
        } else {
            self.start()
        }
    }

    /// Freeze the loop. State is preserved exactly; the next scheduled tick
    /// sees the flag and goes quiet. A no-op when already paused.
    pub fn pause(&mut self) {
        self.state.borrow_mut().paused = true;
    }

    /// Clear the pause and re-arm the loop if it went idle.
    pub fn resume(&mut self) {
        self.state.borrow_mut().paused = false;
        schedule_frame(&self.state, &self.scheduler);
    }

    /// `resume` if paused, else `pause`.
    pub fn toggle_pause(&mut self) {
        if self.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Stop streaming, clear any pause, and empty the field outright with no
    /// drain phase. The surface itself is kept for later `start` calls.
    pub fn remove(&mut self) {
        let mut st = self.state.borrow_mut();
        st.streaming = false;
        st.paused = false;
        st.sim.clear();
        debug!("[confetti] remove: field emptied");
    }

    pub fn is_paused(&self) -> bool {
        self.state.borrow().paused
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().streaming
    }

    pub fn particle_count(&self) -> usize {
        self.state.borrow().sim.store().len()
    }
}

impl Drop for Confetti {
    fn drop(&mut self) {
        let handle = self.state.borrow_mut().scheduled.take();
        if let Some(handle) = handle {
            self.scheduler.borrow_mut().cancel(handle);
        }
    }
}
