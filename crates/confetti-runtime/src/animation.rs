//! The self-rescheduling animation loop
//!
//! Each scheduled callback runs one tick: honor deferred stops, go quiet if
//! paused, self-idle with a final clear once the field is empty, otherwise
//! throttle to the configured interval, run one simulate+draw pass, and
//! rebase the cadence so throttling drifts toward the target rather than
//! away from it. The tick then re-arms itself through the scheduler.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use confetti_particles::StepParams;
use confetti_render::draw_particles;
use log::{debug, trace};

use crate::scheduler::FrameScheduler;
use crate::state::ConfettiState;

pub(crate) type SharedState = Rc<RefCell<ConfettiState>>;
pub(crate) type SharedScheduler = Rc<RefCell<dyn FrameScheduler>>;

/// Entry point for scheduled frame callbacks.
pub(crate) fn run_animation(state: &SharedState, scheduler: &SharedScheduler) {
    tick(state, scheduler, Instant::now());
}

/// One tick of the loop, at an explicit point in time.
pub(crate) fn tick(state: &SharedState, scheduler: &SharedScheduler, now: Instant) {
    let reschedule = {
        let mut guard = state.borrow_mut();
        let st = &mut *guard;

        // This callback has fired; the handle it was scheduled under is spent.
        st.scheduled = None;

        if st.stop_deadlines.iter().any(|deadline| *deadline <= now) {
            debug!("[confetti] deferred stop fired");
            st.streaming = false;
        }
        st.stop_deadlines.retain(|deadline| *deadline > now);

        if st.paused {
            trace!("[confetti] tick while paused; loop going quiet");
            false
        } else if st.sim.store().is_empty() {
            if let Some(surface) = st.surface.as_mut() {
                let (width, height) = (surface.width(), surface.height());
                surface.clear(width, height);
            }
            debug!("[confetti] field empty; loop idling");
            false
        } else {
            let native = scheduler.borrow().has_native_timing();
            let elapsed = now.duration_since(st.last_frame_time);
            let interval = st.config.frame_interval();

            if !native || elapsed > interval {
                run_frame(st);
                st.last_frame_time = now - cadence_remainder(elapsed, interval);
            }
            true
        }
    };

    if reschedule {
        schedule_frame(state, scheduler);
    }
}

/// Arm the next frame callback, if one is not already pending.
pub(crate) fn schedule_frame(state: &SharedState, scheduler: &SharedScheduler) {
    if state.borrow().scheduled.is_some() {
        return;
    }
    let st = Rc::clone(state);
    let sc = Rc::clone(scheduler);
    let handle = scheduler
        .borrow_mut()
        .schedule(Box::new(move || run_animation(&st, &sc)));
    state.borrow_mut().scheduled = Some(handle);
}

/// One executed frame: clear, simulate, draw. Surface dimensions are read
/// once here and used for the whole pass.
fn run_frame(st: &mut ConfettiState) {
    let Some(surface) = st.surface.as_mut() else {
        return;
    };
    let width = surface.width();
    let height = surface.height();
    surface.clear(width, height);

    let params = StepParams {
        width,
        height,
        speed: st.config.speed,
        max_count: st.config.max_count,
        alpha: st.config.alpha,
        streaming: st.streaming,
    };
    st.sim.step(&params);

    draw_particles(surface.as_mut(), st.sim.store(), st.config.gradient);
}

/// The elapsed time's remainder modulo the frame interval; subtracting it
/// from `now` rebases the cadence on the target grid.
fn cadence_remainder(elapsed: Duration, interval: Duration) -> Duration {
    if interval.is_zero() {
        return Duration::ZERO;
    }
    Duration::from_nanos((elapsed.as_nanos() % interval.as_nanos()) as u64)
}
