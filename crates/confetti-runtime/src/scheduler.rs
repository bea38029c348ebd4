//! Frame scheduling: native host timing or a fixed-delay fallback

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Opaque identifier for a pending frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// One-shot frame callback.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Host-provided frame timing.
///
/// `schedule` queues a one-shot callback for the next frame and `cancel`
/// drops a still-pending one. `has_native_timing` reports whether the host
/// paces callbacks itself (a display-refresh primitive); when it does not,
/// the animation loop does work on every executed callback instead of
/// throttling by elapsed time, since the delay already paces it.
pub trait FrameScheduler {
    fn schedule(&mut self, callback: FrameCallback) -> FrameHandle;
    fn cancel(&mut self, handle: FrameHandle);

    fn has_native_timing(&self) -> bool {
        true
    }
}

/// Fallback scheduler for hosts without a native frame-timing primitive.
///
/// Each callback becomes due a fixed delay after it is scheduled; the host
/// pumps due callbacks from its own loop via [`take_due`]. Reports no native
/// timing, so every executed tick does a full update/draw.
///
/// [`take_due`]: TimerScheduler::take_due
pub struct TimerScheduler {
    delay: Duration,
    next_handle: u64,
    pending: VecDeque<(FrameHandle, Instant, FrameCallback)>,
}

impl TimerScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_handle: 0,
            pending: VecDeque::new(),
        }
    }

    /// Change the delay applied to callbacks scheduled from now on.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Remove and return every callback due at or before `now`, in
    /// scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<FrameCallback> {
        let mut due = Vec::new();
        while self
            .pending
            .front()
            .is_some_and(|(_, when, _)| *when <= now)
        {
            if let Some((_, _, callback)) = self.pending.pop_front() {
                due.push(callback);
            }
        }
        due
    }

    /// When the earliest pending callback becomes due, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.front().map(|(_, when, _)| *when)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl FrameScheduler for TimerScheduler {
    fn schedule(&mut self, callback: FrameCallback) -> FrameHandle {
        let handle = FrameHandle(self.next_handle);
        self.next_handle += 1;
        self.pending
            .push_back((handle, Instant::now() + self.delay, callback));
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.pending.retain(|(h, _, _)| *h != handle);
    }

    fn has_native_timing(&self) -> bool {
        false
    }
}

/// Scheduler driven entirely by the caller: callbacks queue up until
/// [`pump`] (or [`drain`]) runs them. Used in tests and by hosts that own
/// their frame loop outright.
///
/// [`drain`]: ManualScheduler::drain
pub struct ManualScheduler {
    native_timing: bool,
    next_handle: u64,
    pending: Vec<(FrameHandle, FrameCallback)>,
}

impl ManualScheduler {
    /// A scheduler that claims native timing, like a display-refresh host.
    pub fn new() -> Self {
        Self {
            native_timing: true,
            next_handle: 0,
            pending: Vec::new(),
        }
    }

    /// A scheduler that behaves like the fixed-delay fallback: ticks it runs
    /// always do work.
    pub fn without_native_timing() -> Self {
        Self {
            native_timing: false,
            ..Self::new()
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Take every currently-pending callback, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<FrameCallback> {
        std::mem::take(&mut self.pending)
            .into_iter()
            .map(|(_, callback)| callback)
            .collect()
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self, callback: FrameCallback) -> FrameHandle {
        let handle = FrameHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push((handle, callback));
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.pending.retain(|(h, _)| *h != handle);
    }

    fn has_native_timing(&self) -> bool {
        self.native_timing
    }
}

/// Run one frame generation: every callback pending right now, but not the
/// ones those callbacks schedule in turn. Returns how many ran.
pub fn pump(scheduler: &Rc<RefCell<ManualScheduler>>) -> usize {
    let callbacks = scheduler.borrow_mut().drain();
    let count = callbacks.len();
    for callback in callbacks {
        callback();
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn timer_callbacks_become_due_after_the_delay() {
        let mut scheduler = TimerScheduler::new(Duration::from_millis(10));
        scheduler.schedule(Box::new(|| {}));

        assert_eq!(scheduler.take_due(Instant::now()).len(), 0);
        assert_eq!(scheduler.pending(), 1);

        let later = Instant::now() + Duration::from_millis(20);
        assert_eq!(scheduler.take_due(later).len(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn timer_cancel_drops_the_callback() {
        let mut scheduler = TimerScheduler::new(Duration::ZERO);
        let handle = scheduler.schedule(Box::new(|| {}));
        scheduler.cancel(handle);
        let later = Instant::now() + Duration::from_millis(1);
        assert!(scheduler.take_due(later).is_empty());
    }

    #[test]
    fn timer_reports_no_native_timing() {
        let scheduler = TimerScheduler::new(Duration::from_millis(15));
        assert!(!scheduler.has_native_timing());
        assert!(scheduler.next_due().is_none());
    }

    #[test]
    fn pump_runs_one_generation_only() {
        let scheduler = Rc::new(RefCell::new(ManualScheduler::new()));
        let ran = Arc::new(AtomicUsize::new(0));

        let inner = scheduler.clone();
        let ran2 = ran.clone();
        scheduler.borrow_mut().schedule(Box::new(move || {
            ran2.fetch_add(1, Ordering::SeqCst);
            // Reschedules itself; the new callback must wait for the next pump
            let ran3 = ran2.clone();
            inner.borrow_mut().schedule(Box::new(move || {
                ran3.fetch_add(1, Ordering::SeqCst);
            }));
        }));

        assert_eq!(pump(&scheduler), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.borrow().pending(), 1);

        assert_eq!(pump(&scheduler), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 2);
        assert_eq!(pump(&scheduler), 0);
    }

    #[test]
    fn manual_cancel_removes_pending() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(Box::new(|| {}));
        assert_eq!(scheduler.pending(), 1);
        scheduler.cancel(handle);
        assert_eq!(scheduler.pending(), 0);
    }
}
