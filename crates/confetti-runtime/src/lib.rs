//! Confetti Runtime - frame scheduling and the control surface
//!
//! Ties the particle simulation and the draw pass into a self-rescheduling
//! animation loop:
//! - `FrameScheduler` — injectable frame-timing primitive, with
//!   `TimerScheduler` as the fixed-delay fallback for hosts without one
//! - the loop itself: throttle to the configured interval, rebase the
//!   cadence, self-idle when the field empties, go quiet while paused
//! - `Confetti` — the start/stop/pause/resume/toggle/remove control API

mod animation;
mod control;
mod scheduler;
mod state;

pub use control::{Confetti, StartOptions, SurfaceFactory};
pub use scheduler::{
    pump, FrameCallback, FrameHandle, FrameScheduler, ManualScheduler, TimerScheduler,
};
