//! Confetti Render - drawing-surface abstraction and the particle draw pass
//!
//! The core never owns a real canvas. Hosts inject something that implements
//! [`Surface`] and the renderer paints one stroked line segment per flake,
//! solid or two-stop gradient. [`RecordingSurface`] is a headless surface
//! that records draw calls instead of painting, for tests and tooling.

mod recording;
mod renderer;
mod surface;

pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::draw_particles;
pub use surface::{StrokeStyle, Surface};
