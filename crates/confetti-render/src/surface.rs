//! The injected 2D drawing surface the renderer paints onto

use confetti_core::Rgba;

/// Stroke styling for a single line segment.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeStyle {
    Solid(Rgba),
    /// Linear gradient along the given segment.
    LinearGradient {
        from: (f64, f64),
        to: (f64, f64),
        /// (offset in [0, 1], color) pairs
        stops: Vec<(f64, Rgba)>,
    },
}

/// Minimal line-drawing surface, injected by the host.
///
/// `width`/`height` belong to the host, which updates them when the viewport
/// resizes; the core only reads them, once at the start of each tick, so a
/// resize mid-frame never tears a single update/draw pass.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Clear the full `width x height` rectangle.
    fn clear(&mut self, width: f64, height: f64);

    fn set_line_width(&mut self, width: f64);
    fn set_stroke_style(&mut self, style: StrokeStyle);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}
