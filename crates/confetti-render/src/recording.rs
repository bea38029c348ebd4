//! Headless surface that records draw calls instead of painting

use std::cell::RefCell;
use std::rc::Rc;

use crate::surface::{StrokeStyle, Surface};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    LineWidth(f64),
    StrokeStyle(StrokeStyle),
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
}

/// A [`Surface`] that keeps a transcript of every call made against it.
///
/// Stands in for a real canvas in tests and headless tooling, the same way a
/// windowless render context stands in for a swapchain.
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Host-side resize; the next tick picks the new dimensions up.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.commands.push(DrawCommand::StrokeStyle(style));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}

/// Shared handle, so a caller can hand the surface to a factory and keep
/// inspecting the transcript afterwards.
impl Surface for Rc<RefCell<RecordingSurface>> {
    fn width(&self) -> f64 {
        self.borrow().width
    }

    fn height(&self) -> f64 {
        self.borrow().height
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.borrow_mut().clear(width, height);
    }

    fn set_line_width(&mut self, width: f64) {
        self.borrow_mut().set_line_width(width);
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.borrow_mut().set_stroke_style(style);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.borrow_mut().move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.borrow_mut().line_to(x, y);
    }

    fn stroke(&mut self) {
        self.borrow_mut().stroke();
    }
}
