//! Canvas that records draw calls instead of rasterising them

use super::{Canvas, Color};
use crate::Vector2i;
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color },
    FillOval { bounds: Rect, color: Color },
    StrokeOval { bounds: Rect, color: Color },
    FillArc { bounds: Rect, start_deg: i32, sweep_deg: i32, color: Color },
    Line { from: Vector2i, to: Vector2i, color: Color },
    Text { baseline: Vector2i, text: String, size: i32, color: Color },
}

/// Every primitive issued for a frame, in order
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    /// Strings drawn so far
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, color });
    }

    fn fill_oval(&mut self, bounds: Rect, color: Color) {
        self.commands.push(DrawCommand::FillOval { bounds, color });
    }

    fn stroke_oval(&mut self, bounds: Rect, color: Color) {
        self.commands.push(DrawCommand::StrokeOval { bounds, color });
    }

    fn fill_arc(&mut self, bounds: Rect, start_deg: i32, sweep_deg: i32, color: Color) {
        self.commands.push(DrawCommand::FillArc {
            bounds,
            start_deg,
            sweep_deg,
            color,
        });
    }

    fn line(&mut self, from: Vector2i, to: Vector2i, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn text(&mut self, baseline: Vector2i, text: &str, size: i32, color: Color) {
        self.commands.push(DrawCommand::Text {
            baseline,
            text: text.to_owned(),
            size,
            color,
        });
    }
}
