//! Rendering module
//!
//! The simulation never draws. A frame is produced by walking a read-only
//! [`GameState`] and issuing primitive calls against a [`Canvas`], which the
//! platform implements.

pub mod recorder;
pub mod shapes;
pub mod text;

pub use recorder::{DrawCommand, Recorder};
pub use text::TextCanvas;

use crate::Vector2i;
use crate::sim::{GameState, Rect};

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness in 0..=1
    pub fn luminance(&self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }
}

/// Colours used by the draw routines
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const WATER: Color = Color::rgb(0, 255, 255);
    pub const GRASS: Color = Color::rgb(108, 186, 88);

    pub const FROG_SKIN: Color = Color::rgb(74, 177, 50);
    pub const FROG_OUTLINE: Color = Color::rgb(21, 64, 12);

    pub const LOG: Color = Color::rgb(135, 91, 35);
    pub const LOG_END: Color = Color::rgb(94, 63, 24);
    pub const TURTLE: Color = Color::rgb(64, 146, 35);
    pub const TURTLE_OUTLINE: Color = Color::rgb(30, 78, 18);
    pub const WHEEL: Color = Color::rgb(52, 49, 49);

    /// Car body colours, indexed by an obstacle's palette slot
    pub const HAZARD: [Color; crate::sim::entity::HAZARD_PALETTE_LEN] = [
        Color::rgb(0, 255, 255),
        Color::rgb(27, 57, 167),
        Color::rgb(255, 0, 0),
        Color::rgb(255, 200, 0),
        Color::rgb(255, 255, 0),
        Color::rgb(0, 255, 0),
    ];
}

/// Primitive drawing surface supplied by the platform.
///
/// Angles are in degrees, counter-clockwise from three o'clock. Text is
/// positioned by its baseline-left corner.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color);
    fn fill_oval(&mut self, bounds: Rect, color: Color);
    fn stroke_oval(&mut self, bounds: Rect, color: Color);
    fn fill_arc(&mut self, bounds: Rect, start_deg: i32, sweep_deg: i32, color: Color);
    fn line(&mut self, from: Vector2i, to: Vector2i, color: Color);
    fn text(&mut self, baseline: Vector2i, text: &str, size: i32, color: Color);

    /// Rendered width of `text` in pixels. Approximates a bold sans face.
    fn text_width(&self, text: &str, size: i32) -> i32 {
        text.chars().count() as i32 * size * 3 / 5
    }
}

/// Draw one complete frame: background, obstacles, frogs, status, overlay
pub fn draw_frame<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    let layout = &state.layout;
    shapes::draw_background(&state.zones, layout, canvas);
    for obstacle in state.obstacles() {
        shapes::draw_obstacle(obstacle, layout, canvas);
    }
    for frog in state.player.landed() {
        shapes::draw_frog(&frog.rect, canvas);
    }
    if let Some(frog) = state.player.frog() {
        shapes::draw_frog(&frog.rect, canvas);
    }
    shapes::draw_status(&state.player, &state.zones, layout, canvas);
    if state.is_game_ended() {
        shapes::draw_game_over(layout, canvas);
    }
}
