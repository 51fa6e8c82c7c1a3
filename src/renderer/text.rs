//! Character-grid canvas for headless runs and logs
//!
//! Each cell samples the primitive at its centre. Cells are twice as tall as
//! they are wide so the printed frame keeps roughly the panel's proportions.

use super::{Canvas, Color, palette};
use crate::Vector2i;
use crate::sim::Rect;

/// Fallback glyphs from dark to bright
const RAMP: &[char] = &[' ', '.', ':', ';', '+', '*', '%', '$'];

/// Glyph for a colour. Known palette entries get a fixed symbol.
pub fn glyph_for(color: Color) -> char {
    match color {
        palette::BLACK => ' ',
        palette::WHITE => '-',
        palette::WATER => '~',
        palette::GRASS => '"',
        palette::LOG => '=',
        palette::LOG_END => '#',
        palette::TURTLE => 'o',
        palette::TURTLE_OUTLINE => 'O',
        palette::FROG_SKIN => '@',
        palette::FROG_OUTLINE => '&',
        palette::WHEEL => 'x',
        other => {
            let index = (other.luminance() * (RAMP.len() - 1) as f32).round() as usize;
            RAMP[index.min(RAMP.len() - 1)]
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextCanvas {
    cell_w: i32,
    cell_h: i32,
    cols: i32,
    rows: i32,
    cells: Vec<char>,
}

impl TextCanvas {
    /// Grid covering a `width` x `height` panel with `cell` pixels per column
    pub fn new(width: i32, height: i32, cell: i32) -> Self {
        let cell_w = cell.max(1);
        let cell_h = cell_w * 2;
        let cols = (width.max(0) + cell_w - 1) / cell_w;
        let rows = (height.max(0) + cell_h - 1) / cell_h;
        Self {
            cell_w,
            cell_h,
            cols,
            rows,
            cells: vec![' '; (cols * rows) as usize],
        }
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn glyph(&self, col: i32, row: i32) -> Option<char> {
        self.idx(col, row).map(|i| self.cells[i])
    }

    /// Glyph of the cell containing a pixel
    pub fn glyph_at(&self, point: Vector2i) -> Option<char> {
        self.glyph(point.x.div_euclid(self.cell_w), point.y.div_euclid(self.cell_h))
    }

    /// Rows joined by newlines
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.rows as usize);
        for row in self.cells.chunks(self.cols.max(1) as usize) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    fn idx(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols || row >= self.rows {
            return None;
        }
        Some((row * self.cols + col) as usize)
    }

    fn set(&mut self, col: i32, row: i32, c: char) {
        if let Some(i) = self.idx(col, row) {
            self.cells[i] = c;
        }
    }

    /// Set every cell in `bounds` whose centre passes `inside`
    fn paint(&mut self, bounds: Rect, c: char, inside: impl Fn(f32, f32) -> bool) {
        let col_start = bounds.left().div_euclid(self.cell_w).max(0);
        let col_end = bounds.right().div_euclid(self.cell_w).min(self.cols - 1);
        let row_start = bounds.top().div_euclid(self.cell_h).max(0);
        let row_end = bounds.bottom().div_euclid(self.cell_h).min(self.rows - 1);

        for row in row_start..=row_end {
            for col in col_start..=col_end {
                let px = (col * self.cell_w) as f32 + self.cell_w as f32 / 2.0;
                let py = (row * self.cell_h) as f32 + self.cell_h as f32 / 2.0;
                if inside(px, py) {
                    self.set(col, row, c);
                }
            }
        }
    }
}

fn in_rect(r: &Rect, px: f32, py: f32) -> bool {
    px >= r.left() as f32 && px < r.right() as f32 && py >= r.top() as f32 && py < r.bottom() as f32
}

/// Normalised squared distance from the oval centre; 1.0 on the edge
fn oval_distance(r: &Rect, px: f32, py: f32, inset_x: f32, inset_y: f32) -> f32 {
    let rx = r.width as f32 / 2.0 - inset_x;
    let ry = r.height as f32 / 2.0 - inset_y;
    if rx <= 0.0 || ry <= 0.0 {
        return f32::INFINITY;
    }
    let dx = (px - (r.left() as f32 + r.width as f32 / 2.0)) / rx;
    let dy = (py - (r.top() as f32 + r.height as f32 / 2.0)) / ry;
    dx * dx + dy * dy
}

impl Canvas for TextCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.paint(rect, glyph_for(color), |px, py| in_rect(&rect, px, py));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        let (cw, ch) = (self.cell_w as f32, self.cell_h as f32);
        self.paint(rect, glyph_for(color), |px, py| {
            in_rect(&rect, px, py)
                && (px < rect.left() as f32 + cw
                    || px >= rect.right() as f32 - cw
                    || py < rect.top() as f32 + ch
                    || py >= rect.bottom() as f32 - ch)
        });
    }

    fn fill_oval(&mut self, bounds: Rect, color: Color) {
        self.paint(bounds, glyph_for(color), |px, py| {
            oval_distance(&bounds, px, py, 0.0, 0.0) <= 1.0
        });
    }

    fn stroke_oval(&mut self, bounds: Rect, color: Color) {
        let (cw, ch) = (self.cell_w as f32, self.cell_h as f32);
        self.paint(bounds, glyph_for(color), |px, py| {
            oval_distance(&bounds, px, py, 0.0, 0.0) <= 1.0 && oval_distance(&bounds, px, py, cw, ch) > 1.0
        });
    }

    fn fill_arc(&mut self, bounds: Rect, start_deg: i32, sweep_deg: i32, color: Color) {
        let (start, sweep) = if sweep_deg < 0 {
            ((start_deg + sweep_deg) as f32, -sweep_deg as f32)
        } else {
            (start_deg as f32, sweep_deg as f32)
        };
        let cx = bounds.left() as f32 + bounds.width as f32 / 2.0;
        let cy = bounds.top() as f32 + bounds.height as f32 / 2.0;

        self.paint(bounds, glyph_for(color), |px, py| {
            if oval_distance(&bounds, px, py, 0.0, 0.0) > 1.0 {
                return false;
            }
            // Screen y grows downward, angles grow counter-clockwise
            let angle = (cy - py).atan2(px - cx).to_degrees();
            sweep >= 360.0 || (angle - start).rem_euclid(360.0) <= sweep
        });
    }

    fn line(&mut self, from: Vector2i, to: Vector2i, color: Color) {
        let c = glyph_for(color);
        let delta = to - from;
        let steps = (delta.x.abs() / self.cell_w).max(delta.y.abs() / self.cell_h) + 1;
        for i in 0..=steps {
            let x = from.x + delta.x * i / steps;
            let y = from.y + delta.y * i / steps;
            self.set(x.div_euclid(self.cell_w), y.div_euclid(self.cell_h), c);
        }
    }

    fn text(&mut self, baseline: Vector2i, text: &str, size: i32, _color: Color) {
        let row = (baseline.y - size / 2).div_euclid(self.cell_h);
        let col = baseline.x.div_euclid(self.cell_w);
        for (i, c) in text.chars().enumerate() {
            self.set(col + i as i32, row, c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_frame;
    use crate::sim::GameState;

    #[test]
    fn test_grid_dimensions() {
        let canvas = TextCanvas::new(400, 600, 10);
        assert_eq!(canvas.cols(), 40);
        assert_eq!(canvas.rows(), 30);

        let canvas = TextCanvas::new(405, 601, 10);
        assert_eq!(canvas.cols(), 41);
        assert_eq!(canvas.rows(), 31);

        let rendered = TextCanvas::new(40, 40, 10).render();
        assert_eq!(rendered, "    \n    \n");
    }

    #[test]
    fn test_fill_rect_uses_cell_centres() {
        let mut canvas = TextCanvas::new(100, 100, 10);
        canvas.fill_rect(Rect::new(0, 0, 15, 20), palette::WATER);
        assert_eq!(canvas.glyph(0, 0), Some('~'));
        // Centre of column 1 is x=15, outside a rect ending at 15
        assert_eq!(canvas.glyph(1, 0), Some(' '));
        assert_eq!(canvas.glyph(0, 1), Some(' '));
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut canvas = TextCanvas::new(100, 200, 10);
        canvas.stroke_rect(Rect::new(0, 0, 50, 100), palette::FROG_OUTLINE);
        assert_eq!(canvas.glyph(0, 0), Some('&'));
        assert_eq!(canvas.glyph(4, 4), Some('&'));
        assert_eq!(canvas.glyph(2, 2), Some(' '));
    }

    #[test]
    fn test_arc_leaves_notch() {
        let mut canvas = TextCanvas::new(200, 400, 10);
        canvas.fill_arc(Rect::new(0, 0, 200, 400), 180, 330, palette::GRASS);
        // Left of centre is inside the sweep
        assert_eq!(canvas.glyph_at(Vector2i::new(55, 205)), Some('"'));
        // Just above nine o'clock is the cut-out
        assert_eq!(canvas.glyph_at(Vector2i::new(35, 185)), Some(' '));
        assert_eq!(canvas.glyph_at(Vector2i::new(165, 185)), Some('"'));
    }

    #[test]
    fn test_text_is_written_verbatim() {
        let mut canvas = TextCanvas::new(200, 100, 10);
        canvas.text(Vector2i::new(20, 50), "Hi!", 20, palette::WHITE);
        assert_eq!(canvas.glyph(2, 2), Some('H'));
        assert_eq!(canvas.glyph(3, 2), Some('i'));
        assert_eq!(canvas.glyph(4, 2), Some('!'));
    }

    #[test]
    fn test_line_covers_both_ends() {
        let mut canvas = TextCanvas::new(100, 200, 10);
        canvas.line(Vector2i::new(5, 5), Vector2i::new(5, 195), palette::WHEEL);
        for row in 0..canvas.rows() {
            assert_eq!(canvas.glyph(0, row), Some('x'));
        }
    }

    #[test]
    fn test_unknown_colour_uses_ramp() {
        assert_eq!(glyph_for(Color::rgb(250, 250, 250)), '$');
        assert_eq!(glyph_for(Color::rgb(5, 5, 5)), ' ');
    }

    #[test]
    fn test_frame_prints_bands() {
        let state = GameState::with_seed(3);
        let mut canvas = TextCanvas::new(state.layout.panel_width(), state.layout.panel_height(), 10);
        draw_frame(&state, &mut canvas);
        let text = canvas.render();

        assert_eq!(text.lines().count(), canvas.rows() as usize);
        assert!(text.contains(":Score"));
        // Median row is plain grass all the way across
        let median = state.zones.median;
        assert_eq!(canvas.glyph_at(median.pos + Vector2i::new(5, 20)), Some('"'));
        assert_eq!(canvas.glyph_at(median.pos + Vector2i::new(395, 20)), Some('"'));
    }
}
