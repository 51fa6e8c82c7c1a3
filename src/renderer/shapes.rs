//! Draw routines for the play field and everything on it

use super::{Canvas, Color, palette};
use crate::Vector2i;
use crate::sim::{Band, Direction, EntityKind, LayoutConfig, MovingEntity, Player, Rect, ZoneLayout};

pub const GAME_OVER_MESSAGE: &str = "All Frogs Expended!";
pub const FONT_SIZE: i32 = 20;

/// Spacing and size of the white lane markings
const DASH_SPACING: i32 = 20;
const DASH_LENGTH: i32 = 10;
const DASH_THICKNESS: i32 = 4;

/// Grass bands, road with lane dashes, water, goal row with lily pads
pub fn draw_background<C: Canvas + ?Sized>(zones: &ZoneLayout, layout: &LayoutConfig, canvas: &mut C) {
    for (band, rect) in zones.bands() {
        canvas.fill_rect(rect, band_color(band));
    }

    let segment = layout.segment();
    let mut y = zones.road.top() + segment;
    while y < zones.start.top() {
        for x in (0..layout.panel_width()).step_by(DASH_SPACING as usize) {
            canvas.fill_rect(Rect::new(x, y, DASH_LENGTH, DASH_THICKNESS), palette::WHITE);
        }
        y += segment;
    }

    for pad in &zones.pads {
        // Lily pad with a notch cut out above nine o'clock
        canvas.fill_arc(*pad, 180, 330, palette::GRASS);
    }
}

pub fn band_color(band: Band) -> Color {
    match band {
        Band::Goal | Band::Water => palette::WATER,
        Band::Median | Band::Start => palette::GRASS,
        Band::Road | Band::Status => palette::BLACK,
    }
}

pub fn draw_obstacle<C: Canvas + ?Sized>(entity: &MovingEntity, layout: &LayoutConfig, canvas: &mut C) {
    match entity.kind {
        EntityKind::Hazard => draw_vehicle(entity, canvas),
        EntityKind::CarrierA => draw_log(entity, canvas),
        EntityKind::CarrierB => draw_turtles(entity, layout, canvas),
    }
}

/// Body colour for a hazard's palette slot
pub fn hazard_color(palette_index: usize) -> Color {
    palette::HAZARD[palette_index % palette::HAZARD.len()]
}

/// Short vehicles are cars, long ones trucks. Windows face the direction of travel.
fn draw_vehicle<C: Canvas + ?Sized>(entity: &MovingEntity, canvas: &mut C) {
    let r = entity.rect;
    let (x, y, w, h) = (r.left(), r.top(), r.width, r.height);
    let facing_left = entity.direction == Direction::Left;

    canvas.fill_rect(r, hazard_color(entity.palette_index));

    if entity.units < 3 {
        let front = if facing_left { x + 20 } else { x + w - 30 };
        let back = if facing_left { x + w - 15 } else { x + 10 };
        canvas.fill_rect(Rect::new(front, y + 5, 10, h - 10), palette::WHITE);
        canvas.fill_rect(Rect::new(back, y + 5, 5, h - 10), palette::WHITE);
        return;
    }

    let front = if facing_left { x + 10 } else { x + w - 20 };
    canvas.fill_rect(Rect::new(front, y + 5, 10, h - 10), palette::WHITE);

    let rear_wheels = if facing_left { x + w - 20 } else { x + 10 };
    for wheel in [
        Rect::new(rear_wheels, y - 3, 10, 6),
        Rect::new(rear_wheels, y + h - 3, 10, 6),
        Rect::new(front, y - 3, 10, 3),
        Rect::new(front, y + h, 10, 3),
    ] {
        canvas.fill_rect(wheel, palette::WHEEL);
    }

    let cabin = if facing_left { x + 25 } else { x + w - 35 };
    canvas.line(Vector2i::new(cabin, y + 1), Vector2i::new(cabin, y + h - 1), palette::WHEEL);
}

/// Log body with darker rounded end on the trailing side
fn draw_log<C: Canvas + ?Sized>(entity: &MovingEntity, canvas: &mut C) {
    let r = entity.rect;
    let facing_left = entity.direction == Direction::Left;
    let (left_cap, right_cap) = if facing_left {
        (palette::LOG_END, palette::LOG)
    } else {
        (palette::LOG, palette::LOG_END)
    };

    canvas.fill_rect(r, palette::LOG);
    canvas.fill_oval(Rect::new(r.left() - 5, r.top(), 10, r.height), left_cap);
    canvas.fill_oval(Rect::new(r.right() - 5, r.top(), 10, r.height), right_cap);
}

/// One shell per unit, heads on the left
fn draw_turtles<C: Canvas + ?Sized>(entity: &MovingEntity, layout: &LayoutConfig, canvas: &mut C) {
    let segment = layout.segment();
    let r = entity.rect;
    let mid = r.top() + r.height / 2;

    for i in 0..entity.units {
        let x = r.left() + i * segment;

        let head = Rect::new(x - 4, mid - 4, 8, 8);
        canvas.fill_oval(head, palette::TURTLE);
        canvas.stroke_oval(head, palette::TURTLE_OUTLINE);

        let shell = Rect::new(x + 2, r.top(), segment - 4, r.height);
        canvas.fill_oval(shell, palette::TURTLE);
        canvas.stroke_oval(shell, palette::TURTLE_OUTLINE);

        canvas.fill_oval(Rect::new(x - 2, mid - 4, 2, 2), palette::BLACK);
        canvas.fill_oval(Rect::new(x - 2, mid, 2, 2), palette::BLACK);
    }
}

/// Frog scaled into `bounds`: limbs first, then body, then eyes
pub fn draw_frog<C: Canvas + ?Sized>(bounds: &Rect, canvas: &mut C) {
    let (x, y, w, h) = (bounds.left(), bounds.top(), bounds.width, bounds.height);

    let limbs = [
        // arms
        Rect::new(x + 5, y + 10, 10, 4),
        Rect::new(x, y + 6, 4, 4),
        Rect::new(x + w - 15, y + 10, 10, 4),
        Rect::new(x + w - 4, y + 6, 4, 4),
        // legs
        Rect::new(x + 5, y + h - 10, 10, 4),
        Rect::new(x + 5, y + h - 10, 4, 9),
        Rect::new(x + w - 17, y + h - 10, 10, 4),
        Rect::new(x + w - 7, y + h - 10, 4, 9),
    ];
    for limb in limbs {
        canvas.fill_rect(limb, palette::FROG_SKIN);
        canvas.stroke_rect(limb, palette::FROG_OUTLINE);
    }

    let body = Rect::new(x + w / 4 + 1, y, w / 2, h);
    canvas.fill_oval(body, palette::FROG_SKIN);
    canvas.stroke_oval(body, palette::FROG_OUTLINE);

    canvas.fill_oval(Rect::new(x + w / 2 - 6, y + h / 2 - 10, 5, 5), palette::BLACK);
    canvas.fill_oval(Rect::new(x + w / 2 + 2, y + h / 2 - 10, 5, 5), palette::BLACK);
}

/// Remaining lives as frog icons on the left, score right-aligned
pub fn draw_status<C: Canvas + ?Sized>(player: &Player, zones: &ZoneLayout, layout: &LayoutConfig, canvas: &mut C) {
    let segment = layout.segment();
    let status = zones.status;

    for i in 0..player.lives() as i32 {
        let icon = Rect::new(status.left() + i * segment, status.top(), segment, segment);
        draw_frog(&icon, canvas);
    }

    let score = format!("{} :Score", player.score());
    let width = canvas.text_width(&score, FONT_SIZE);
    let origin = Vector2i::new(layout.panel_width() - width - 15, status.top() + 30);
    canvas.text(origin, &score, FONT_SIZE, palette::WHITE);
}

/// White banner across the middle of the panel
pub fn draw_game_over<C: Canvas + ?Sized>(layout: &LayoutConfig, canvas: &mut C) {
    let (w, h) = (layout.panel_width(), layout.panel_height());
    canvas.fill_rect(Rect::new(0, h / 2 - 20, w, 40), palette::WHITE);

    let width = canvas.text_width(GAME_OVER_MESSAGE, FONT_SIZE);
    let origin = Vector2i::new(w / 2 - width / 2, h / 2 + 10);
    canvas.text(origin, GAME_OVER_MESSAGE, FONT_SIZE, palette::BLACK);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, Recorder};

    fn layout() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn test_background_marks_every_lane_line() {
        let layout = layout();
        let zones = ZoneLayout::new(&layout);
        let mut recorder = Recorder::default();
        draw_background(&zones, &layout, &mut recorder);

        let dashes = recorder
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { rect, color } if *color == palette::WHITE && rect.height == DASH_THICKNESS))
            .count();
        // Four lines between five road lanes, twenty dashes across 400px
        assert_eq!(dashes, 4 * 20);

        for (band, rect) in zones.bands() {
            assert!(recorder.commands.contains(&DrawCommand::FillRect {
                rect,
                color: band_color(band)
            }));
        }

        let arcs = recorder
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillArc { start_deg: 180, sweep_deg: 330, .. }))
            .count();
        assert_eq!(arcs, zones.pads.len());
    }

    #[test]
    fn test_car_and_truck_shapes() {
        let layout = layout();
        let mut car = MovingEntity::new(EntityKind::Hazard, Direction::Right, 7, 0, 2, &layout);
        car.palette_index = 2;
        let mut recorder = Recorder::default();
        draw_obstacle(&car, &layout, &mut recorder);
        assert_eq!(
            recorder.commands[0],
            DrawCommand::FillRect {
                rect: car.rect,
                color: palette::HAZARD[2]
            }
        );
        assert!(!recorder.commands.iter().any(|c| matches!(c, DrawCommand::Line { .. })));

        let truck = MovingEntity::new(EntityKind::Hazard, Direction::Left, 8, 0, 3, &layout);
        let mut recorder = Recorder::default();
        draw_obstacle(&truck, &layout, &mut recorder);
        let wheels = recorder
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color == palette::WHEEL))
            .count();
        assert_eq!(wheels, 4);
        assert!(recorder.commands.iter().any(|c| matches!(c, DrawCommand::Line { .. })));
    }

    #[test]
    fn test_turtle_shell_per_unit() {
        let layout = layout();
        let turtles = MovingEntity::new(EntityKind::CarrierB, Direction::Left, 2, 100, 3, &layout);
        let mut recorder = Recorder::default();
        draw_obstacle(&turtles, &layout, &mut recorder);
        let shells = recorder
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeOval { bounds, .. } if bounds.width == layout.segment() - 4))
            .count();
        assert_eq!(shells, 3);
    }

    #[test]
    fn test_log_caps_follow_direction() {
        let layout = layout();
        let log = MovingEntity::new(EntityKind::CarrierA, Direction::Right, 1, 0, 4, &layout);
        let mut recorder = Recorder::default();
        draw_obstacle(&log, &layout, &mut recorder);
        let caps: Vec<Color> = recorder
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillOval { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(caps, vec![palette::LOG, palette::LOG_END]);
    }

    #[test]
    fn test_hazard_color_wraps() {
        assert_eq!(hazard_color(palette::HAZARD.len()), palette::HAZARD[0]);
    }

    #[test]
    fn test_score_is_right_aligned() {
        let layout = layout();
        let zones = ZoneLayout::new(&layout);
        let player = Player::new();
        let mut recorder = Recorder::default();
        draw_status(&player, &zones, &layout, &mut recorder);

        let (origin, text) = recorder
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text { baseline, text, .. } => Some((*baseline, text.clone())),
                _ => None,
            })
            .unwrap();
        assert_eq!(text, "0 :Score");
        let width = recorder.text_width(&text, FONT_SIZE);
        assert_eq!(origin.x + width + 15, layout.panel_width());
        assert_eq!(origin.y, zones.status.top() + 30);
    }
}
