//! Play field geometry
//!
//! [`LayoutConfig`] is built once from the panel size and handed by reference
//! to everything that needs grid math. [`ZoneLayout`] partitions the field
//! into the horizontal bands the simulation reasons about.

use super::rect::Rect;
use crate::Vector2i;
use crate::consts::*;

/// Smallest row height the grid math stays meaningful at
const MIN_SEGMENT: i32 = 10;
/// Columns needed to fit the outermost landing pad
const MIN_COLUMNS: i32 = 9;

/// Row indices of the fixed level layout
pub const GOAL_ROW: i32 = 0;
pub const MEDIAN_ROW: i32 = 6;
pub const START_ROW: i32 = 12;
pub const STATUS_ROW: i32 = 13;
/// Number of rows in the water and road bands
pub const LANE_BAND_ROWS: i32 = 5;

/// Immutable grid geometry derived from the panel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    panel_width: i32,
    panel_height: i32,
    segment: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(PANEL_WIDTH, PANEL_HEIGHT)
    }
}

impl LayoutConfig {
    /// Build the layout, growing undersized panels to the smallest usable grid
    pub fn new(panel_width: i32, panel_height: i32) -> Self {
        let min_height = MIN_SEGMENT * GRID_ROWS;
        let panel_height = if panel_height < min_height {
            log::warn!("Panel height {} too small, using {}", panel_height, min_height);
            min_height
        } else {
            panel_height
        };
        let segment = panel_height / GRID_ROWS;

        let min_width = segment * MIN_COLUMNS;
        let panel_width = if panel_width < min_width {
            log::warn!("Panel width {} too small, using {}", panel_width, min_width);
            min_width
        } else {
            panel_width
        };

        Self {
            panel_width,
            panel_height,
            segment,
        }
    }

    #[inline]
    pub fn panel_width(&self) -> i32 {
        self.panel_width
    }

    #[inline]
    pub fn panel_height(&self) -> i32 {
        self.panel_height
    }

    /// Height of one grid row; also the unit length of obstacles and the frog size
    #[inline]
    pub fn segment(&self) -> i32 {
        self.segment
    }

    /// Whole grid columns across the panel
    pub fn columns(&self) -> i32 {
        self.panel_width / self.segment
    }

    pub fn row_y(&self, row: i32) -> i32 {
        row * self.segment
    }

    /// Obstacles are slightly shorter than a row and centered in it
    pub fn object_height(&self) -> i32 {
        self.segment * 4 / 5
    }

    pub fn object_y(&self, row: i32) -> i32 {
        self.row_y(row) + (self.segment - self.object_height()) / 2
    }

    /// Where every new frog appears: bottom-center of the start band
    pub fn frog_start(&self) -> Vector2i {
        Vector2i::new((self.columns() / 2) * self.segment, self.row_y(START_ROW))
    }
}

/// Named horizontal bands of the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Row 0 with the landing pads
    Goal,
    /// Rows 1-5, deadly unless riding a carrier
    Water,
    /// Row 6, always safe
    Median,
    /// Rows 7-11, crossed by hazards
    Road,
    /// Row 12, where frogs spawn
    Start,
    /// Everything below, lives and score
    Status,
}

/// Static partition of the play field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneLayout {
    pub goal: Rect,
    pub water: Rect,
    pub median: Rect,
    pub road: Rect,
    pub start: Rect,
    pub status: Rect,
    /// Landing pads inside the goal band, left to right
    pub pads: Vec<Rect>,
}

impl ZoneLayout {
    pub fn new(layout: &LayoutConfig) -> Self {
        let w = layout.panel_width();
        let s = layout.segment();
        let band = |row: i32, rows: i32| Rect::new(0, layout.row_y(row), w, rows * s);

        let goal = band(GOAL_ROW, 1);
        // One pad every other column, starting at column 2
        let pads = (2..9)
            .step_by(2)
            .map(|column| Rect::new(goal.left() + column * s, goal.top(), s, s))
            .collect();

        let status_y = layout.row_y(STATUS_ROW);
        Self {
            goal,
            water: band(GOAL_ROW + 1, LANE_BAND_ROWS),
            median: band(MEDIAN_ROW, 1),
            road: band(MEDIAN_ROW + 1, LANE_BAND_ROWS),
            start: band(START_ROW, 1),
            status: Rect::new(0, status_y, w, layout.panel_height() - status_y),
            pads,
        }
    }

    /// All bands, top to bottom
    pub fn bands(&self) -> [(Band, Rect); 6] {
        [
            (Band::Goal, self.goal),
            (Band::Water, self.water),
            (Band::Median, self.median),
            (Band::Road, self.road),
            (Band::Start, self.start),
            (Band::Status, self.status),
        ]
    }

    /// Whether a frog top edge at `y` counts as being in the water.
    /// The lower bound stops just short of the band edge.
    pub fn in_water(&self, y: i32) -> bool {
        y >= self.water.top() && y <= self.water.bottom() - WATER_EDGE_MARGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.segment(), 42);
        assert_eq!(layout.columns(), 9);
        assert_eq!(layout.object_height(), 33);
        assert_eq!(layout.object_y(1), 46);
        assert_eq!(layout.frog_start(), Vector2i::new(168, 504));
    }

    #[test]
    fn test_bands_tile_the_panel() {
        let layout = LayoutConfig::default();
        let zones = ZoneLayout::new(&layout);
        let bands = zones.bands();

        assert_eq!(bands[0].1.top(), 0);
        for pair in bands.windows(2) {
            assert_eq!(pair[0].1.bottom(), pair[1].1.top(), "{:?} / {:?}", pair[0].0, pair[1].0);
            assert!(!pair[0].1.intersects(&pair[1].1));
        }
        assert_eq!(bands[5].1.bottom(), layout.panel_height());
        for (_, rect) in bands {
            assert_eq!((rect.left(), rect.width), (0, layout.panel_width()));
            assert!(rect.height > 0);
        }
    }

    #[test]
    fn test_pads() {
        let zones = ZoneLayout::new(&LayoutConfig::default());
        let xs: Vec<i32> = zones.pads.iter().map(|p| p.left()).collect();
        assert_eq!(xs, vec![84, 168, 252, 336]);
        assert!(zones.pads.iter().all(|p| zones.goal.contains(p)));
    }

    #[test]
    fn test_water_range() {
        let zones = ZoneLayout::new(&LayoutConfig::default());
        assert!(!zones.in_water(0));
        assert!(zones.in_water(42));
        assert!(zones.in_water(210));
        assert!(zones.in_water(247));
        assert!(!zones.in_water(248));
        assert!(!zones.in_water(252));
    }

    #[test]
    fn test_undersized_panel_is_grown() {
        let layout = LayoutConfig::new(50, 70);
        assert_eq!(layout.segment(), MIN_SEGMENT);
        assert_eq!(layout.panel_height(), MIN_SEGMENT * GRID_ROWS);
        assert_eq!(layout.panel_width(), MIN_SEGMENT * MIN_COLUMNS);
    }
}
