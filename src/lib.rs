//! Frogger - a fixed-tick river-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, lives/score state machine)
//! - `renderer`: Draw-call interface and the per-entity draw routines
//! - `session`: Key routing, restart/quit handling
//! - `driver`: Fixed timestep accumulator
//! - `autopilot`: Demo controller that plays the game
//! - `settings`: Runtime configuration

pub mod autopilot;
pub mod driver;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Control, Session};
pub use settings::Settings;

use glam::IVec2;

/// Integer 2D vector used for all positions and translations
pub type Vector2i = IVec2;

/// Unit vector pointing left
pub const LEFT: Vector2i = IVec2::NEG_X;
/// Unit vector pointing right
pub const RIGHT: Vector2i = IVec2::X;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 20;
    /// Maximum ticks run per driver call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest real-time gap the driver accepts in one call
    pub const MAX_FRAME_MS: u32 = 100;

    /// Default play field dimensions
    pub const PANEL_WIDTH: i32 = 400;
    pub const PANEL_HEIGHT: i32 = 600;
    /// The panel height is split into this many equal rows
    pub const GRID_ROWS: i32 = 14;

    /// Lives at the start of a game (the first spawn spends one)
    pub const START_LIVES: u32 = 4;
    /// Score awarded for landing on a free pad
    pub const LANDING_SCORE: u32 = 100;
    /// Horizontal pixels moved per tick while left/right is held
    pub const MOVE_RATE: i32 = 5;

    /// Minimum overlap (percent of frog area) for a lethal or carrying contact
    pub const CONTACT_OVERLAP_PERCENT: f32 = 3.0;
    /// Minimum overlap (percent of frog area) to ride a carrier
    pub const ATTACH_OVERLAP_PERCENT: f32 = 15.0;
    /// Minimum overlap (percent of pad area) to count as landed
    pub const PAD_OVERLAP_PERCENT: f32 = 40.0;
    /// The bottom of the water band is this many pixels short of its edge
    pub const WATER_EDGE_MARGIN: i32 = 5;
}
