//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (obstacle list order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod input;
pub mod layout;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{find_collided_obstacle, find_collided_pad, overlaps_any};
pub use entity::{Direction, EntityKind, KindSpec, MovingEntity};
pub use input::{InputFlags, Key};
pub use layout::{Band, LayoutConfig, ZoneLayout};
pub use player::{Attachment, Frog, Player};
pub use rect::Rect;
pub use state::{DeathCause, GameEvent, GameState};
pub use tick::{populate_obstacles, tick};
pub use timer::StepTimer;
