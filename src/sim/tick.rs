//! Fixed timestep simulation tick
//!
//! Order within a tick: player pre-update, every obstacle in list order,
//! player post-update. Rendering happens after and only reads.

use rand::Rng;

use super::entity::{Direction, EntityKind, MovingEntity};
use super::layout::LayoutConfig;
use super::state::GameState;

use Direction::{Left, Right};
use EntityKind::{CarrierA, CarrierB, Hazard};

/// One obstacle of the fixed level layout
struct LaneSlot {
    kind: EntityKind,
    direction: Direction,
    row: i32,
    /// Multiples of the lane spacing (half the columns plus one)
    spacings: i32,
    /// Extra whole segments
    segments: i32,
}

const fn slot(kind: EntityKind, direction: Direction, row: i32, spacings: i32, segments: i32) -> LaneSlot {
    LaneSlot {
        kind,
        direction,
        row,
        spacings,
        segments,
    }
}

/// Two obstacles per lane, staggered so lanes do not move in lockstep
const LANE_RECIPE: [LaneSlot; 20] = [
    // Logs
    slot(CarrierA, Right, 1, 0, 0),
    slot(CarrierA, Right, 1, -1, 0),
    slot(CarrierA, Right, 3, 0, -1),
    slot(CarrierA, Right, 3, -1, -1),
    slot(CarrierA, Right, 5, 0, 0),
    slot(CarrierA, Right, 5, -1, 0),
    // Cars and trucks
    slot(Hazard, Right, 7, 0, 0),
    slot(Hazard, Right, 7, -1, 0),
    slot(Hazard, Right, 9, 0, -1),
    slot(Hazard, Right, 9, -1, -1),
    slot(Hazard, Right, 11, 0, 0),
    slot(Hazard, Right, 11, -1, 0),
    slot(Hazard, Left, 8, 0, 0),
    slot(Hazard, Left, 8, 1, 0),
    slot(Hazard, Left, 10, 0, 1),
    slot(Hazard, Left, 10, 1, 1),
    // Turtles
    slot(CarrierB, Left, 2, 0, 0),
    slot(CarrierB, Left, 2, 1, 0),
    slot(CarrierB, Left, 4, 0, 1),
    slot(CarrierB, Left, 4, 1, 1),
];

/// Build the full obstacle set for a new game
pub fn populate_obstacles<R: Rng + ?Sized>(layout: &LayoutConfig, rng: &mut R) -> Vec<MovingEntity> {
    let s = layout.segment();
    let spacing = layout.columns() / 2 + 1;
    LANE_RECIPE
        .iter()
        .map(|slot| {
            let offset_x = (slot.spacings * spacing + slot.segments) * s;
            MovingEntity::spawn(slot.kind, slot.direction, slot.row, offset_x, layout, rng)
        })
        .collect()
}

/// Advance the game state by one fixed timestep.
///
/// A zero `dt_ms` or an ended game leaves the state untouched.
pub fn tick(state: &mut GameState, dt_ms: u32) {
    if dt_ms == 0 || state.is_game_ended() {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;

    let GameState {
        rng,
        layout,
        zones,
        obstacles,
        player,
        events,
        ..
    } = state;

    player.pre_update(obstacles, zones, layout, events);

    for (index, obstacle) in obstacles.iter_mut().enumerate() {
        obstacle.update(dt_ms, layout);
        if obstacle.is_expired() {
            obstacle.reset(layout, rng);
            log::trace!("Obstacle {} respawned with length {}", index, obstacle.units);
        }
    }

    player.post_update(obstacles, zones, layout, events);
}
