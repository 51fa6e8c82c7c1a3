//! Moving obstacles: hazards and the carriers a frog can ride
//!
//! Every obstacle shares one stepped-motion contract. The three kinds only
//! differ in the numbers held by their [`KindSpec`].

use rand::Rng;

use super::layout::LayoutConfig;
use super::rect::Rect;
use super::timer::StepTimer;
use crate::{LEFT, RIGHT, Vector2i};

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Fast car or truck on the road, lethal on contact
    Hazard,
    /// Slow long log in the water, safe to ride
    CarrierA,
    /// Slow group of turtles in the water, safe to ride
    CarrierB,
}

/// How far an obstacle moves per step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDistance {
    Pixels(i32),
    /// One grid segment
    Segment,
}

/// Per-kind tuning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSpec {
    pub step: StepDistance,
    pub step_interval_ms: u32,
    /// Inclusive length bounds, in grid units
    pub min_units: i32,
    pub max_units: i32,
    /// How many units left of the screen a right-moving obstacle respawns
    pub spawn_offset_units: i32,
    pub safe: bool,
    /// Number of colour slots the renderer picks from
    pub palette_len: usize,
}

/// Number of car colours
pub const HAZARD_PALETTE_LEN: usize = 6;

const HAZARD: KindSpec = KindSpec {
    step: StepDistance::Pixels(3),
    step_interval_ms: 40,
    min_units: 2,
    max_units: 3,
    spawn_offset_units: 3,
    safe: false,
    palette_len: HAZARD_PALETTE_LEN,
};

const CARRIER_A: KindSpec = KindSpec {
    step: StepDistance::Segment,
    step_interval_ms: 1200,
    min_units: 1,
    max_units: 4,
    spawn_offset_units: 5,
    safe: true,
    palette_len: 1,
};

const CARRIER_B: KindSpec = KindSpec {
    step: StepDistance::Segment,
    step_interval_ms: 1000,
    min_units: 1,
    max_units: 3,
    spawn_offset_units: 3,
    safe: true,
    palette_len: 1,
};

impl EntityKind {
    pub const fn spec(self) -> &'static KindSpec {
        match self {
            EntityKind::Hazard => &HAZARD,
            EntityKind::CarrierA => &CARRIER_A,
            EntityKind::CarrierB => &CARRIER_B,
        }
    }

    pub fn step_distance(self, layout: &LayoutConfig) -> i32 {
        match self.spec().step {
            StepDistance::Pixels(px) => px,
            StepDistance::Segment => layout.segment(),
        }
    }

    fn random_units<R: Rng + ?Sized>(self, rng: &mut R) -> i32 {
        let spec = self.spec();
        rng.random_range(spec.min_units..=spec.max_units)
    }

    fn random_palette<R: Rng + ?Sized>(self, rng: &mut R) -> usize {
        match self.spec().palette_len {
            0 | 1 => 0,
            n => rng.random_range(0..n),
        }
    }

    /// Placement used by the level recipe. Hazards are pushed away from the
    /// side they travel toward, carriers are always pushed left by their length.
    fn initial_x(self, direction: Direction, offset_x: i32, units: i32, layout: &LayoutConfig) -> i32 {
        let length = units * layout.segment();
        match (self, direction) {
            (EntityKind::Hazard, Direction::Left) => offset_x + length,
            (EntityKind::Hazard, Direction::Right) => offset_x - length,
            _ => offset_x - length,
        }
    }

    /// Off-screen x an expired obstacle is moved back to
    fn respawn_x(self, direction: Direction, layout: &LayoutConfig) -> i32 {
        let s = layout.segment();
        match direction {
            Direction::Right => -self.spec().spawn_offset_units * s,
            Direction::Left => (layout.columns() + 1) * s,
        }
    }
}

/// Horizontal travel direction, fixed for an obstacle's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn vector(self) -> Vector2i {
        match self {
            Direction::Left => LEFT,
            Direction::Right => RIGHT,
        }
    }
}

/// An obstacle moving along one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovingEntity {
    pub kind: EntityKind,
    pub rect: Rect,
    pub direction: Direction,
    /// Pixels moved each time the step timer fires
    pub step_distance: i32,
    /// Length in grid units
    pub units: i32,
    /// Colour slot for the renderer
    pub palette_index: usize,
    step_timer: StepTimer,
    expired: bool,
}

impl MovingEntity {
    /// Place an obstacle at an exact x with a fixed length
    pub fn new(
        kind: EntityKind,
        direction: Direction,
        row: i32,
        x: i32,
        units: i32,
        layout: &LayoutConfig,
    ) -> Self {
        let s = layout.segment();
        Self {
            kind,
            rect: Rect::new(x, layout.object_y(row), units * s, layout.object_height()),
            direction,
            step_distance: kind.step_distance(layout),
            units,
            palette_index: 0,
            step_timer: StepTimer::new(kind.spec().step_interval_ms),
            expired: false,
        }
    }

    /// Place an obstacle for the level recipe with a random length and colour
    pub fn spawn<R: Rng + ?Sized>(
        kind: EntityKind,
        direction: Direction,
        row: i32,
        offset_x: i32,
        layout: &LayoutConfig,
        rng: &mut R,
    ) -> Self {
        let units = kind.random_units(rng);
        let x = kind.initial_x(direction, offset_x, units, layout);
        let mut entity = Self::new(kind, direction, row, x, units, layout);
        entity.palette_index = kind.random_palette(rng);
        entity
    }

    /// Advance the step timer and move one step when it fires
    pub fn update(&mut self, dt_ms: u32, layout: &LayoutConfig) {
        self.step_timer.tick(dt_ms);
        if !self.step_timer.triggered() {
            return;
        }
        self.step_timer.reset();
        self.rect.pos += self.direction.vector() * self.step_distance;

        let off_screen = match self.direction {
            Direction::Left => self.rect.left() < -self.rect.width,
            Direction::Right => self.rect.left() > layout.panel_width(),
        };
        if off_screen {
            self.expired = true;
        }
    }

    /// Re-roll length and colour and move back to the spawn edge
    pub fn reset<R: Rng + ?Sized>(&mut self, layout: &LayoutConfig, rng: &mut R) {
        self.expired = false;
        self.units = self.kind.random_units(rng);
        self.rect.width = self.units * layout.segment();
        self.rect.pos.x = self.kind.respawn_x(self.direction, layout);
        self.palette_index = self.kind.random_palette(rng);
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    #[inline]
    pub fn is_safe(&self) -> bool {
        self.kind.spec().safe
    }

    #[inline]
    pub fn position(&self) -> Vector2i {
        self.rect.pos
    }
}
