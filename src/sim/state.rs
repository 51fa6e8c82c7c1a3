//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::MovingEntity;
use super::input::Key;
use super::layout::{LayoutConfig, ZoneLayout};
use super::player::Player;
use super::tick::populate_obstacles;
use crate::Vector2i;

/// How a frog was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    /// Hit by an unsafe obstacle
    Hazard,
    /// In the water with nothing to stand on
    Drowned,
    /// Reached the goal row away from any pad
    MissedPad,
    /// Reached a pad another frog already holds
    PadOccupied,
}

/// Things that happened during a tick, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    FrogSpawned { lives: u32 },
    Attached { carrier: usize },
    Detached,
    FrogDied { cause: DeathCause, at: Vector2i },
    FrogLanded { pad: usize, score: u32 },
    GameOver { score: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub layout: LayoutConfig,
    pub zones: ZoneLayout,
    /// Obstacles in update order. Only the simulation mutates them.
    pub(crate) obstacles: Vec<MovingEntity>,
    pub player: Player,
    /// Events from the most recent tick (or restart)
    pub events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game on the given layout with the given seed
    pub fn new(layout: LayoutConfig, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            zones: ZoneLayout::new(&layout),
            layout,
            obstacles: Vec::new(),
            player: Player::new(),
            events: Vec::new(),
            time_ticks: 0,
        };
        state.restart();
        log::info!("Game initialized with seed: {}", seed);
        state
    }

    /// Default layout with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(LayoutConfig::default(), seed)
    }

    /// Seeded from system entropy
    pub fn from_entropy(layout: LayoutConfig) -> Self {
        Self::new(layout, rand::random())
    }

    /// Back to lives/score defaults and a freshly built set of obstacles.
    /// Continues the RNG stream, so a restart rolls new lengths.
    pub fn restart(&mut self) {
        self.events.clear();
        self.player.reset(&self.layout, &mut self.events);
        self.obstacles = populate_obstacles(&self.layout, &mut self.rng);
        log::debug!("Restarted with {} obstacles", self.obstacles.len());
    }

    /// Read-only view for rendering and queries
    pub fn obstacles(&self) -> &[MovingEntity] {
        &self.obstacles
    }

    /// Buffer a movement key for the next tick
    pub fn handle_input(&mut self, key: Key, pressed: bool) {
        self.player.handle_input(key, pressed);
    }

    pub fn is_game_ended(&self) -> bool {
        self.player.is_game_ended()
    }
}
