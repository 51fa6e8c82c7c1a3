//! Session layer
//!
//! Owns the game state and the tick driver. Movement keys go to the
//! simulation; Restart and Quit are handled here.

use crate::driver::TickDriver;
use crate::renderer::{Canvas, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Key, tick};

/// What the caller should do after a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub state: GameState,
    driver: TickDriver,
    /// Events from every tick since the last drain
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        let layout = settings.layout();
        let state = match settings.seed {
            Some(seed) => GameState::new(layout, seed),
            None => GameState::from_entropy(layout),
        };
        Self {
            driver: TickDriver::new(settings.tick_interval()),
            events: state.events.clone(),
            state,
        }
    }

    /// Fixed timestep each tick advances the game by
    pub fn tick_interval_ms(&self) -> u32 {
        self.driver.interval_ms()
    }

    /// Route a key event. Restart and Quit act on key-down only.
    pub fn key(&mut self, key: Key, pressed: bool) -> Control {
        match key {
            Key::Quit if pressed => {
                log::info!("Quit requested at tick {}", self.state.time_ticks);
                return Control::Quit;
            }
            Key::Restart if pressed => {
                self.state.restart();
                self.driver.reset();
                self.events.extend_from_slice(&self.state.events);
                log::info!("Game restarted");
            }
            Key::Quit | Key::Restart => {}
            Key::Left | Key::Right | Key::Up => self.state.handle_input(key, pressed),
        }
        Control::Continue
    }

    /// Feed elapsed wall-clock time; returns how many ticks ran
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let Self { state, driver, events } = self;
        driver.advance(elapsed_ms, |dt| {
            tick(state, dt);
            events.extend_from_slice(&state.events);
        })
    }

    /// Run exactly one tick regardless of the accumulator
    pub fn step(&mut self) {
        tick(&mut self.state, self.driver.interval_ms());
        self.events.extend_from_slice(&self.state.events);
    }

    /// Take every event recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        draw_frame(&self.state, canvas);
    }

    pub fn is_game_ended(&self) -> bool {
        self.state.is_game_ended()
    }
}
