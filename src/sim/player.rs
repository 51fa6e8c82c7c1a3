//! The player: active frog, lives, score and carrier attachment
//!
//! A tick runs [`Player::pre_update`] (consume input), then the obstacles step,
//! then [`Player::post_update`] (carry, collide, retire, respawn).

use super::collision::{find_collided_obstacle, find_collided_pad, overlaps_any};
use super::entity::MovingEntity;
use super::input::{InputFlags, Key};
use super::layout::{LayoutConfig, ZoneLayout};
use super::rect::Rect;
use super::state::{DeathCause, GameEvent};
use crate::consts::*;
use crate::{LEFT, RIGHT, Vector2i};

/// A frog. Has no velocity of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frog {
    pub rect: Rect,
}

impl Frog {
    /// A one-segment square frog at `pos`
    pub fn new(pos: Vector2i, layout: &LayoutConfig) -> Self {
        let s = layout.segment();
        Self {
            rect: Rect::at(pos, s, s),
        }
    }
}

/// The carrier currently moving the frog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment {
    /// Index into the obstacle list
    pub carrier: usize,
    /// Carrier position when last sampled; drift is measured from here
    pub snapshot: Vector2i,
}

/// Why the active frog is being removed this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Retirement {
    Struck,
    Drowned,
    ReachedGoal,
}

/// Lives, score and the frogs the player controls
#[derive(Debug, Clone)]
pub struct Player {
    pub(crate) lives: u32,
    pub(crate) score: u32,
    /// The frog under control, `None` between retirement and respawn or after game over
    pub(crate) frog: Option<Frog>,
    /// Frogs that made it home, kept as markers on their pads
    pub(crate) landed: Vec<Frog>,
    pub(crate) attachment: Option<Attachment>,
    pub(crate) input: InputFlags,
    pub(crate) game_ended: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A player with full lives and no frog yet
    pub fn new() -> Self {
        Self {
            lives: START_LIVES,
            score: 0,
            frog: None,
            landed: Vec::new(),
            attachment: None,
            input: InputFlags::default(),
            game_ended: false,
        }
    }

    /// Back to the initial configuration with a fresh frog on the start band
    pub fn reset(&mut self, layout: &LayoutConfig, events: &mut Vec<GameEvent>) {
        *self = Self::new();
        self.spawn_frog(layout, events);
    }

    /// Remaining lives. The active attempt has already been paid for.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frog(&self) -> Option<&Frog> {
        self.frog.as_ref()
    }

    pub fn landed(&self) -> &[Frog] {
        &self.landed
    }

    pub fn attachment(&self) -> Option<Attachment> {
        self.attachment
    }

    pub fn input(&self) -> InputFlags {
        self.input
    }

    /// Out of lives with no frog left to play
    pub fn is_game_ended(&self) -> bool {
        self.game_ended
    }

    /// Buffer a key event until the next tick
    pub fn handle_input(&mut self, key: Key, pressed: bool) {
        self.input.handle(key, pressed);
    }

    /// Consume buffered input: hop, slide, and keep the carrier attachment current
    pub(crate) fn pre_update(
        &mut self,
        obstacles: &[MovingEntity],
        zones: &ZoneLayout,
        layout: &LayoutConfig,
        events: &mut Vec<GameEvent>,
    ) {
        let in_play = self
            .frog
            .is_some_and(|frog| frog.rect.top() > zones.goal.top());
        if !in_play {
            self.input.clear();
            self.attach(None, obstacles, events);
            return;
        }

        if self.input.take_up() {
            if let Some(frog) = self.frog.as_mut() {
                frog.rect.pos.y -= layout.segment();
            }
            // Only safe carriers can be ridden
            let carrier = self
                .probe(obstacles, ATTACH_OVERLAP_PERCENT)
                .filter(|&index| obstacles[index].is_safe());
            self.attach(carrier, obstacles, events);
        }

        if self.input.left {
            self.move_within_bounds(LEFT * MOVE_RATE, layout);
        }
        if self.input.right {
            self.move_within_bounds(RIGHT * MOVE_RATE, layout);
        }

        if let Some(current) = self.attachment {
            // The frog may have slid onto another carrier or off this one
            let carrier = self.probe(obstacles, ATTACH_OVERLAP_PERCENT);
            if carrier != Some(current.carrier) {
                self.attach(carrier, obstacles, events);
            }
            if let Some(attachment) = self.attachment.as_mut() {
                attachment.snapshot = obstacles[attachment.carrier].position();
            }
        }
    }

    /// Ride the carrier, resolve collisions, then retire and respawn as needed
    pub(crate) fn post_update(
        &mut self,
        obstacles: &[MovingEntity],
        zones: &ZoneLayout,
        layout: &LayoutConfig,
        events: &mut Vec<GameEvent>,
    ) {
        if self.frog.is_none() {
            return;
        }

        if let Some(attachment) = self.attachment {
            let carrier_pos = obstacles[attachment.carrier].position();
            self.move_within_bounds(carrier_pos - attachment.snapshot, layout);
            if let Some(attachment) = self.attachment.as_mut() {
                attachment.snapshot = carrier_pos;
            }
        }

        let Some(frog) = self.frog else {
            return;
        };
        let collided = find_collided_obstacle(&frog.rect, obstacles, CONTACT_OVERLAP_PERCENT).map(|i| &obstacles[i]);
        let pad = find_collided_pad(zones, &frog.rect, PAD_OVERLAP_PERCENT);

        let retirement = match collided {
            Some(obstacle) if !obstacle.is_safe() => Some(Retirement::Struck),
            None if zones.in_water(frog.rect.top()) => Some(Retirement::Drowned),
            _ if frog.rect.top() == zones.goal.top() => Some(Retirement::ReachedGoal),
            _ => None,
        };

        if let Some(retirement) = retirement {
            self.retire(frog, retirement, pad, events);
            if self.lives > 0 {
                self.spawn_frog(layout, events);
            }
        }

        if self.lives == 0 && self.frog.is_none() && !self.game_ended {
            self.game_ended = true;
            log::info!("All frogs expended, final score {}", self.score);
            events.push(GameEvent::GameOver { score: self.score });
        }
    }

    /// Remove the active frog, either onto its pad or for good
    fn retire(&mut self, frog: Frog, retirement: Retirement, pad: Option<usize>, events: &mut Vec<GameEvent>) {
        self.frog = None;
        self.attachment = None;

        let pad_taken = overlaps_any(&frog.rect, self.landed.iter().map(|f| &f.rect));
        match pad {
            Some(pad) if !pad_taken => {
                self.score += LANDING_SCORE;
                self.landed.push(frog);
                log::info!("Frog landed on pad {}, score {}", pad, self.score);
                events.push(GameEvent::FrogLanded { pad, score: self.score });
            }
            _ => {
                let cause = match retirement {
                    Retirement::Struck => DeathCause::Hazard,
                    Retirement::Drowned => DeathCause::Drowned,
                    Retirement::ReachedGoal if pad.is_some() => DeathCause::PadOccupied,
                    Retirement::ReachedGoal => DeathCause::MissedPad,
                };
                log::debug!("Frog died ({:?}) at {:?}", cause, frog.rect.pos);
                events.push(GameEvent::FrogDied { cause, at: frog.rect.pos });
            }
        }
    }

    /// Put a new frog on the start band. The life is spent here, not on death.
    fn spawn_frog(&mut self, layout: &LayoutConfig, events: &mut Vec<GameEvent>) {
        self.lives = self.lives.saturating_sub(1);
        self.frog = Some(Frog::new(layout.frog_start(), layout));
        log::debug!("Frog spawned, {} lives left", self.lives);
        events.push(GameEvent::FrogSpawned { lives: self.lives });
    }

    /// Index of the first obstacle under the frog at the given overlap
    fn probe(&self, obstacles: &[MovingEntity], min_percent: f32) -> Option<usize> {
        let frog = self.frog.as_ref()?;
        find_collided_obstacle(&frog.rect, obstacles, min_percent)
    }

    /// Replace the attachment, sampling the new carrier's position
    fn attach(&mut self, carrier: Option<usize>, obstacles: &[MovingEntity], events: &mut Vec<GameEvent>) {
        let previous = self.attachment.map(|a| a.carrier);
        self.attachment = carrier.map(|index| Attachment {
            carrier: index,
            snapshot: obstacles[index].position(),
        });
        if previous == carrier {
            return;
        }
        match carrier {
            Some(carrier) => {
                log::debug!("Frog attached to carrier {}", carrier);
                events.push(GameEvent::Attached { carrier });
            }
            None => {
                log::debug!("Frog detached");
                events.push(GameEvent::Detached);
            }
        }
    }

    /// Translate the frog, clamped so it stays on the panel
    fn move_within_bounds(&mut self, delta: Vector2i, layout: &LayoutConfig) {
        let Some(frog) = self.frog.as_mut() else {
            return;
        };
        let max_x = layout.panel_width() - frog.rect.width;
        let max_y = layout.panel_height();
        let target = frog.rect.pos + delta;
        frog.rect.pos = Vector2i::new(target.x.clamp(0, max_x), target.y.clamp(0, max_y));
    }
}
