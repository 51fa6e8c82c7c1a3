//! Demo controller
//!
//! Reads the game state and decides which keys to hold for the next tick.
//! It never touches the simulation directly; the caller turns the plan into
//! key events like any other input source.

use crate::Vector2i;
use crate::consts::{ATTACH_OVERLAP_PERCENT, PAD_OVERLAP_PERCENT};
use crate::sim::{GameState, Key, Rect, find_collided_obstacle, find_collided_pad, overlaps_any};

/// Keys to hold during the next tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plan {
    pub up: bool,
    pub left: bool,
    pub right: bool,
}

impl Plan {
    /// Key events that apply this plan. Up is a press and release.
    pub fn key_events(&self) -> Vec<(Key, bool)> {
        let mut events = vec![(Key::Left, self.left), (Key::Right, self.right)];
        if self.up {
            events.push((Key::Up, true));
            events.push((Key::Up, false));
        }
        events
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn plan(&self, state: &GameState) -> Plan {
        let Some(frog) = state.player.frog() else {
            return Plan::default();
        };
        if state.is_game_ended() {
            return Plan::default();
        }

        let zones = &state.zones;
        let segment = state.layout.segment();
        let here = frog.rect;
        let next = here.translated(Vector2i::new(0, -segment));

        if next.top() == zones.goal.top() {
            return self.approach_pad(state, &here, &next);
        }

        let obstacles = state.obstacles();
        let hop = if zones.in_water(next.top()) {
            // Only hop onto something that will carry us
            find_collided_obstacle(&next, obstacles, ATTACH_OVERLAP_PERCENT).is_some_and(|i| obstacles[i].is_safe())
        } else {
            // Leave a segment of room on either side for traffic
            let lookahead = Rect::new(next.left() - segment, next.top(), next.width + 2 * segment, next.height);
            !obstacles.iter().any(|o| !o.is_safe() && o.rect.intersects(&lookahead))
        };

        let mut plan = Plan {
            up: hop,
            ..Default::default()
        };
        // Riding toward an edge: walk back toward the middle
        if !hop && zones.in_water(here.top()) {
            if here.left() < segment {
                plan.right = true;
            } else if here.right() > state.layout.panel_width() - segment {
                plan.left = true;
            }
        }
        plan
    }

    /// Line up under the nearest free pad, then hop
    fn approach_pad(&self, state: &GameState, here: &Rect, next: &Rect) -> Plan {
        let landed = state.player.landed();
        let free = |pad: &Rect| !overlaps_any(pad, landed.iter().map(|f| &f.rect));

        if let Some(index) = find_collided_pad(&state.zones, next, PAD_OVERLAP_PERCENT)
            && free(&state.zones.pads[index])
        {
            return Plan {
                up: true,
                ..Default::default()
            };
        }

        let x = here.center().x;
        let Some(target) = state
            .zones
            .pads
            .iter()
            .filter(|pad| free(*pad))
            .min_by_key(|pad| (pad.center().x - x).abs())
        else {
            return Plan::default();
        };

        Plan {
            up: false,
            left: target.center().x < x,
            right: target.center().x > x,
        }
    }
}
