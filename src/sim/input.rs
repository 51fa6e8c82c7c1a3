//! Buffered player input
//!
//! Key events only flip flags. The flags are consumed by the next tick.

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Restart,
    Quit,
}

/// Pending movement requests between ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFlags {
    /// Held: applied every tick until released
    pub left: bool,
    /// Held: applied every tick until released
    pub right: bool,
    /// Edge: set on press, consumed by one tick
    pub up: bool,
}

impl InputFlags {
    /// Record a key event. Restart and quit are not movement and are ignored.
    pub fn handle(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Left => self.left = pressed,
            Key::Right => self.right = pressed,
            Key::Up if pressed => self.up = true,
            _ => {}
        }
    }

    /// Consume a pending hop
    pub fn take_up(&mut self) -> bool {
        std::mem::take(&mut self.up)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
