//! Countdown timer gating discrete steps

/// Counts down by the fixed tick delta and latches a triggered edge once the
/// interval has elapsed. The edge stays set until [`StepTimer::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTimer {
    interval_ms: u32,
    remaining_ms: u32,
    triggered: bool,
}

impl StepTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            remaining_ms: interval_ms,
            triggered: false,
        }
    }

    /// Advance by `dt_ms`. Remaining time saturates at zero.
    pub fn tick(&mut self, dt_ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(dt_ms);
        if self.remaining_ms == 0 {
            self.triggered = true;
        }
    }

    pub fn reset(&mut self) {
        self.remaining_ms = self.interval_ms;
        self.triggered = false;
    }

    /// Change the interval; also resets
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms;
        self.reset();
    }

    #[inline]
    pub fn triggered(&self) -> bool {
        self.triggered
    }

    #[inline]
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    #[inline]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}
