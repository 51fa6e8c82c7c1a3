//! Fixed-timestep driver
//!
//! Wall-clock time goes into an accumulator and comes out as whole ticks of
//! the configured interval. Long frames are clamped so a stall never turns
//! into a burst of catch-up ticks.

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct TickDriver {
    interval_ms: u32,
    accumulator_ms: u32,
}

impl TickDriver {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulator_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time carried over to the next frame
    pub fn pending_ms(&self) -> u32 {
        self.accumulator_ms
    }

    /// Add elapsed time and run `step` once per whole interval.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed_ms: u32, mut step: impl FnMut(u32)) -> u32 {
        self.accumulator_ms += elapsed_ms.min(MAX_FRAME_MS);

        let mut substeps = 0;
        while self.accumulator_ms >= self.interval_ms && substeps < MAX_SUBSTEPS {
            step(self.interval_ms);
            self.accumulator_ms -= self.interval_ms;
            substeps += 1;
        }

        // Drop whatever the substep cap left behind
        if substeps == MAX_SUBSTEPS {
            self.accumulator_ms %= self.interval_ms;
        }
        substeps
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_whole_intervals_only() {
        let mut driver = TickDriver::new(20);
        let mut ticks = Vec::new();
        assert_eq!(driver.advance(50, |dt| ticks.push(dt)), 2);
        assert_eq!(ticks, vec![20, 20]);
        assert_eq!(driver.pending_ms(), 10);

        assert_eq!(driver.advance(10, |_| {}), 1);
        assert_eq!(driver.pending_ms(), 0);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut driver = TickDriver::new(20);
        let ran = driver.advance(5_000, |_| {});
        assert_eq!(ran, MAX_FRAME_MS / 20);
        assert_eq!(driver.pending_ms(), 0);
    }

    #[test]
    fn test_substep_cap() {
        let mut driver = TickDriver::new(1);
        let ran = driver.advance(MAX_FRAME_MS, |_| {});
        assert_eq!(ran, MAX_SUBSTEPS);
        assert_eq!(driver.pending_ms(), 0);
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let driver = TickDriver::new(0);
        assert_eq!(driver.interval_ms(), 1);
    }

    proptest! {
        #[test]
        fn test_accumulator_stays_below_interval(
            interval in 1u32..50,
            frames in proptest::collection::vec(0u32..200, 1..40),
        ) {
            let mut driver = TickDriver::new(interval);
            for elapsed in frames {
                let ran = driver.advance(elapsed, |dt| assert_eq!(dt, interval));
                prop_assert!(ran <= MAX_SUBSTEPS);
                // Anything left over is less than one interval unless the cap was hit
                prop_assert!(driver.pending_ms() < interval || ran == MAX_SUBSTEPS);
            }
        }
    }
}
