//! Calibration counter state machine
//!
//! Debounces the per-tick raised flags into discrete raise events and
//! tracks progress toward the completion threshold. Time is injected as
//! `now_ms` so the machine is clock-free and testable.

use super::classifier::MovementState;

/// Raises needed per side before calibration completes
pub const REQUIRED_RAISE_COUNT: u32 = 3;

/// How long one counted raise suppresses further counts (ms). The return
/// to Idle happens on this timer alone, so a hand held up across many
/// ticks is counted once.
const RAISE_COOLDOWN_MS: f64 = 1500.0;

#[derive(Clone, Copy, PartialEq)]
enum SideState {
    Idle,
    /// Counted; suppressing further counts until the deadline passes
    Raised { until_ms: f64 },
}

/// Debounced raise counter for one side
struct RaiseCounter {
    count: u32,
    state: SideState,
}

impl RaiseCounter {
    fn new() -> Self {
        Self {
            count: 0,
            state: SideState::Idle,
        }
    }

    fn tick(&mut self, raised: bool, now_ms: f64) {
        if let SideState::Raised { until_ms } = self.state {
            if now_ms >= until_ms {
                self.state = SideState::Idle;
            }
        }
        if raised && self.state == SideState::Idle {
            self.count += 1;
            self.state = SideState::Raised {
                until_ms: now_ms + RAISE_COOLDOWN_MS,
            };
        }
    }

    fn reset(&mut self) {
        self.count = 0;
        self.state = SideState::Idle;
    }
}

/// Both-side calibration progress. `is_calibrated` latches true once both
/// counts reach the threshold and clears only on explicit reset.
pub struct CalibrationTracker {
    left: RaiseCounter,
    right: RaiseCounter,
    calibrated: bool,
}

impl CalibrationTracker {
    pub fn new() -> Self {
        Self {
            left: RaiseCounter::new(),
            right: RaiseCounter::new(),
            calibrated: false,
        }
    }

    /// Feed one detection tick. Detection gaps (all-false states) produce
    /// no transition.
    pub fn update(&mut self, movement: &MovementState, now_ms: f64) {
        self.left.tick(movement.left_hand_raised, now_ms);
        self.right.tick(movement.right_hand_raised, now_ms);
        if self.left.count >= REQUIRED_RAISE_COUNT && self.right.count >= REQUIRED_RAISE_COUNT {
            self.calibrated = true;
        }
    }

    pub fn counts(&self) -> (u32, u32) {
        (self.left.count, self.right.count)
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Zero both counts, return both sides to Idle, clear the completion
    /// flag and cancel pending cooldowns
    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
        self.calibrated = false;
    }
}

impl Default for CalibrationTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raised(left: bool, right: bool) -> MovementState {
        MovementState {
            left_hand_raised: left,
            right_hand_raised: right,
            ..MovementState::default()
        }
    }

    #[test]
    fn held_raise_counts_once_within_cooldown() {
        let mut tracker = CalibrationTracker::new();
        // Ten consecutive raised ticks, 100 ms apart, all inside 1.5 s
        for tick in 0..10 {
            tracker.update(&raised(true, false), tick as f64 * 100.0);
        }
        assert_eq!(tracker.counts(), (1, 0));
    }

    #[test]
    fn raise_recounts_after_cooldown_expires() {
        let mut tracker = CalibrationTracker::new();
        tracker.update(&raised(true, false), 0.0);
        tracker.update(&raised(true, false), 1000.0);
        tracker.update(&raised(true, false), 1600.0);
        assert_eq!(tracker.counts(), (2, 0));
    }

    #[test]
    fn detection_gaps_do_not_advance_counts() {
        let mut tracker = CalibrationTracker::new();
        tracker.update(&raised(true, true), 0.0);
        for tick in 1..20 {
            tracker.update(&MovementState::default(), tick as f64 * 100.0);
        }
        assert_eq!(tracker.counts(), (1, 1));
    }

    #[test]
    fn completes_on_the_last_qualifying_side() {
        let mut tracker = CalibrationTracker::new();
        // Three left raises with >1.5 s gaps
        for i in 0..3 {
            tracker.update(&raised(true, false), i as f64 * 2000.0);
            assert!(!tracker.is_calibrated());
        }
        // Right side completes last; the third right raise flips the flag
        tracker.update(&raised(false, true), 10_000.0);
        tracker.update(&raised(false, true), 12_000.0);
        assert!(!tracker.is_calibrated());
        tracker.update(&raised(false, true), 14_000.0);
        assert!(tracker.is_calibrated());
        assert_eq!(tracker.counts(), (3, 3));
    }

    #[test]
    fn reset_clears_counts_and_completion() {
        let mut tracker = CalibrationTracker::new();
        for i in 0..3 {
            tracker.update(&raised(true, true), i as f64 * 2000.0);
        }
        assert!(tracker.is_calibrated());

        tracker.reset();
        assert_eq!(tracker.counts(), (0, 0));
        assert!(!tracker.is_calibrated());
    }

    #[test]
    fn reset_cancels_a_pending_cooldown() {
        let mut tracker = CalibrationTracker::new();
        tracker.update(&raised(true, false), 0.0);
        tracker.reset();
        // Still inside what would have been the cooldown window: counts again
        tracker.update(&raised(true, false), 100.0);
        assert_eq!(tracker.counts(), (1, 0));
    }
}
