//! Wrist cursor overlay smoother
//!
//! One continuously-visible marker per hand that chases the mapped wrist
//! position exponentially instead of snapping every tick, and fades in
//! and out with detection presence.

/// Fraction of the remaining distance covered per tick
const SMOOTHING: f32 = 0.3;

/// Opacity gained per tick while the wrist is present
const FADE_IN_STEP: f32 = 0.1;

/// Opacity lost per tick while the wrist is absent
const FADE_OUT_STEP: f32 = 0.05;

/// Smoothed on-screen marker for one hand. Persists across ticks, unlike
/// the ephemeral particle and ripple entities.
#[derive(Clone, Copy, Default)]
pub struct WristCursor {
    pub x: f32,
    pub y: f32,
    pub target_x: f32,
    pub target_y: f32,
    /// Render opacity in [0, 1]; the cursor is drawn while this is > 0
    pub alpha: f32,
    pub visible: bool,
}

impl WristCursor {
    /// Advance one tick toward the target. `target` is the mapped wrist
    /// position when the hand is present this tick, None otherwise.
    pub fn update(&mut self, target: Option<(f32, f32)>) {
        if let Some((tx, ty)) = target {
            self.target_x = tx;
            self.target_y = ty;
            // First appearance after a gap: snap instead of flying in
            // from a stale position
            if !self.visible {
                self.x = tx;
                self.y = ty;
            }
            self.alpha = (self.alpha + FADE_IN_STEP).min(1.0);
            self.visible = true;
        } else {
            self.alpha = (self.alpha - FADE_OUT_STEP).max(0.0);
            self.visible = false;
        }

        self.x += (self.target_x - self.x) * SMOOTHING;
        self.y += (self.target_y - self.y) * SMOOTHING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_appearance_snaps_to_the_target() {
        let mut cursor = WristCursor::default();
        cursor.update(Some((200.0, 150.0)));
        assert_eq!((cursor.x, cursor.y), (200.0, 150.0));
        assert!(cursor.visible);
    }

    #[test]
    fn position_chases_the_target_exponentially() {
        let mut cursor = WristCursor::default();
        cursor.update(Some((0.0, 0.0)));
        cursor.update(Some((100.0, 0.0)));
        // One smoothing step covers 30% of the distance, never all of it
        assert!((cursor.x - 30.0).abs() < 1e-4);

        cursor.update(Some((100.0, 0.0)));
        assert!((cursor.x - 51.0).abs() < 1e-4);
        assert!(cursor.x < 100.0);
    }

    #[test]
    fn alpha_fades_in_and_clamps() {
        let mut cursor = WristCursor::default();
        for _ in 0..15 {
            cursor.update(Some((0.0, 0.0)));
        }
        assert_eq!(cursor.alpha, 1.0);
    }

    #[test]
    fn alpha_fades_out_and_clamps() {
        let mut cursor = WristCursor::default();
        for _ in 0..10 {
            cursor.update(Some((0.0, 0.0)));
        }
        for _ in 0..30 {
            cursor.update(None);
        }
        assert_eq!(cursor.alpha, 0.0);
        assert!(!cursor.visible);
    }

    #[test]
    fn fade_out_is_slower_than_fade_in() {
        let mut appearing = WristCursor::default();
        appearing.update(Some((0.0, 0.0)));

        let mut vanishing = WristCursor {
            alpha: 1.0,
            visible: true,
            ..WristCursor::default()
        };
        vanishing.update(None);

        assert!((appearing.alpha - FADE_IN_STEP).abs() < 1e-6);
        assert!((vanishing.alpha - (1.0 - FADE_OUT_STEP)).abs() < 1e-6);
    }

    #[test]
    fn keeps_chasing_while_fading_out() {
        let mut cursor = WristCursor::default();
        cursor.update(Some((0.0, 0.0)));
        cursor.update(Some((100.0, 0.0)));
        let x_before = cursor.x;
        cursor.update(None);
        assert!(cursor.x > x_before);
    }

    #[test]
    fn reappearance_after_a_gap_snaps_again() {
        let mut cursor = WristCursor::default();
        cursor.update(Some((10.0, 10.0)));
        cursor.update(None);
        cursor.update(Some((300.0, 200.0)));
        assert_eq!((cursor.x, cursor.y), (300.0, 200.0));
    }
}
