//! Per-effect trigger rate limiting
//!
//! A sustained raised-hand state arrives on every detection tick; without
//! a cooldown it would flood the entity pools. Each effect kind keeps the
//! timestamp of its last accepted trigger and rejects requests arriving
//! inside the cooldown window.

/// Minimum gap between accepted triggers of the same effect kind (ms)
const EFFECT_COOLDOWN_MS: f64 = 150.0;

/// One slot per gesture-driven effect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    LeftHand,
    RightHand,
    BothHands,
    BodyMovement,
}

const EFFECT_KIND_COUNT: usize = 4;

impl EffectKind {
    fn index(self) -> usize {
        match self {
            EffectKind::LeftHand => 0,
            EffectKind::RightHand => 1,
            EffectKind::BothHands => 2,
            EffectKind::BodyMovement => 3,
        }
    }
}

/// Last-accepted timestamps, one per effect kind
pub struct EffectCooldowns {
    last_triggered_ms: [Option<f64>; EFFECT_KIND_COUNT],
}

impl EffectCooldowns {
    pub fn new() -> Self {
        Self {
            last_triggered_ms: [None; EFFECT_KIND_COUNT],
        }
    }

    /// Accept or reject a trigger request. Accepting records `now_ms` as
    /// the start of a new cooldown window for this kind only.
    pub fn try_trigger(&mut self, kind: EffectKind, now_ms: f64) -> bool {
        let slot = &mut self.last_triggered_ms[kind.index()];
        match *slot {
            Some(last) if now_ms - last < EFFECT_COOLDOWN_MS => false,
            _ => {
                *slot = Some(now_ms);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_triggered_ms = [None; EFFECT_KIND_COUNT];
    }
}

impl Default for EffectCooldowns {
    fn default() -> Self {
        Self::new()
    }
}
