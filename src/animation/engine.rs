//! Animation engine - pools, effect triggering and theme state
//!
//! Owns every visual entity and converts classified movement into bursts
//! and ripples, rate-limited per effect kind. The renderer only reads
//! from here.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::bridge::pose::{Keypoint, PoseFrame, LEFT_WRIST, NOSE, RIGHT_WRIST};
use crate::gesture::{EffectCooldowns, EffectKind, MovementState};

use super::cursor::WristCursor;
use super::mapper::map_to_surface;
use super::particles::ParticleSystem;
use super::ripples::RippleSystem;
use super::theme::Theme;

/// Particles per single-hand burst
const HAND_BURST_COUNT: usize = 10;

/// Particles per wrist when both hands are up
const BOTH_HANDS_BURST_COUNT: usize = 15;

/// Body-movement burst size scales up to this many particles
const BODY_BURST_MAX: f32 = 8.0;

/// Body movement below this magnitude triggers nothing
const BODY_MOVEMENT_TRIGGER: f32 = 0.3;

/// Wrist confidence needed to place an effect at it
const EFFECT_SCORE_THRESHOLD: f32 = 0.2;

/// Wrist confidence needed to count as present for the cursor overlay
const CURSOR_SCORE_THRESHOLD: f32 = 0.25;

/// Nose confidence needed to anchor a body-movement burst
const NOSE_SCORE_THRESHOLD: f32 = 0.3;

/// Alpha baked into spawned ripple colors
const RIPPLE_ALPHA: u8 = 100;

/// Palette slots, one per effect
const SLOT_LEFT: usize = 0;
const SLOT_RIGHT: usize = 1;
const SLOT_BOTH: usize = 2;
const SLOT_BODY: usize = 3;

pub struct AnimationEngine {
    theme: Theme,
    particles: ParticleSystem,
    ripples: RippleSystem,
    cursors: [WristCursor; 2],
    cursor_targets: [Option<(f32, f32)>; 2],
    cursors_visible: bool,
    cooldowns: EffectCooldowns,
    surface_width: f32,
    surface_height: f32,
    rng: SmallRng,
}

impl AnimationEngine {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Deterministic engine for tests
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            theme: Theme::Particles,
            particles: ParticleSystem::new(),
            ripples: RippleSystem::new(),
            cursors: [WristCursor::default(); 2],
            cursor_targets: [None; 2],
            cursors_visible: true,
            cooldowns: EffectCooldowns::new(),
            // Zero until the render surface reports its size; effect
            // requests are no-ops until then
            surface_width: 0.0,
            surface_height: 0.0,
            rng,
        }
    }

    // ------------------------------------------------------------------
    // Control surface
    // ------------------------------------------------------------------

    /// Record the render-surface size. Existing entities are preserved;
    /// only future mappings change.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        self.surface_width = width;
        self.surface_height = height;
    }

    /// Switch draw strategy, clearing live entities so themes never bleed
    /// into each other
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.particles.clear();
            self.ripples.clear();
        }
    }

    pub fn set_cursors_visible(&mut self, visible: bool) {
        self.cursors_visible = visible;
    }

    // ------------------------------------------------------------------
    // Detection tick
    // ------------------------------------------------------------------

    /// Refresh per-hand cursor targets from the raw wrist keypoints.
    /// Runs every detection tick, paused or not.
    pub fn update_cursor_targets(&mut self, frame: &PoseFrame) {
        if !self.surface_ready() {
            return;
        }
        self.cursor_targets = [
            self.mapped_keypoint(frame, LEFT_WRIST, CURSOR_SCORE_THRESHOLD),
            self.mapped_keypoint(frame, RIGHT_WRIST, CURSOR_SCORE_THRESHOLD),
        ];
    }

    /// Convert one tick's movement state into effects. Each effect kind
    /// is rate-limited independently; requests landing inside a cooldown
    /// window are ignored.
    pub fn apply_movement(&mut self, movement: &MovementState, frame: &PoseFrame, now_ms: f64) {
        if !self.surface_ready() {
            return;
        }

        if movement.left_hand_raised {
            if let Some((x, y)) = self.mapped_keypoint(frame, LEFT_WRIST, EFFECT_SCORE_THRESHOLD) {
                if self.cooldowns.try_trigger(EffectKind::LeftHand, now_ms) {
                    let color = self.theme.spawn_color(SLOT_LEFT);
                    self.particles
                        .spawn_burst(x, y, color, HAND_BURST_COUNT, &mut self.rng);
                }
            }
        }

        if movement.right_hand_raised {
            if let Some((x, y)) = self.mapped_keypoint(frame, RIGHT_WRIST, EFFECT_SCORE_THRESHOLD) {
                if self.cooldowns.try_trigger(EffectKind::RightHand, now_ms) {
                    let color = self.theme.spawn_color(SLOT_RIGHT);
                    self.particles
                        .spawn_burst(x, y, color, HAND_BURST_COUNT, &mut self.rng);
                }
            }
        }

        if movement.both_hands_up {
            let left = self.mapped_keypoint(frame, LEFT_WRIST, EFFECT_SCORE_THRESHOLD);
            let right = self.mapped_keypoint(frame, RIGHT_WRIST, EFFECT_SCORE_THRESHOLD);
            if let (Some((lx, ly)), Some((rx, ry))) = (left, right) {
                if self.cooldowns.try_trigger(EffectKind::BothHands, now_ms) {
                    let [r, g, b] = self.theme.spawn_color(SLOT_BOTH);
                    self.ripples.spawn(
                        (lx + rx) / 2.0,
                        (ly + ry) / 2.0,
                        [r, g, b, RIPPLE_ALPHA],
                        &mut self.rng,
                    );
                    let left_color = self.theme.spawn_color(SLOT_LEFT);
                    let right_color = self.theme.spawn_color(SLOT_RIGHT);
                    self.particles
                        .spawn_burst(lx, ly, left_color, BOTH_HANDS_BURST_COUNT, &mut self.rng);
                    self.particles
                        .spawn_burst(rx, ry, right_color, BOTH_HANDS_BURST_COUNT, &mut self.rng);
                }
            }
        }

        if movement.body_movement > BODY_MOVEMENT_TRIGGER {
            if let Some((x, y)) = self.mapped_keypoint(frame, NOSE, NOSE_SCORE_THRESHOLD) {
                if self.cooldowns.try_trigger(EffectKind::BodyMovement, now_ms) {
                    let count = (movement.body_movement * BODY_BURST_MAX) as usize;
                    let color = self.theme.spawn_color(SLOT_BODY);
                    self.particles.spawn_burst(x, y, color, count, &mut self.rng);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Render tick
    // ------------------------------------------------------------------

    /// Advance the simulation one animation tick. Runs even while paused:
    /// the play flag gates new effects, not entities already alive.
    pub fn advance(&mut self) {
        self.particles.advance();
        self.ripples.advance();
        for (cursor, target) in self.cursors.iter_mut().zip(self.cursor_targets) {
            cursor.update(target);
        }
    }

    // ------------------------------------------------------------------
    // Read access for the renderer and status boundary
    // ------------------------------------------------------------------

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn ripples(&self) -> &RippleSystem {
        &self.ripples
    }

    pub fn cursors(&self) -> &[WristCursor; 2] {
        &self.cursors
    }

    pub fn cursors_visible(&self) -> bool {
        self.cursors_visible
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn ripple_count(&self) -> usize {
        self.ripples.len()
    }

    pub fn surface_size(&self) -> (f32, f32) {
        (self.surface_width, self.surface_height)
    }

    fn surface_ready(&self) -> bool {
        self.surface_width > 0.0 && self.surface_height > 0.0
    }

    fn mapped_keypoint(
        &self,
        frame: &PoseFrame,
        index: usize,
        score_threshold: f32,
    ) -> Option<(f32, f32)> {
        if !frame.present {
            return None;
        }
        let kp: Keypoint = frame.keypoints[index];
        if kp.score <= score_threshold {
            return None;
        }
        Some(map_to_surface(
            kp.x,
            kp.y,
            frame.video_width,
            frame.video_height,
            self.surface_width,
            self.surface_height,
        ))
    }
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self::new()
    }
}
