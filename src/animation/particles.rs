//! Particle entities and their bounded pool
//!
//! Particles are spawned in bursts, fall under gravity, drag a short
//! trail behind them and die when their life runs out. The pool is
//! capped; excess spawn requests are dropped, not queued.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::Rng;

/// Global cap on live particles
pub const MAX_PARTICLES: usize = 200;

/// Trail samples kept per particle, oldest dropped first
pub const TRAIL_LENGTH: usize = 10;

/// Constant downward acceleration per tick
const GRAVITY: f32 = 0.1;

/// Burst velocity range per axis (units/tick)
const BURST_SPEED: f32 = 5.0;

/// Lifespan range in ticks
const MIN_LIFETIME: f32 = 60.0;
const MAX_LIFETIME: f32 = 120.0;

/// Rendered size range
const MIN_SIZE: f32 = 5.0;
const MAX_SIZE: f32 = 15.0;

/// One ephemeral visual entity, owned by the pool
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Remaining life in [0, 1]
    pub life: f32,
    /// Lifespan in ticks; life decays by 1/max_life per tick
    pub max_life: f32,
    pub size: f32,
    pub color: [u8; 3],
    /// Recent positions, most recent last
    pub trail: VecDeque<(f32, f32)>,
}

/// Bounded particle pool
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(MAX_PARTICLES),
        }
    }

    /// Spawn up to `count` particles at a point with randomized velocity,
    /// lifespan and size. Requests beyond the cap are silently dropped.
    pub fn spawn_burst(&mut self, x: f32, y: f32, color: [u8; 3], count: usize, rng: &mut SmallRng) {
        for _ in 0..count {
            if self.particles.len() >= MAX_PARTICLES {
                break;
            }
            self.particles.push(Particle {
                x,
                y,
                vx: rng.gen_range(-BURST_SPEED..BURST_SPEED),
                vy: rng.gen_range(-BURST_SPEED..BURST_SPEED),
                life: 1.0,
                max_life: rng.gen_range(MIN_LIFETIME..MAX_LIFETIME),
                size: rng.gen_range(MIN_SIZE..MAX_SIZE),
                color,
                trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
            });
        }
    }

    /// Advance every particle one tick and swap-remove the dead ones
    pub fn advance(&mut self) {
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY;

            p.trail.push_back((p.x, p.y));
            if p.trail.len() > TRAIL_LENGTH {
                p.trail.pop_front();
            }

            p.life -= 1.0 / p.max_life;
            if p.life <= 0.0 {
                self.particles.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn burst_respects_the_pool_cap() {
        let mut system = ParticleSystem::new();
        let mut rng = rng();
        system.spawn_burst(10.0, 10.0, [255, 0, 0], 500, &mut rng);
        assert_eq!(system.len(), MAX_PARTICLES);

        // Further requests are dropped outright
        system.spawn_burst(10.0, 10.0, [255, 0, 0], 10, &mut rng);
        assert_eq!(system.len(), MAX_PARTICLES);
    }

    #[test]
    fn spawned_values_stay_in_their_ranges() {
        let mut system = ParticleSystem::new();
        let mut rng = rng();
        system.spawn_burst(50.0, 60.0, [1, 2, 3], 50, &mut rng);
        for p in system.iter() {
            assert!(p.vx.abs() <= BURST_SPEED && p.vy.abs() <= BURST_SPEED);
            assert!(p.max_life >= MIN_LIFETIME && p.max_life < MAX_LIFETIME);
            assert!(p.size >= MIN_SIZE && p.size < MAX_SIZE);
            assert_eq!(p.life, 1.0);
            assert_eq!(p.color, [1, 2, 3]);
        }
    }

    #[test]
    fn gravity_pulls_velocity_down() {
        let mut system = ParticleSystem::new();
        let mut rng = rng();
        system.spawn_burst(0.0, 0.0, [0, 0, 0], 1, &mut rng);
        let vy_before = system.iter().next().unwrap().vy;
        system.advance();
        let vy_after = system.iter().next().unwrap().vy;
        assert!((vy_after - vy_before - GRAVITY).abs() < 1e-6);
    }

    #[test]
    fn trail_is_bounded_and_most_recent_last() {
        let mut system = ParticleSystem::new();
        let mut rng = rng();
        system.spawn_burst(0.0, 0.0, [0, 0, 0], 1, &mut rng);
        for _ in 0..25 {
            system.advance();
        }
        let p = system.iter().next().unwrap();
        assert_eq!(p.trail.len(), TRAIL_LENGTH);
        assert_eq!(*p.trail.back().unwrap(), (p.x, p.y));
    }

    #[test]
    fn particle_dies_within_its_lifespan() {
        let mut system = ParticleSystem::new();
        let mut rng = rng();
        system.spawn_burst(0.0, 0.0, [0, 0, 0], 1, &mut rng);
        let max_life = system.iter().next().unwrap().max_life;

        // Life reaches <= 0 within max_life ticks (plus float slack) and
        // the same advance() call removes it
        for _ in 0..(max_life.ceil() as usize + 2) {
            system.advance();
        }
        assert!(system.is_empty());
    }
}
