use crate::field::Bounds;
use glam::Vec2;
use rand::Rng;

/// Per-axis drift speed limit for freshly spawned particles.
pub const MAX_DRIFT: f32 = 0.25;
/// Radius range for freshly spawned particles.
pub const MIN_RADIUS: f32 = 1.0;
pub const MAX_RADIUS: f32 = 3.0;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Draw radius, fixed at spawn time.
    pub radius: f32,
}

impl Particle {
    /// Spawns a particle at a uniformly random position inside `bounds`,
    /// with per-axis velocity in `[-MAX_DRIFT, MAX_DRIFT]` and radius in
    /// `[MIN_RADIUS, MAX_RADIUS]`.
    ///
    /// Ranges are inclusive, so zero-extent bounds are valid and place the
    /// particle at the origin.
    pub fn random_in(bounds: Bounds, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..=bounds.width),
                rng.random_range(0.0..=bounds.height),
            ),
            vel: Vec2::new(
                rng.random_range(-MAX_DRIFT..=MAX_DRIFT),
                rng.random_range(-MAX_DRIFT..=MAX_DRIFT),
            ),
            radius: rng.random_range(MIN_RADIUS..=MAX_RADIUS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_in_respects_spawn_ranges() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let p = Particle::random_in(bounds, &mut rng);
            assert!(p.pos.x >= 0.0 && p.pos.x <= bounds.width);
            assert!(p.pos.y >= 0.0 && p.pos.y <= bounds.height);
            assert!(p.vel.x.abs() <= MAX_DRIFT);
            assert!(p.vel.y.abs() <= MAX_DRIFT);
            assert!(p.radius >= MIN_RADIUS && p.radius <= MAX_RADIUS);
        }
    }

    #[test]
    fn random_in_is_deterministic_for_a_fixed_seed() {
        let bounds = Bounds::new(1024.0, 768.0);
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let a = Particle::random_in(bounds, &mut rng_a);
            let b = Particle::random_in(bounds, &mut rng_b);
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
            assert_eq!(a.radius, b.radius);
        }
    }

    #[test]
    fn random_in_degenerate_bounds_spawns_at_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Particle::random_in(Bounds::new(0.0, 0.0), &mut rng);
        assert_eq!(p.pos, Vec2::ZERO);
    }
}
