//! Per-frame passes over the particle collection.
//!
//! A frame step runs:
//! 1. [`drift_phase`] — integrate velocities and reflect particles off the
//!    surface bounds.
//! 2. [`attraction_phase`] — nudge particles toward the pointer when it is
//!    within the influence band.
//!
//! Both passes are plain loops over the slice; connection geometry is a
//! separate read-only pass in [`crate::links`].

use crate::config::FieldConfig;
use crate::field::Bounds;
use crate::particle::Particle;
use glam::Vec2;

/// Integrates one frame of drift and reflects particles off the bounds.
///
/// For each particle, `pos += vel`, then each axis is checked against
/// `[0, max]`: a coordinate that left the range is mirrored back across the
/// bound it crossed and that axis's velocity component is negated. Velocity
/// magnitudes are never changed by this pass.
///
/// ### Parameters
/// - `particles` - The collection to advance in place.
/// - `bounds` - Current surface extent; reflection uses the latest value.
pub fn drift_phase(particles: &mut [Particle], bounds: Bounds) {
    for p in particles {
        p.pos += p.vel;
        reflect_axis(&mut p.pos.x, &mut p.vel.x, bounds.width);
        reflect_axis(&mut p.pos.y, &mut p.vel.y, bounds.height);
    }
}

/// Mirrors `pos` back into `[0, max]` across the crossed bound and flips
/// `vel`. The mirrored coordinate is capped to the range so that an
/// overshoot larger than the extent itself (tiny surfaces) cannot escape.
fn reflect_axis(pos: &mut f32, vel: &mut f32, max: f32) {
    if *pos < 0.0 {
        *pos = (-*pos).min(max);
        *vel = -*vel;
    } else if *pos > max {
        *pos = (2.0 * max - *pos).max(0.0);
        *vel = -*vel;
    }
}

/// Nudges particles toward the pointer.
///
/// For each particle, the Euclidean distance `d` to `pointer` is computed.
/// Particles with `deadzone < d < pointer_distance` are displaced toward the
/// pointer by
///
/// `(pointer - pos) * pointer_pull * (pointer_distance - d) / pointer_distance`
///
/// so the nudge fades linearly to zero at the influence radius. Particles at
/// or inside the deadzone, and particles at or beyond the influence radius,
/// are untouched. Velocities are never modified; the nudge is a pure
/// positional displacement.
///
/// ### Parameters
/// - `particles` - The collection to nudge in place.
/// - `pointer` - Last known pointer position.
/// - `cfg` - Field constants providing the deadzone, influence radius, and
///   pull factor.
pub fn attraction_phase(particles: &mut [Particle], pointer: Vec2, cfg: &FieldConfig) {
    for p in particles {
        let delta = pointer - p.pos;
        let distance = delta.length();
        if distance > cfg.pointer_deadzone && distance < cfg.pointer_distance {
            let force = (cfg.pointer_distance - distance) / cfg.pointer_distance;
            p.pos += delta * cfg.pointer_pull * force;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use crate::field::{Bounds, Field};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn particle(pos: Vec2, vel: Vec2) -> Particle {
        Particle {
            pos,
            vel,
            radius: 2.0,
        }
    }

    #[test]
    fn drift_moves_particles_by_their_velocity() {
        let mut particles = [particle(Vec2::new(10.0, 20.0), Vec2::new(0.25, -0.1))];
        drift_phase(&mut particles, Bounds::new(800.0, 600.0));
        assert_eq!(particles[0].pos, Vec2::new(10.25, 19.9));
        assert_eq!(particles[0].vel, Vec2::new(0.25, -0.1));
    }

    #[test]
    fn drift_reflects_off_the_right_edge() {
        // One step past the edge: 799.9 + 0.25 = 800.15, mirrored to 799.85.
        let mut particles = [particle(Vec2::new(799.9, 300.0), Vec2::new(0.25, 0.0))];
        let bounds = Bounds::new(800.0, 600.0);

        drift_phase(&mut particles, bounds);

        assert!((particles[0].pos.x - 799.85).abs() < 1e-3);
        assert_eq!(particles[0].vel.x, -0.25);
        assert!(bounds.contains(particles[0].pos));
    }

    #[test]
    fn drift_reflects_off_the_left_edge() {
        let mut particles = [particle(Vec2::new(0.1, 300.0), Vec2::new(-0.25, 0.0))];
        let bounds = Bounds::new(800.0, 600.0);

        drift_phase(&mut particles, bounds);

        assert!((particles[0].pos.x - 0.15).abs() < 1e-3);
        assert_eq!(particles[0].vel.x, 0.25);
        assert!(bounds.contains(particles[0].pos));
    }

    #[test]
    fn velocity_flips_once_per_crossing_then_keeps_its_sign() {
        let mut particles = [particle(Vec2::new(799.9, 300.0), Vec2::new(0.25, 0.0))];
        let bounds = Bounds::new(800.0, 600.0);

        // The crossing frame flips the sign exactly once.
        drift_phase(&mut particles, bounds);
        assert_eq!(particles[0].vel.x, -0.25);

        // Away from the boundary the sign is stable.
        for _ in 0..10 {
            drift_phase(&mut particles, bounds);
            assert_eq!(particles[0].vel.x, -0.25);
        }
    }

    #[test]
    fn drift_preserves_velocity_magnitudes() {
        let bounds = Bounds::new(300.0, 200.0);
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = Field::new(bounds, FieldConfig::default(), &mut rng);
        let speeds: Vec<Vec2> = field.particles.iter().map(|p| p.vel.abs()).collect();

        for _ in 0..5_000 {
            drift_phase(&mut field.particles, bounds);
        }

        for (p, speed) in field.particles.iter().zip(&speeds) {
            assert!((p.vel.abs() - *speed).length() < 1e-5);
        }
    }

    #[test]
    fn positions_stay_in_bounds_over_many_steps() {
        let bounds = Bounds::new(640.0, 480.0);
        let mut rng = StdRng::seed_from_u64(23);
        let mut field = Field::new(bounds, FieldConfig::default(), &mut rng);

        for _ in 0..10_000 {
            field.step();
            for p in &field.particles {
                assert!(bounds.contains(p.pos), "escaped at {:?}", p.pos);
            }
        }
    }

    #[test]
    fn no_nudge_at_the_deadzone_boundary() {
        let cfg = FieldConfig::default();
        let mut particles = [particle(Vec2::ZERO, Vec2::ZERO)];

        // Distance exactly 50: inside the exclusive band, no nudge.
        attraction_phase(&mut particles, Vec2::new(50.0, 0.0), &cfg);
        assert_eq!(particles[0].pos, Vec2::ZERO);
    }

    #[test]
    fn nudge_applies_just_outside_the_deadzone() {
        let cfg = FieldConfig::default();
        let mut particles = [particle(Vec2::ZERO, Vec2::ZERO)];

        attraction_phase(&mut particles, Vec2::new(50.1, 0.0), &cfg);
        assert!(particles[0].pos.x > 0.0);
        assert_eq!(particles[0].pos.y, 0.0);
    }

    #[test]
    fn no_nudge_at_or_beyond_the_influence_radius() {
        let cfg = FieldConfig::default();
        let mut particles = [
            particle(Vec2::ZERO, Vec2::ZERO),
            particle(Vec2::ZERO, Vec2::ZERO),
        ];

        attraction_phase(&mut particles[..1], Vec2::new(200.0, 0.0), &cfg);
        attraction_phase(&mut particles[1..], Vec2::new(350.0, 0.0), &cfg);

        assert_eq!(particles[0].pos, Vec2::ZERO);
        assert_eq!(particles[1].pos, Vec2::ZERO);
    }

    #[test]
    fn nudge_moves_toward_the_pointer_with_linear_falloff() {
        let cfg = FieldConfig::default();
        let mut particles = [particle(Vec2::ZERO, Vec2::ZERO)];

        // d = 100: force = (200 - 100) / 200 = 0.5, so the displacement is
        // 100 * 0.01 * 0.5 = 0.5 along x.
        attraction_phase(&mut particles, Vec2::new(100.0, 0.0), &cfg);
        assert!((particles[0].pos.x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn nudge_does_not_touch_velocity() {
        let cfg = FieldConfig::default();
        let vel = Vec2::new(0.2, -0.15);
        let mut particles = [particle(Vec2::ZERO, vel)];

        attraction_phase(&mut particles, Vec2::new(120.0, 40.0), &cfg);
        assert_eq!(particles[0].vel, vel);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn positions_stay_in_bounds_for_any_seed(
                seed: u64,
                width in 50.0_f32..2000.0,
                height in 50.0_f32..2000.0,
                steps in 1_usize..300,
            ) {
                let bounds = Bounds::new(width, height);
                let mut rng = StdRng::seed_from_u64(seed);
                let mut field = Field::new(bounds, FieldConfig::default(), &mut rng);

                for _ in 0..steps {
                    field.step();
                }
                for p in &field.particles {
                    prop_assert!(bounds.contains(p.pos), "escaped at {:?}", p.pos);
                }
            }

            #[test]
            fn positions_stay_in_bounds_with_an_interior_pointer(
                seed: u64,
                width in 300.0_f32..2000.0,
                height in 300.0_f32..2000.0,
                px in 0.0_f32..1.0,
                py in 0.0_f32..1.0,
                steps in 1_usize..300,
            ) {
                let bounds = Bounds::new(width, height);
                let mut rng = StdRng::seed_from_u64(seed);
                let mut field = Field::new(bounds, FieldConfig::default(), &mut rng);
                field.set_pointer(Vec2::new(px * width, py * height));

                for _ in 0..steps {
                    field.step();
                }
                for p in &field.particles {
                    prop_assert!(bounds.contains(p.pos), "escaped at {:?}", p.pos);
                }
            }

            #[test]
            fn drift_never_changes_axis_speeds(
                seed: u64,
                steps in 1_usize..500,
            ) {
                let bounds = Bounds::new(400.0, 300.0);
                let mut rng = StdRng::seed_from_u64(seed);
                let mut field = Field::new(bounds, FieldConfig::default(), &mut rng);
                let speeds: Vec<Vec2> =
                    field.particles.iter().map(|p| p.vel.abs()).collect();

                for _ in 0..steps {
                    drift_phase(&mut field.particles, bounds);
                }
                for (p, speed) in field.particles.iter().zip(&speeds) {
                    prop_assert!((p.vel.abs() - *speed).length() < 1e-5);
                }
            }
        }
    }
}
