//! Distance-based connection geometry.
//!
//! Links are recomputed from scratch every frame and only read by the
//! renderer; nothing here mutates the field. The pairwise scan is O(N²),
//! which is fine for the fixed counts this field runs at (≤ 60). Anyone
//! raising the count past a few hundred should swap the scan for a spatial
//! grid before touching anything else.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::types::ParticleId;
use glam::Vec2;

/// A line between two particles, faded by their separation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: ParticleId,
    pub b: ParticleId,
    /// 1 at zero separation, linearly down to 0 at the connection distance.
    pub strength: f32,
}

/// A line from a particle to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerLink {
    pub id: ParticleId,
    pub strength: f32,
}

/// Linear distance falloff: 1 at `distance == 0`, exactly 0 at
/// `distance == threshold`.
#[inline]
pub fn connection_strength(distance: f32, threshold: f32) -> f32 {
    1.0 - distance / threshold
}

/// Scans all unordered particle pairs and returns a link for every pair
/// closer than `cfg.connection_distance`, with strength from
/// [`connection_strength`]. Pairs at exactly the threshold are excluded
/// (their strength would be 0).
pub fn particle_links(particles: &[Particle], cfg: &FieldConfig) -> Vec<Link> {
    let mut out = Vec::new();
    for (a, pa) in particles.iter().enumerate() {
        for (b, pb) in particles.iter().enumerate().skip(a + 1) {
            let distance = pa.pos.distance(pb.pos);
            if distance < cfg.connection_distance {
                out.push(Link {
                    a,
                    b,
                    strength: connection_strength(distance, cfg.connection_distance),
                });
            }
        }
    }
    out
}

/// Returns a link to the pointer for every particle closer than
/// `cfg.pointer_distance`, with strength
/// `connection_strength(d, pointer_distance) * pointer_link_fade`.
/// Empty while the pointer is unknown.
pub fn pointer_links(
    particles: &[Particle],
    pointer: Option<Vec2>,
    cfg: &FieldConfig,
) -> Vec<PointerLink> {
    let Some(pointer) = pointer else {
        return Vec::new();
    };

    particles
        .iter()
        .enumerate()
        .filter_map(|(id, p)| {
            let distance = p.pos.distance(pointer);
            if distance < cfg.pointer_distance {
                Some(PointerLink {
                    id,
                    strength: connection_strength(distance, cfg.pointer_distance)
                        * cfg.pointer_link_fade,
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn at(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius: 2.0,
        }
    }

    #[test]
    fn strength_is_one_at_zero_distance_and_zero_at_the_threshold() {
        assert_eq!(connection_strength(0.0, 150.0), 1.0);
        assert_eq!(connection_strength(150.0, 150.0), 0.0);
        assert_eq!(connection_strength(75.0, 150.0), 0.5);
    }

    #[test]
    fn pairs_inside_the_threshold_are_linked() {
        let cfg = FieldConfig::default();
        let particles = [at(0.0, 0.0), at(100.0, 0.0), at(1000.0, 0.0)];

        let links = particle_links(&particles, &cfg);

        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].strength - (1.0 - 100.0 / 150.0)).abs() < 1e-6);
    }

    #[test]
    fn pairs_at_exactly_the_threshold_are_not_linked() {
        let cfg = FieldConfig::default();
        let particles = [at(0.0, 0.0), at(150.0, 0.0)];
        assert!(particle_links(&particles, &cfg).is_empty());
    }

    #[test]
    fn each_pair_is_reported_once() {
        let cfg = FieldConfig::default();
        // Three mutually close particles: exactly three unordered pairs.
        let particles = [at(0.0, 0.0), at(10.0, 0.0), at(0.0, 10.0)];

        let links = particle_links(&particles, &cfg);

        assert_eq!(links.len(), 3);
        for l in &links {
            assert!(l.a < l.b);
        }
    }

    #[test]
    fn pointer_links_are_empty_while_the_pointer_is_unknown() {
        let cfg = FieldConfig::default();
        let particles = [at(0.0, 0.0)];
        assert!(pointer_links(&particles, None, &cfg).is_empty());
    }

    #[test]
    fn pointer_links_fade_with_distance_and_the_extra_factor() {
        let cfg = FieldConfig::default();
        let particles = [at(0.0, 0.0), at(500.0, 0.0)];

        let links = pointer_links(&particles, Some(Vec2::new(100.0, 0.0)), &cfg);

        // Only the first particle is within 200 of the pointer.
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].id, 0);
        assert!((links[0].strength - (1.0 - 100.0 / 200.0) * 0.8).abs() < 1e-6);
    }
}
