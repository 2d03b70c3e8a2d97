use crate::config::FieldConfig;
use crate::links::{self, Link, PointerLink};
use crate::particle::Particle;
use crate::phases;
use glam::Vec2;
use rand::Rng;

/// Extent of the rendering surface. Valid positions span
/// `[0, width] × [0, height]`, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// The particle field behind the Farfly pages.
///
/// Owns the particle collection, the latest surface bounds, and the last
/// known pointer position. Bounds and pointer are mutated only through
/// [`Field::set_bounds`] and [`Field::set_pointer`], driven by the view's
/// event boundary; rendering reads them back via the accessors.
///
/// The particle count is fixed once at construction from the surface width
/// at that time. Later resizes move the reflection bounds but never change
/// the count.
#[derive(Debug)]
pub struct Field {
    pub particles: Vec<Particle>,
    bounds: Bounds,
    pointer: Option<Vec2>,
    cfg: FieldConfig,
}

impl Field {
    /// Allocates a field sized for `bounds`, spawning
    /// [`Field::count_for_width`] particles uniformly inside it.
    ///
    /// Pass a seeded RNG for a reproducible initial layout.
    pub fn new(bounds: Bounds, cfg: FieldConfig, rng: &mut impl Rng) -> Self {
        let count = Self::count_for_width(&cfg, bounds.width);
        let particles = (0..count)
            .map(|_| Particle::random_in(bounds, rng))
            .collect();

        Self {
            particles,
            bounds,
            pointer: None,
            cfg,
        }
    }

    /// Particle count for a surface of the given width: sparse below
    /// `cfg.sparse_width`, dense at or above it.
    pub fn count_for_width(cfg: &FieldConfig, width: f32) -> usize {
        if width < cfg.sparse_width {
            cfg.sparse_count
        } else {
            cfg.dense_count
        }
    }

    /// Records the latest surface extent. Subsequent boundary reflections
    /// use it; the particle count is unchanged.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Records the latest pointer position. The pointer starts unknown and
    /// is never cleared once set, only overwritten.
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }

    /// Advances the field by one frame: drift + boundary reflection, then
    /// the pointer-attraction pass.
    pub fn step(&mut self) {
        phases::drift_phase(&mut self.particles, self.bounds);
        if let Some(pointer) = self.pointer {
            phases::attraction_phase(&mut self.particles, pointer, &self.cfg);
        }
    }

    /// Connection lines between nearby particle pairs, for this frame.
    pub fn particle_links(&self) -> Vec<Link> {
        links::particle_links(&self.particles, &self.cfg)
    }

    /// Connection lines from nearby particles to the pointer, for this
    /// frame. Empty while the pointer is unknown.
    pub fn pointer_links(&self) -> Vec<PointerLink> {
        links::pointer_links(&self.particles, self.pointer, &self.cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn count_is_sparse_below_the_width_threshold() {
        let cfg = FieldConfig::default();
        assert_eq!(Field::count_for_width(&cfg, 767.0), 30);
        assert_eq!(Field::count_for_width(&cfg, 768.0), 60);
    }

    #[test]
    fn new_spawns_particles_inside_bounds() {
        let bounds = Bounds::new(1280.0, 720.0);
        let mut rng = StdRng::seed_from_u64(3);
        let field = Field::new(bounds, FieldConfig::default(), &mut rng);

        assert_eq!(field.particles.len(), 60);
        for p in &field.particles {
            assert!(bounds.contains(p.pos));
        }
    }

    #[test]
    fn same_seed_produces_identical_initial_layout() {
        let bounds = Bounds::new(1280.0, 720.0);
        let cfg = FieldConfig::default();
        let a = Field::new(bounds, cfg, &mut StdRng::seed_from_u64(42));
        let b = Field::new(bounds, cfg, &mut StdRng::seed_from_u64(42));

        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.radius, pb.radius);
        }
    }

    #[test]
    fn resize_keeps_the_particle_count() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = Field::new(Bounds::new(700.0, 500.0), FieldConfig::default(), &mut rng);
        assert_eq!(field.particles.len(), 30);

        field.set_bounds(Bounds::new(1920.0, 1080.0));
        assert_eq!(field.particles.len(), 30);
        assert_eq!(field.bounds(), Bounds::new(1920.0, 1080.0));
    }

    #[test]
    fn pointer_starts_unknown_and_is_never_cleared() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = Field::new(Bounds::new(800.0, 600.0), FieldConfig::default(), &mut rng);
        assert_eq!(field.pointer(), None);

        field.set_pointer(Vec2::new(400.0, 300.0));
        for _ in 0..10 {
            field.step();
        }
        assert_eq!(field.pointer(), Some(Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn degenerate_bounds_step_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = Field::new(Bounds::new(0.0, 0.0), FieldConfig::default(), &mut rng);
        for _ in 0..100 {
            field.step();
        }
    }
}
