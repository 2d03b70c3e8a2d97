#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
    /// Particle pairs closer than this are joined by a connection line.
    pub connection_distance: f32,
    /// Pointer influence radius; particles farther away are unaffected.
    pub pointer_distance: f32,
    /// Particles strictly closer than this receive no pointer nudge.
    pub pointer_deadzone: f32,
    /// Scale factor on the per-frame pointer nudge.
    pub pointer_pull: f32,
    /// Extra fade applied to pointer-line strength on top of distance decay.
    pub pointer_link_fade: f32,
    /// Surfaces narrower than this get `sparse_count` particles.
    pub sparse_width: f32,
    pub sparse_count: usize,
    pub dense_count: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            connection_distance: 150.0,
            pointer_distance: 200.0,
            pointer_deadzone: 50.0,
            pointer_pull: 0.01,
            pointer_link_fade: 0.8,
            sparse_width: 768.0,
            sparse_count: 30,
            dense_count: 60,
        }
    }
}
