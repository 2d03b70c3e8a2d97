/// Identifier for a particle in a [`crate::field::Field`].
///
/// This is an index into `Field::particles`, and is only meaningful within
/// the lifetime of a given `Field` instance.
pub type ParticleId = usize;
