pub mod field_state;
pub mod particle;
pub mod particle_set;

pub use field_state::FieldState;
pub use particle::Particle;
pub use particle_set::ParticleSet;
