use crate::core::Particle;

/// Owned collection of particles for one field.
///
/// A plain batch: no spatial index is needed since the only pairwise pass
/// (link rendering) runs over at most a couple hundred particles.
#[derive(Clone, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn push(&mut self, particle: Particle) -> usize {
        let index = self.particles.len();
        self.particles.push(particle);
        index
    }

    pub fn insert_batch(&mut self, mut batch: Vec<Particle>) {
        self.particles.append(&mut batch);
    }

    pub fn replace(&mut self, batch: Vec<Particle>) {
        self.particles = batch;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;

    #[test]
    fn push_returns_stable_indices() {
        let mut set = ParticleSet::new();
        assert_eq!(set.push(Particle::new(Vec2::ZERO)), 0);
        assert_eq!(set.push(Particle::new(Vec2::ONE)), 1);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn replace_swaps_the_whole_batch() {
        let mut set = ParticleSet::new();
        set.push(Particle::new(Vec2::ZERO));
        set.replace(vec![Particle::new(Vec2::ONE), Particle::new(Vec2::ONE)]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).map(|p| p.position), Some(Vec2::ONE));
    }

    #[test]
    fn empty_set_is_valid() {
        let mut set = ParticleSet::new();
        set.replace(Vec::new());
        assert!(set.is_empty());
        assert!(set.get(0).is_none());
    }
}
