use plife_core::{GroupColor, MAX_COUNT, Particle, SimConfig};
use rand::Rng;

/// All particles of one color.
///
/// The buffer is exactly `target` long after [`ParticleGroup::resize`];
/// growing spawns particles at rest inside the spawn margin, shrinking
/// drops from the tail.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleGroup {
    color: GroupColor,
    particles: Vec<Particle>,
}

impl ParticleGroup {
    pub fn new(color: GroupColor) -> Self {
        Self {
            color,
            particles: Vec::new(),
        }
    }

    /// Pre-allocate room for the largest population a group can reach,
    /// so resizing never reallocates
    pub fn with_max_capacity(color: GroupColor) -> Self {
        Self {
            color,
            particles: Vec::with_capacity(MAX_COUNT as usize),
        }
    }

    /// Build a group from explicit particles (tests, snapshot restore)
    pub fn from_particles(color: GroupColor, particles: Vec<Particle>) -> Self {
        Self { color, particles }
    }

    /// One empty group per color, in matrix order
    pub fn all_colors() -> [ParticleGroup; plife_core::GROUP_COUNT] {
        GroupColor::ALL.map(ParticleGroup::with_max_capacity)
    }

    pub fn color(&self) -> GroupColor {
        self.color
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Current positions, for renderers
    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.particles.iter().map(|p| (p.x, p.y))
    }

    /// Raw particle buffer (x, y, vx, vy as f64 each) for vertex upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }

    /// Grow or shrink to exactly `target` particles.
    /// Calling it again with the same target changes nothing.
    pub fn resize(&mut self, target: u32, config: &SimConfig, rng: &mut impl Rng) {
        let target = target as usize;
        if target <= self.particles.len() {
            self.particles.truncate(target);
            return;
        }

        let (x_lo, x_hi) = config.spawn_span(config.width);
        let (y_lo, y_hi) = config.spawn_span(config.height);
        let missing = target - self.particles.len();
        self.particles.reserve(missing);
        for _ in 0..missing {
            self.particles.push(spawn_particle(x_lo..x_hi, y_lo..y_hi, rng));
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

fn spawn_particle(
    xs: std::ops::Range<f64>,
    ys: std::ops::Range<f64>,
    rng: &mut impl Rng,
) -> Particle {
    Particle::at(rng.gen_range(xs), rng.gen_range(ys))
}
