use plife_core::{GroupColor, SimConfig};

use crate::particle::ParticleGroup;

/// Per-color summary shown by the HUD and the headless runner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupStats {
    pub color: GroupColor,
    pub count: usize,
    /// Particles inside `[0, width) x [0, height)`
    pub in_range: usize,
    pub mean_speed: f64,
    pub kinetic_energy: f64,
}

impl GroupStats {
    pub fn of(group: &ParticleGroup, config: &SimConfig) -> Self {
        Self {
            color: group.color(),
            count: group.len(),
            in_range: in_range_count(group, config),
            mean_speed: mean_speed(group),
            kinetic_energy: kinetic_energy(group),
        }
    }
}

/// How many particles currently sit inside the domain
pub fn in_range_count(group: &ParticleGroup, config: &SimConfig) -> usize {
    group
        .positions()
        .filter(|&(x, y)| (0.0..config.width).contains(&x) && (0.0..config.height).contains(&y))
        .count()
}

pub fn mean_speed(group: &ParticleGroup) -> f64 {
    if group.is_empty() {
        return 0.0;
    }
    let total: f64 = group.particles().iter().map(|p| p.speed()).sum();
    total / group.len() as f64
}

/// Total kinetic energy with unit mass per particle
pub fn kinetic_energy(group: &ParticleGroup) -> f64 {
    group
        .particles()
        .iter()
        .map(|p| 0.5 * (p.vx * p.vx + p.vy * p.vy))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plife_core::Particle;

    #[test]
    fn test_empty_group() {
        let group = ParticleGroup::new(GroupColor::Blue);
        let stats = GroupStats::of(&group, &SimConfig::default());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.in_range, 0);
        assert_eq!(stats.mean_speed, 0.0);
        assert_eq!(stats.kinetic_energy, 0.0);
    }

    #[test]
    fn test_in_range_excludes_far_edge() {
        let group = ParticleGroup::from_particles(
            GroupColor::Red,
            vec![
                Particle::at(0.0, 0.0),
                Particle::at(250.0, 499.9),
                Particle::at(500.0, 10.0),
                Particle::at(10.0, -0.1),
            ],
        );
        assert_eq!(in_range_count(&group, &SimConfig::default()), 2);
    }

    #[test]
    fn test_speed_and_energy() {
        let group = ParticleGroup::from_particles(
            GroupColor::Green,
            vec![
                Particle { x: 1.0, y: 1.0, vx: 3.0, vy: 4.0 },
                Particle { x: 2.0, y: 2.0, vx: 0.0, vy: -1.0 },
            ],
        );
        assert_eq!(mean_speed(&group), 3.0);
        assert_eq!(kinetic_energy(&group), 13.0);
    }
}
