use bevy::prelude::*;
use plife_core::{GROUP_COUNT, GroupColor, ParameterSet, Preset, SimConfig};
use plife_physics::{ForceRule, GroupStats, ParticleGroup};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::step;

/// Particle state of a running simulation, tracked as a Bevy Resource.
///
/// Parameters are not owned here: they are passed in on every tick so the
/// control surface can edit them between frames.
#[derive(Resource)]
pub struct SimulationState {
    /// Domain geometry and distance constants
    pub config: SimConfig,
    /// Whether ticking is suspended
    pub paused: bool,
    /// Ticks completed since creation or the last reset
    pub tick_count: u64,
    groups: [ParticleGroup; GROUP_COUNT],
    rng: ChaCha8Rng,
    rule: ForceRule,
}

impl SimulationState {
    /// Empty groups; the first tick spawns every population
    pub fn new(config: SimConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            paused: false,
            tick_count: 0,
            groups: ParticleGroup::all_colors(),
            rng,
            rule: ForceRule::new(),
        }
    }

    /// Rebuild a simulation from saved groups
    pub fn restore(config: SimConfig, groups: [ParticleGroup; GROUP_COUNT], tick_count: u64) -> Self {
        let mut state = Self::new(config);
        state.groups = groups;
        state.tick_count = tick_count;
        // Reseed so a restored run does not replay the original spawn stream.
        state.rng = ChaCha8Rng::seed_from_u64(state.config.seed ^ tick_count);
        state
    }

    /// Advance by one tick unless paused
    pub fn tick(&mut self, params: &ParameterSet) {
        if self.paused {
            return;
        }
        step::tick(params, &mut self.groups, &self.config, &mut self.rng, &mut self.rule);
        self.tick_count += 1;

        if self.tick_count % 600 == 0 {
            debug!("tick {}: {} particles", self.tick_count, self.particle_count());
        }
    }

    pub fn groups(&self) -> &[ParticleGroup; GROUP_COUNT] {
        &self.groups
    }

    pub fn group(&self, color: GroupColor) -> &ParticleGroup {
        &self.groups[color.index()]
    }

    pub fn particle_count(&self) -> usize {
        self.groups.iter().map(ParticleGroup::len).sum()
    }

    pub fn stats(&self) -> [GroupStats; GROUP_COUNT] {
        self.groups.each_ref().map(|group| GroupStats::of(group, &self.config))
    }

    /// Drop every particle; the next tick respawns all populations
    pub fn reset(&mut self) {
        for group in &mut self.groups {
            group.clear();
        }
        self.tick_count = 0;
        info!("Simulation reset");
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!("Simulation {}", if self.paused { "paused" } else { "resumed" });
    }

    /// Overwrite `params` with a preset
    pub fn apply_preset(&self, params: &mut ParameterSet, preset: Preset) {
        params.apply_preset(preset);
        info!("Applied preset '{}'", preset.name());
    }

    /// Draw new random parameters from this simulation's seeded stream
    pub fn randomize(&mut self, params: &mut ParameterSet) {
        params.randomize(&mut self.rng);
        info!(
            "Randomized parameters: friction {:.2}, exponent {:.2}, counts {:?}",
            params.friction(),
            params.exponent(),
            params.counts()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plife_core::Particle;

    fn small_params() -> ParameterSet {
        let mut params = Preset::Hunar.params();
        params.set_count(GroupColor::Red, 20);
        params.set_count(GroupColor::Yellow, 40);
        params.set_count(GroupColor::Green, 20);
        params
    }

    #[test]
    fn test_first_tick_spawns_populations() {
        let params = small_params();
        let mut state = SimulationState::new(SimConfig::default());
        assert_eq!(state.particle_count(), 0);
        state.tick(&params);
        assert_eq!(state.tick_count, 1);
        assert_eq!(state.particle_count(), 80);
        assert_eq!(state.group(GroupColor::Yellow).len(), 40);
    }

    #[test]
    fn test_paused_tick_is_noop() {
        let params = small_params();
        let mut state = SimulationState::new(SimConfig::default());
        state.tick(&params);
        let before = state.groups().clone();
        state.toggle_pause();
        state.tick(&params);
        assert_eq!(state.tick_count, 1);
        assert_eq!(state.groups(), &before);
    }

    #[test]
    fn test_live_count_edit_resizes_next_tick() {
        let mut params = small_params();
        let mut state = SimulationState::new(SimConfig::default());
        state.tick(&params);
        params.set_count(GroupColor::Red, 5);
        params.set_count(GroupColor::Blue, 12);
        state.tick(&params);
        assert_eq!(state.group(GroupColor::Red).len(), 5);
        assert_eq!(state.group(GroupColor::Blue).len(), 12);
    }

    #[test]
    fn test_reset_clears_groups() {
        let params = small_params();
        let mut state = SimulationState::new(SimConfig::default());
        state.tick(&params);
        state.reset();
        assert_eq!(state.particle_count(), 0);
        assert_eq!(state.tick_count, 0);
    }

    #[test]
    fn test_stats_follow_groups() {
        let params = small_params();
        let mut state = SimulationState::new(SimConfig::default());
        state.tick(&params);
        let stats = state.stats();
        for (s, color) in stats.iter().zip(GroupColor::ALL) {
            assert_eq!(s.color, color);
            assert_eq!(s.count, state.group(color).len());
            assert_eq!(s.in_range, s.count);
        }
    }

    #[test]
    fn test_restore_keeps_particles() {
        let mut groups = ParticleGroup::all_colors();
        groups[1] = ParticleGroup::from_particles(GroupColor::Yellow, vec![Particle::at(5.0, 6.0)]);
        let state = SimulationState::restore(SimConfig::default(), groups.clone(), 99);
        assert_eq!(state.groups(), &groups);
        assert_eq!(state.tick_count, 99);
    }

    #[test]
    fn test_randomize_and_preset() {
        let mut state = SimulationState::new(SimConfig::default());
        let mut params = ParameterSet::zeroed();
        state.randomize(&mut params);
        assert!(params.friction() >= 0.1);
        state.apply_preset(&mut params, Preset::Cells);
        assert_eq!(params, Preset::Cells.params());
    }
}
