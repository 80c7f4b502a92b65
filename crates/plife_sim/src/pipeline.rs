use bevy::prelude::*;
use plife_core::ParameterSet;

use super::state::SimulationState;

/// The parameter set the control surface edits and every tick reads
#[derive(Resource, Debug, Clone, Default, PartialEq, Deref, DerefMut)]
pub struct ActiveParams(pub ParameterSet);

/// Bevy plugin for the simulation pipeline
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveParams>()
            .add_systems(Update, simulation_tick);
    }
}

/// One simulation tick per frame, independent of frame time
fn simulation_tick(mut state: ResMut<SimulationState>, params: Res<ActiveParams>) {
    state.tick(&params);
}
