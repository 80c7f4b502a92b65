use bevy::prelude::*;

use super::camera;
use super::particles;
use super::ui;

/// Renders the particle groups and wires the keyboard control surface
pub struct LifeRenderPlugin;

impl Plugin for LifeRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .add_systems(Startup, (camera::spawn_camera, ui::spawn_hud))
            .add_systems(
                Update,
                (
                    ui::control_system,
                    particles::draw_particles.after(ui::control_system),
                    ui::update_hud.after(ui::control_system),
                ),
            );
    }
}
