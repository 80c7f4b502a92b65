use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use plife_sim::SimulationState;

/// 2D camera framing the whole simulation domain
pub fn spawn_camera(mut commands: Commands, state: Res<SimulationState>) {
    let width = state.config.width as f32;
    let height = state.config.height as f32;
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: width,
                min_height: height,
            },
            ..OrthographicProjection::default_2d()
        },
        Transform::from_xyz(width * 0.5, height * 0.5, 0.0),
    ));
}

/// Simulation coordinates have y pointing down; the world has y up
pub fn to_world(x: f64, y: f64, height: f64) -> Vec2 {
    Vec2::new(x as f32, (height - y) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_world_flips_y() {
        assert_eq!(to_world(10.0, 0.0, 500.0), Vec2::new(10.0, 500.0));
        assert_eq!(to_world(10.0, 500.0, 500.0), Vec2::new(10.0, 0.0));
    }
}
