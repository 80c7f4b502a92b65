use bevy::math::Isometry2d;
use bevy::prelude::*;
use plife_core::GroupColor;
use plife_sim::SimulationState;

use super::camera::to_world;

/// Segments per particle circle; points are a few pixels wide
const POINT_RESOLUTION: u32 = 6;

/// Draw every group as colored points, plus the domain outline.
/// Reads the simulation state only.
pub fn draw_particles(mut gizmos: Gizmos, state: Res<SimulationState>) {
    let config = &state.config;
    let center = Vec2::new(config.width as f32, config.height as f32) * 0.5;
    gizmos.rect_2d(
        Isometry2d::from_translation(center),
        center * 2.0,
        Color::srgba(1.0, 1.0, 1.0, 0.15),
    );

    for group in state.groups() {
        let color = group_color(group.color());
        let radius = group.color().point_radius() * 0.5;
        for (x, y) in group.positions() {
            gizmos
                .circle_2d(
                    Isometry2d::from_translation(to_world(x, y, config.height)),
                    radius,
                    color,
                )
                .resolution(POINT_RESOLUTION);
        }
    }
}

pub fn group_color(color: GroupColor) -> Color {
    let [r, g, b] = color.rgb();
    Color::srgb_u8(r, g, b)
}
