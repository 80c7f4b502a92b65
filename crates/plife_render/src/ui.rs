use bevy::prelude::*;
use plife_core::{GroupColor, Preset};
use plife_sim::{ActiveParams, SimulationState};
use plife_storage::codec;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Particle Life"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(0.9, 0.9, 0.9, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        HudText,
    ));
}

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Update HUD text every 10th frame
pub fn update_hud(
    state: Res<SimulationState>,
    params: Res<ActiveParams>,
    mut throttle: ResMut<HudThrottle>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }

    let mut lines = vec![format!(
        "tick {}{} | friction {:.2} | exponent {:.2}",
        state.tick_count,
        if state.paused { " (paused)" } else { "" },
        params.friction(),
        params.exponent(),
    )];
    for stats in state.stats() {
        if stats.count == 0 {
            continue;
        }
        lines.push(format!(
            "{:>6}: {:>4} in range of {:>4}",
            stats.color.name(),
            stats.in_range,
            stats.count
        ));
    }
    lines.push("space pause | r random | 1-3 presets | backspace reset | s share".to_string());

    for mut text in hud_query.iter_mut() {
        **text = lines.join("\n");
    }
}

/// Keyboard control surface: edits the active parameters between ticks
pub fn control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<SimulationState>,
    mut params: ResMut<ActiveParams>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        state.toggle_pause();
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        state.randomize(&mut params);
    }
    for (key, preset) in [
        (KeyCode::Digit1, Preset::Hunar),
        (KeyCode::Digit2, Preset::Cells),
        (KeyCode::Digit3, Preset::Quartet),
    ] {
        if keyboard.just_pressed(key) {
            state.apply_preset(&mut params, preset);
        }
    }
    if keyboard.just_pressed(KeyCode::Backspace) {
        state.reset();
    }
    if keyboard.just_pressed(KeyCode::KeyS) {
        info!("Share: #{}", codec::encode(&params));
    }

    // Up/down nudges the yellow population, the widest-ranging group.
    let yellow = params.count(GroupColor::Yellow);
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        params.set_count(GroupColor::Yellow, yellow.saturating_add(50));
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        params.set_count(GroupColor::Yellow, yellow.saturating_sub(50));
    }
}
