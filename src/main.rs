use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use plife_core::{Preset, SimConfig};
use plife_render::plugin::LifeRenderPlugin;
use plife_sim::{ActiveParams, SimulationPlugin, SimulationState};
use plife_storage::codec;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Particle life simulator", long_about = None)]
struct Args {
    /// Shareable state string (`friction=..&exponent=..&counts=..&matrix=..`)
    #[arg(short, long)]
    state: Option<String>,

    /// Preset applied before the state string
    #[arg(short, long, default_value = "hunar")]
    preset: String,

    /// Override the configured random seed
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with domain geometry and distance constants
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SimConfig::from_toml(&text).map_err(anyhow::Error::msg)?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let preset = Preset::from_name(&args.preset)
        .with_context(|| format!("unknown preset '{}'", args.preset))?;
    let mut params = preset.params();
    if let Some(state) = &args.state {
        codec::decode_into(state, &mut params);
    }

    let resolution = (config.width as f32, config.height as f32);
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Particle Life".into(),
                resolution: resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(SimulationState::new(config))
        .insert_resource(ActiveParams(params))
        .add_plugins(SimulationPlugin)
        .add_plugins(LifeRenderPlugin)
        .run();

    Ok(())
}
