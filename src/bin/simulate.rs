//! Headless runner: advance a simulation for a fixed number of ticks and
//! report per-color statistics along the way.

use anyhow::Context;
use clap::Parser;
use plife_core::{ParameterSet, Preset, SimConfig};
use plife_sim::SimulationState;
use plife_storage::{Snapshot, codec, load_snapshot, save_snapshot};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run particle life without a window", long_about = None)]
struct Args {
    /// Number of ticks to run
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Starting preset
    #[arg(short, long, default_value = "hunar")]
    preset: String,

    /// Shareable state string applied on top of the preset
    #[arg(short, long)]
    state: Option<String>,

    /// Replace the preset with random parameters
    #[arg(long)]
    randomize: bool,

    /// Override the configured random seed
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with domain geometry and distance constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print statistics every K ticks (0 = only at the end)
    #[arg(short, long, default_value_t = 100)]
    report_every: u64,

    /// Resume from a bincode snapshot instead of spawning fresh groups
    #[arg(long, conflicts_with_all = ["preset", "randomize", "config", "seed"])]
    load: Option<PathBuf>,

    /// Write a bincode snapshot here when done
    #[arg(long)]
    save: Option<PathBuf>,
}

fn load_config(args: &Args) -> anyhow::Result<SimConfig> {
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
    Ok(config)
}

fn report(state: &SimulationState) {
    println!("tick {}", state.tick_count);
    for stats in state.stats() {
        if stats.count == 0 {
            continue;
        }
        println!(
            "  {:>6}: {:>4}/{:<4} in range, mean speed {:>7.3}, energy {:>10.2}",
            stats.color.name(),
            stats.in_range,
            stats.count,
            stats.mean_speed,
            stats.kinetic_energy
        );
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (mut state, mut params) = match &args.load {
        Some(path) => {
            let snapshot =
                load_snapshot(path).with_context(|| format!("loading {}", path.display()))?;
            let groups = snapshot.to_groups();
            let state = SimulationState::restore(snapshot.config, groups, snapshot.tick_count);
            (state, snapshot.params)
        }
        None => {
            let preset = Preset::from_name(&args.preset)
                .with_context(|| format!("unknown preset '{}'", args.preset))?;
            let mut params: ParameterSet = preset.params();
            let mut state = SimulationState::new(load_config(&args)?);
            if args.randomize {
                state.randomize(&mut params);
            }
            (state, params)
        }
    };
    if let Some(text) = &args.state {
        codec::decode_into(text, &mut params);
    }

    eprintln!(
        "Running {} ticks on a {}x{} domain...",
        args.ticks, state.config.width, state.config.height
    );
    let started = Instant::now();
    for _ in 0..args.ticks {
        state.tick(&params);
        if args.report_every > 0 && state.tick_count % args.report_every == 0 {
            report(&state);
        }
    }
    let elapsed = started.elapsed();
    if args.report_every == 0 || state.tick_count % args.report_every != 0 {
        report(&state);
    }
    eprintln!(
        "Done in {:.2?} ({:.2} ms/tick).",
        elapsed,
        elapsed.as_secs_f64() * 1000.0 / args.ticks.max(1) as f64
    );

    println!("state: #{}", codec::encode(&params));

    if let Some(path) = &args.save {
        let snapshot = Snapshot::capture(state.tick_count, &state.config, &params, state.groups());
        save_snapshot(&snapshot, path).with_context(|| format!("saving {}", path.display()))?;
        eprintln!("Saved snapshot to {}", path.display());
    }

    Ok(())
}
