use plife_core::{GROUP_COUNT, GroupColor, ParameterSet, Particle, SimConfig};
use plife_physics::ParticleGroup;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, StorageError};

/// Complete simulation snapshot for save/load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick_count: u64,
    pub config: SimConfig,
    pub params: ParameterSet,
    /// Particles per group, in matrix order
    pub groups: [Vec<Particle>; GROUP_COUNT],
}

impl Snapshot {
    pub fn capture(
        tick_count: u64,
        config: &SimConfig,
        params: &ParameterSet,
        groups: &[ParticleGroup; GROUP_COUNT],
    ) -> Self {
        Self {
            tick_count,
            config: config.clone(),
            params: params.clone(),
            groups: groups.each_ref().map(|group| group.particles().to_vec()),
        }
    }

    /// Reject geometry the simulation cannot run in and particles with
    /// non-finite state. Parameters are already clamped on decode.
    pub fn validate(&self) -> Result<()> {
        self.config.validate().map_err(StorageError::Validation)?;
        for (color, particles) in GroupColor::ALL.iter().zip(&self.groups) {
            if let Some(i) = particles.iter().position(|p| !p.is_finite()) {
                return Err(StorageError::Validation(format!(
                    "{} particle {i} is not finite",
                    color.name()
                )));
            }
        }
        Ok(())
    }

    /// Rebuild the particle groups
    pub fn to_groups(&self) -> [ParticleGroup; GROUP_COUNT] {
        GroupColor::ALL.map(|color| {
            ParticleGroup::from_particles(color, self.groups[color.index()].clone())
        })
    }
}

/// Save a snapshot to disk as bincode
pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| StorageError::from(e).with_context(format!("creating {}", parent.display())))?;
    }
    let data = bincode::serialize(snapshot)?;
    fs::write(path, data)
        .map_err(|e| StorageError::from(e).with_context(format!("writing {}", path.display())))?;
    Ok(())
}

/// Load a snapshot from disk
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let data = fs::read(path)
        .map_err(|e| StorageError::from(e).with_context(format!("reading {}", path.display())))?;
    let snapshot: Snapshot = bincode::deserialize(&data)?;
    snapshot
        .validate()
        .map_err(|e| e.with_context(format!("loading {}", path.display())))?;
    Ok(snapshot)
}
