use serde::{Deserialize, Serialize};

use crate::constants::GROUP_COUNT;
use crate::params::ParameterSet;
use crate::types::GroupColor::{self, Blue, Green, Red, Yellow};

/// Bundled parameter sets known to produce interesting structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// Green chases yellow, red orbits green
    Hunar,
    /// Green clumps tightly, red and yellow drift apart
    Cells,
    /// Four colors each chasing the next
    Quartet,
}

/// One row of a preset table: (receiver, sender, strength in UI units)
type Rule = (GroupColor, GroupColor, f64);

struct PresetTable {
    friction: f64,
    exponent: f64,
    counts: [u32; GROUP_COUNT],
    rules: &'static [Rule],
}

const HUNAR: PresetTable = PresetTable {
    friction: 0.5,
    exponent: 0.0,
    counts: [200, 1000, 200, 0],
    rules: &[
        (Green, Green, -64.0),
        (Green, Red, -34.0),
        (Green, Yellow, 68.0),
        (Red, Red, -20.0),
        (Red, Green, -68.0),
        (Yellow, Yellow, 30.0),
        (Yellow, Green, -40.0),
    ],
};

const CELLS: PresetTable = PresetTable {
    friction: 0.5,
    exponent: 0.0,
    counts: [200, 1000, 200, 0],
    rules: &[
        (Red, Red, 20.0),
        (Yellow, Red, 30.0),
        // Would be -140 at the usual scale; held at the matrix floor.
        (Green, Green, -100.0),
        (Green, Red, -40.0),
        (Red, Green, -20.0),
        (Yellow, Yellow, 2.0),
    ],
};

const QUARTET: PresetTable = PresetTable {
    friction: 0.3,
    exponent: 0.2,
    counts: [250, 250, 250, 250],
    rules: &[
        (Red, Red, -10.0),
        (Red, Yellow, -40.0),
        (Red, Blue, 30.0),
        (Yellow, Yellow, -10.0),
        (Yellow, Green, -40.0),
        (Yellow, Red, 30.0),
        (Green, Green, -10.0),
        (Green, Blue, -40.0),
        (Green, Yellow, 30.0),
        (Blue, Blue, -10.0),
        (Blue, Red, -40.0),
        (Blue, Green, 30.0),
    ],
};

impl Preset {
    pub const ALL: [Preset; 3] = [Self::Hunar, Self::Cells, Self::Quartet];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hunar => "hunar",
            Self::Cells => "cells",
            Self::Quartet => "quartet",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name.trim()))
    }

    fn table(&self) -> &'static PresetTable {
        match self {
            Self::Hunar => &HUNAR,
            Self::Cells => &CELLS,
            Self::Quartet => &QUARTET,
        }
    }

    /// The full parameter set for this preset
    pub fn params(&self) -> ParameterSet {
        let table = self.table();
        let mut matrix = [[0.0; GROUP_COUNT]; GROUP_COUNT];
        for &(receiver, sender, strength) in table.rules {
            matrix[receiver.index()][sender.index()] = strength;
        }
        ParameterSet::new(table.friction, table.exponent, table.counts, matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(Preset::from_name(" Cells "), Some(Preset::Cells));
        assert_eq!(Preset::from_name("nope"), None);
    }

    #[test]
    fn test_unlisted_cells_are_zero() {
        let params = Preset::Hunar.params();
        assert_eq!(params.strength(Green, Yellow), 68.0);
        assert_eq!(params.strength(Yellow, Red), 0.0);
        assert_eq!(params.strength(Blue, Blue), 0.0);
        assert_eq!(params.count(Blue), 0);
    }

    #[test]
    fn test_cells_green_cohesion_sits_at_floor() {
        let params = Preset::Cells.params();
        assert_eq!(params.strength(Green, Green), crate::constants::MATRIX_MIN);
        assert!(params.strength(Green, Green) < params.strength(Green, Red));
    }

    #[test]
    fn test_tables_need_no_clamping() {
        for preset in Preset::ALL {
            let table = preset.table();
            let params = preset.params();
            assert_eq!(params.friction(), table.friction);
            assert_eq!(params.exponent(), table.exponent);
            assert_eq!(params.counts(), &table.counts);
            for &(receiver, sender, strength) in table.rules {
                assert_eq!(params.strength(receiver, sender), strength, "{preset:?}");
            }
        }
    }
}
