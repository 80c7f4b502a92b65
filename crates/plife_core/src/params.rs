use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    EXPONENT_MAX, EXPONENT_MIN, GROUP_COUNT, MATRIX_MAX, MATRIX_MIN, MAX_COUNT,
};
use crate::presets::Preset;
use crate::types::GroupColor;

/// Squared-count ranges sampled by the randomizer, one per group.
/// The count is `floor(sqrt(u))`, so these map to roughly
/// red 10..300, yellow 50..1000, green 10..300, blue 10..300.
const RANDOM_COUNT_RANGES: [(f64, f64); GROUP_COUNT] = [
    (100.0, 90_000.0),
    (2_500.0, 1_000_000.0),
    (100.0, 90_000.0),
    (100.0, 90_000.0),
];

/// Names one tunable field of a [`ParameterSet`].
/// Group indices are colors, so an out-of-range key cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Friction,
    Exponent,
    Count(GroupColor),
    Matrix {
        receiver: GroupColor,
        sender: GroupColor,
    },
}

impl ParamKey {
    /// Every key: friction, exponent, counts, then the matrix row-major
    pub fn all() -> impl Iterator<Item = ParamKey> {
        let counts = GroupColor::ALL.into_iter().map(ParamKey::Count);
        let cells = GroupColor::ALL.into_iter().flat_map(|receiver| {
            GroupColor::ALL
                .into_iter()
                .map(move |sender| ParamKey::Matrix { receiver, sender })
        });
        [ParamKey::Friction, ParamKey::Exponent]
            .into_iter()
            .chain(counts)
            .chain(cells)
    }

    /// Inclusive bounds a value for this key is clamped to
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Self::Friction => (0.0, 1.0),
            Self::Exponent => (EXPONENT_MIN, EXPONENT_MAX),
            Self::Count(_) => (0.0, MAX_COUNT as f64),
            Self::Matrix { .. } => (MATRIX_MIN, MATRIX_MAX),
        }
    }

    /// Clamp `value` into this key's bounds. NaN maps to the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        let (lo, hi) = self.bounds();
        if value.is_nan() {
            return lo;
        }
        let value = match self {
            Self::Count(_) => value.round(),
            _ => value,
        };
        value.clamp(lo, hi)
    }
}

/// The tunable simulation parameters.
///
/// Fields are private so every write goes through [`ParameterSet::set`]
/// (or a typed setter built on it) and is clamped; anything stored here is
/// always in range. Deserialization goes through [`ParameterSet::new`] too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawParameterSet")]
pub struct ParameterSet {
    friction: f64,
    exponent: f64,
    counts: [u32; GROUP_COUNT],
    /// Row = receiver group, column = sender group, UI units
    matrix: [[f64; GROUP_COUNT]; GROUP_COUNT],
}

/// Wire form of a [`ParameterSet`] before clamping
#[derive(Deserialize)]
struct RawParameterSet {
    friction: f64,
    exponent: f64,
    counts: [u32; GROUP_COUNT],
    matrix: [[f64; GROUP_COUNT]; GROUP_COUNT],
}

impl From<RawParameterSet> for ParameterSet {
    fn from(raw: RawParameterSet) -> Self {
        Self::new(raw.friction, raw.exponent, raw.counts, raw.matrix)
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Preset::Hunar.params()
    }
}

impl ParameterSet {
    /// Build a parameter set, clamping every field
    pub fn new(
        friction: f64,
        exponent: f64,
        counts: [u32; GROUP_COUNT],
        matrix: [[f64; GROUP_COUNT]; GROUP_COUNT],
    ) -> Self {
        let mut params = Self::zeroed();
        params.set(ParamKey::Friction, friction);
        params.set(ParamKey::Exponent, exponent);
        for color in GroupColor::ALL {
            params.set(ParamKey::Count(color), counts[color.index()] as f64);
            for sender in GroupColor::ALL {
                params.set(
                    ParamKey::Matrix { receiver: color, sender },
                    matrix[color.index()][sender.index()],
                );
            }
        }
        params
    }

    /// No friction, no falloff shaping, empty groups, no interactions
    pub fn zeroed() -> Self {
        Self {
            friction: 0.0,
            exponent: 0.0,
            counts: [0; GROUP_COUNT],
            matrix: [[0.0; GROUP_COUNT]; GROUP_COUNT],
        }
    }

    pub fn set(&mut self, key: ParamKey, value: f64) {
        let value = key.clamp(value);
        match key {
            ParamKey::Friction => self.friction = value,
            ParamKey::Exponent => self.exponent = value,
            ParamKey::Count(color) => self.counts[color.index()] = value as u32,
            ParamKey::Matrix { receiver, sender } => {
                self.matrix[receiver.index()][sender.index()] = value
            }
        }
    }

    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::Friction => self.friction,
            ParamKey::Exponent => self.exponent,
            ParamKey::Count(color) => self.counts[color.index()] as f64,
            ParamKey::Matrix { receiver, sender } => {
                self.matrix[receiver.index()][sender.index()]
            }
        }
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn count(&self, color: GroupColor) -> u32 {
        self.counts[color.index()]
    }

    pub fn counts(&self) -> &[u32; GROUP_COUNT] {
        &self.counts
    }

    /// Strength `receiver` feels from `sender`, in UI units
    pub fn strength(&self, receiver: GroupColor, sender: GroupColor) -> f64 {
        self.matrix[receiver.index()][sender.index()]
    }

    pub fn matrix(&self) -> &[[f64; GROUP_COUNT]; GROUP_COUNT] {
        &self.matrix
    }

    pub fn set_friction(&mut self, friction: f64) {
        self.set(ParamKey::Friction, friction);
    }

    pub fn set_exponent(&mut self, exponent: f64) {
        self.set(ParamKey::Exponent, exponent);
    }

    pub fn set_count(&mut self, color: GroupColor, count: u32) {
        self.set(ParamKey::Count(color), count as f64);
    }

    pub fn set_strength(&mut self, receiver: GroupColor, sender: GroupColor, strength: f64) {
        self.set(ParamKey::Matrix { receiver, sender }, strength);
    }

    /// Overwrite everything with a preset. Cells and counts the preset
    /// does not mention become zero.
    pub fn apply_preset(&mut self, preset: Preset) {
        *self = preset.params();
    }

    /// Draw a fresh random configuration.
    ///
    /// Friction avoids the degenerate extremes, the exponent is skewed
    /// toward the inverse-distance baseline, and counts go through a
    /// square root so small groups are far more likely than huge ones.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        self.set_friction(rng.gen_range(10..=90) as f64 / 100.0);

        let u: f64 = rng.gen_range(0.0..1.0);
        self.set_exponent(((120.0 * u * u).round() - 10.0) / 100.0);

        for color in GroupColor::ALL {
            let (lo, hi) = RANDOM_COUNT_RANGES[color.index()];
            let count = rng.gen_range(lo..hi).sqrt().floor();
            self.set(ParamKey::Count(color), count);
        }

        for receiver in GroupColor::ALL {
            for sender in GroupColor::ALL {
                let strength = rng.gen_range(MATRIX_MIN as i32..=MATRIX_MAX as i32);
                self.set_strength(receiver, sender, strength as f64);
            }
        }
    }
}
