use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::constants::GROUP_COUNT;

/// A single particle. Particles have no identity beyond their index in
/// the owning group.
/// repr(C) + Pod so a group's buffer can be handed to a renderer as bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    /// A particle at rest
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, vx: 0.0, vy: 0.0 }
    }

    pub fn speed(&self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.vx.is_finite() && self.vy.is_finite()
    }
}

/// The particle groups, one per color. The discriminant is the group's
/// row/column in the interaction matrix.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupColor {
    Red = 0,
    Yellow = 1,
    Green = 2,
    Blue = 3,
}

impl GroupColor {
    pub const ALL: [GroupColor; GROUP_COUNT] =
        [Self::Red, Self::Yellow, Self::Green, Self::Blue];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Display color [r, g, b] in 0..=255
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Self::Red => [255, 50, 20],
            Self::Yellow => [200, 200, 10],
            Self::Green => [20, 200, 50],
            Self::Blue => [30, 150, 255],
        }
    }

    /// Rendered point size in pixels
    pub fn point_radius(&self) -> f32 {
        match self {
            Self::Red => 7.0,
            Self::Yellow => 3.5,
            Self::Green => 5.5,
            Self::Blue => 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_indices_match_matrix_layout() {
        for (i, color) in GroupColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(GroupColor::from_index(i), Some(*color));
        }
        assert_eq!(GroupColor::from_index(GROUP_COUNT), None);
    }

    #[test]
    fn test_particle_layout_is_four_doubles() {
        assert_eq!(std::mem::size_of::<Particle>(), 32);
        let p = Particle { x: 1.0, y: 2.0, vx: 3.0, vy: 4.0 };
        let floats: &[f64] = bytemuck::cast_slice(std::slice::from_ref(&p));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(p.speed(), 5.0);
    }
}
