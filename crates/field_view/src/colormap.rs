//! Colormaps mapping normalized scalars to RGB.
//!
//! Each map is a small table of evenly spaced anchor colors; samples between anchors are
//! linearly interpolated in sRGB. The perceptual maps approximate the matplotlib tables of
//! the same names closely enough for display.
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 45, 123],
    [59, 82, 139],
    [44, 114, 142],
    [33, 145, 140],
    [40, 174, 128],
    [94, 201, 98],
    [173, 220, 48],
    [253, 231, 37],
];

const MAGMA: [[u8; 3]; 9] = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const INFERNO: [[u8; 3]; 9] = [
    [0, 0, 4],
    [22, 11, 57],
    [66, 10, 104],
    [106, 23, 110],
    [147, 38, 103],
    [188, 55, 84],
    [221, 81, 58],
    [243, 120, 25],
    [252, 255, 164],
];

const GRAYSCALE: [[u8; 3]; 2] = [[0, 0, 0], [255, 255, 255]];

/// Named colormap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Colormap {
    #[default]
    Viridis,
    Magma,
    Inferno,
    Grayscale,
}

impl Colormap {
    pub const ALL: [Colormap; 4] = [
        Colormap::Viridis,
        Colormap::Magma,
        Colormap::Inferno,
        Colormap::Grayscale,
    ];

    fn anchors(self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Viridis => &VIRIDIS,
            Colormap::Magma => &MAGMA,
            Colormap::Inferno => &INFERNO,
            Colormap::Grayscale => &GRAYSCALE,
        }
    }

    /// Color at `t` in `[0, 1]`. Values outside are clamped; NaN maps to the low end.
    pub fn sample(self, t: f32) -> [u8; 3] {
        let anchors = self.anchors();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t * (anchors.len() - 1) as f32;
        let i = (pos.floor() as usize).min(anchors.len() - 2);
        let frac = pos - i as f32;

        let (a, b) = (anchors[i], anchors[i + 1]);
        let mix = |c0: u8, c1: u8| (c0 as f32 + (c1 as f32 - c0 as f32) * frac).round() as u8;
        [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
    }

    pub fn name(self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Magma => "magma",
            Colormap::Inferno => "inferno",
            Colormap::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        if lower == "gray" || lower == "grey" || lower == "greyscale" {
            return Ok(Colormap::Grayscale);
        }
        Colormap::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or_else(|| Error::InvalidConfig(format!("unknown colormap '{s}'")))
    }
}
