//! Render configuration.
use std::str::FromStr;

use crate::colormap::Colormap;
use crate::error::{Error, Result};

/// Largest accepted pixel upscale factor.
pub const MAX_SCALE: u32 = 64;

/// How grid values are mapped onto the `[0, 1]` colormap range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Normalization {
    /// `t = (v - vmin) / (vmax - vmin)`.
    #[default]
    Linear,
    /// `t = ln(1 + v - vmin) / ln(1 + vmax - vmin)`; spreads out low escape counts.
    Log,
}

impl FromStr for Normalization {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Normalization::Linear),
            "log" => Ok(Normalization::Log),
            other => Err(Error::InvalidConfig(format!(
                "unknown normalization '{other}' (expected linear or log)"
            ))),
        }
    }
}

/// Configuration for rendering a field to pixels.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    pub colormap: Colormap,
    pub normalization: Normalization,
    /// Value mapped to the low end of the colormap. Defaults to the grid minimum.
    pub vmin: Option<i32>,
    /// Value mapped to the high end of the colormap. Defaults to the grid maximum.
    pub vmax: Option<i32>,
    /// Integer upscale factor; each cell becomes a `scale x scale` pixel block.
    pub scale: u32,
    /// Flip the colormap.
    pub reverse: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            colormap: Colormap::default(),
            normalization: Normalization::default(),
            vmin: None,
            vmax: None,
            scale: 1,
            reverse: false,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the colormap.
    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    /// Sets the normalization.
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Fixes the value range instead of using the grid's min/max.
    pub fn with_range(mut self, vmin: Option<i32>, vmax: Option<i32>) -> Self {
        self.vmin = vmin;
        self.vmax = vmax;
        self
    }

    /// Sets the pixel upscale factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.scale == 0 || self.scale > MAX_SCALE {
            return Err(Error::InvalidConfig(format!(
                "scale must be in 1..={MAX_SCALE}, got {}",
                self.scale
            )));
        }
        if let (Some(lo), Some(hi)) = (self.vmin, self.vmax) {
            if lo > hi {
                return Err(Error::InvalidConfig(format!(
                    "vmin ({lo}) must not exceed vmax ({hi})"
                )));
            }
        }
        Ok(())
    }
}
