use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use field_view::prelude::{ByteOrder, Colormap, Normalization, RenderConfig};
use serde::{Deserialize, Serialize};

/// Render a binary 2D scalar field file as a color-mapped image.
#[derive(Parser, Debug, Clone)]
#[command(name = "field-view", version, about)]
pub struct Args {
    /// Field file: nx, ny (i32), x[nx], y[ny] (f32), grid[nx*ny] (i32).
    pub input: PathBuf,

    /// Write a PNG here instead of opening a window.
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// RON file with viewer settings; command line flags take precedence.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// viridis, magma, inferno or grayscale.
    #[arg(short, long)]
    pub colormap: Option<Colormap>,

    /// linear or log.
    #[arg(short, long)]
    pub normalization: Option<Normalization>,

    /// Value mapped to the low end of the colormap.
    #[arg(long, allow_hyphen_values = true)]
    pub vmin: Option<i32>,

    /// Value mapped to the high end of the colormap.
    #[arg(long, allow_hyphen_values = true)]
    pub vmax: Option<i32>,

    /// Pixels per grid cell along each axis.
    #[arg(short, long)]
    pub scale: Option<u32>,

    /// Flip the colormap.
    #[arg(long)]
    pub reverse: bool,

    /// Byte order of the input file: little, big or native.
    #[arg(short, long)]
    pub byte_order: Option<ByteOrder>,
}

/// Settings that can be stored in a `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub byte_order: ByteOrder,
    pub render: RenderConfig,
}

impl ViewerConfig {
    pub fn from_ron(text: &str) -> anyhow::Result<Self> {
        ron::de::from_str(text).map_err(|e| anyhow::anyhow!(e))
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config '{}'", path.display()))?;
        Self::from_ron(&text).with_context(|| format!("invalid config '{}'", path.display()))
    }
}

impl Args {
    /// Effective settings: the config file (if any) overridden by explicit flags.
    pub fn resolve(&self) -> anyhow::Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::from_file(path)?,
            None => ViewerConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.render.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut ViewerConfig) {
        if let Some(order) = self.byte_order {
            config.byte_order = order;
        }
        let render = &mut config.render;
        if let Some(colormap) = self.colormap {
            render.colormap = colormap;
        }
        if let Some(normalization) = self.normalization {
            render.normalization = normalization;
        }
        if self.vmin.is_some() {
            render.vmin = self.vmin;
        }
        if self.vmax.is_some() {
            render.vmax = self.vmax;
        }
        if let Some(scale) = self.scale {
            render.scale = scale;
        }
        render.reverse |= self.reverse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let args = Args::try_parse_from(["field-view", "out.dat"]).unwrap();
        assert_eq!(args.input, PathBuf::from("out.dat"));
        assert!(args.output.is_none());
        assert_eq!(args.resolve().unwrap(), ViewerConfig::default());
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "field-view",
            "out.dat",
            "-o",
            "out.png",
            "--colormap",
            "magma",
            "--normalization",
            "log",
            "--vmin",
            "-5",
            "--vmax",
            "200",
            "--scale",
            "3",
            "--reverse",
            "--byte-order",
            "big",
        ])
        .unwrap();
        let config = args.resolve().unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.png")));
        assert_eq!(config.byte_order, ByteOrder::Big);
        assert_eq!(
            config.render,
            RenderConfig::new()
                .with_colormap(Colormap::Magma)
                .with_normalization(Normalization::Log)
                .with_range(Some(-5), Some(200))
                .with_scale(3)
                .with_reverse(true)
        );
    }

    #[test]
    fn rejects_unknown_colormap_and_missing_input() {
        assert!(Args::try_parse_from(["field-view", "a.dat", "--colormap", "jet"]).is_err());
        assert!(Args::try_parse_from(["field-view"]).is_err());
    }

    #[test]
    fn invalid_flag_combination_fails_validation() {
        let args =
            Args::try_parse_from(["field-view", "a.dat", "--vmin", "9", "--vmax", "1"]).unwrap();
        assert!(args.resolve().is_err());
    }

    #[test]
    fn ron_config_with_overrides() {
        let mut config = ViewerConfig::from_ron(
            "(byte_order: native, render: (colormap: inferno, scale: 4, vmax: Some(80)))",
        )
        .unwrap();
        assert_eq!(config.byte_order, ByteOrder::Native);
        assert_eq!(config.render.colormap, Colormap::Inferno);
        assert_eq!(config.render.scale, 4);
        assert_eq!(config.render.vmax, Some(80));
        assert_eq!(config.render.normalization, Normalization::Linear);

        let args = Args::try_parse_from(["field-view", "a.dat", "--scale", "2"]).unwrap();
        args.apply_overrides(&mut config);
        assert_eq!(config.render.scale, 2);
        assert_eq!(config.render.colormap, Colormap::Inferno);
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(ViewerConfig::from_ron("(render: (scale: \"big\"))").is_err());
    }
}
