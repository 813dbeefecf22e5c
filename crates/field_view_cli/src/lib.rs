#![forbid(unsafe_code)]

mod cli;
mod output;

use anyhow::Context;
use field_view::prelude::{load_with, render, RenderConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use cli::{Args, ViewerConfig};
pub use output::save_png;

/// Installs a stderr fmt subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        debug!("Keeping the existing tracing subscriber: {err}");
    }
}

/// Settings for the interactive window.
///
/// The window fits the sprite to the screen with nearest sampling, so pixel
/// replication would only inflate the texture.
pub fn display_config(config: &RenderConfig) -> RenderConfig {
    config.clone().with_scale(1)
}

/// Loads, renders and then shows or saves the field named by `args`.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.resolve()?;

    let field = load_with(&args.input, config.byte_order)
        .with_context(|| format!("failed to load '{}'", args.input.display()))?;
    println!("(Nx,Ny) = ({},{})", field.nx(), field.ny());

    let (lo, hi) = field.grid().min_max();
    info!(
        "Value range {}..{}, extent {:?}.",
        lo,
        hi,
        field.extent().as_tuple()
    );

    match &args.output {
        Some(path) => {
            let image = render(&field, &config.render).context("failed to render field")?;
            save_png(&image, path).context("failed to save image")
        }
        None => {
            let image = render(&field, &display_config(&config.render))
                .context("failed to render field")?;
            let title = format!("field-view: {}", args.input.display());
            bevy_field_view::show(image, title).context("interactive display failed")
        }
    }
}
