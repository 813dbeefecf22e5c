use clap::Parser;
use field_view_cli::{init_tracing, run, Args};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    run(&args)
}
