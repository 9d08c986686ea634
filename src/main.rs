//! Main entry point for the lnk CLI application.

use anyhow::Context;
use clap::Parser;
use lnk::{app::App, cli::Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = lnk::cli::Config::from_args(args)?;
    let input = config.input_file.display().to_string();
    let app = App::new(config);
    app.run().with_context(|| format!("Failed to decode {}", input))
}
