use anyhow::Context;
use astrometry::cli::args::Args;
use astrometry::cli::commands;
use astrometry::io::TerminalIO;
use astrometry::SectorCatalog;
use clap::Parser;
use env_logger::Env;
use log::debug;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };
    env_logger::init_from_env(Env::default().default_filter_or(default_filter));

    let catalog = match &args.catalog {
        Some(path) => SectorCatalog::load(path)
            .with_context(|| format!("failed to load sector catalog {}", path.display()))?,
        None => {
            debug!("no sector catalog given, sector names will not resolve");
            SectorCatalog::new()
        }
    };

    let mut input = TerminalIO;
    let mut output = TerminalIO;
    commands::run(&args.command, &catalog, &mut input, &mut output)?;
    Ok(())
}
