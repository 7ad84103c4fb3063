use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sector and hex location lookups
#[derive(Debug, Parser)]
#[command(name = "astrometry", version)]
pub struct Args {
    /// JSON sector catalog used to resolve sector names
    #[arg(long, short, env = "ASTROMETRY_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Describe a four digit hex token
    Hex { token: String },

    /// Resolve a sector name and hex token into a location
    Locate {
        #[arg(long)]
        sector: String,
        #[arg(long)]
        hex: String,
        /// Fail on unknown sectors and malformed hexes instead of degrading
        #[arg(long)]
        strict: bool,
    },

    /// Parsecs between two locations
    Distance {
        from_sector: String,
        from_hex: String,
        to_sector: String,
        to_hex: String,
    },

    /// Sort "SECTOR HEX" lines read from stdin, sector first then hex
    Sort,
}
