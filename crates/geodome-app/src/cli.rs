use std::path::PathBuf;

use clap::Parser;
use geodome_config::DomeConfig;

/// Geodome: an exploded geodesic shell lit by colored point lights.
#[derive(Parser, Debug)]
#[command(name = "geodome", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug`, `geodome_renderer=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seed for the face skew and camera start phase.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Subdivision depth override.
    #[arg(long)]
    pub detail: Option<u32>,

    /// Print the effective config as TOML and exit.
    #[arg(long)]
    pub dump_config: bool,

    /// Save the effective config to this path and exit.
    #[arg(long, value_name = "PATH")]
    pub write_config: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut DomeConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(detail) = self.detail {
            config.shape.detail = detail;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
