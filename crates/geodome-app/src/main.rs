mod app_state;
mod cli;

use geodome_common::ConfigError;
use geodome_config::DomeConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

/// Load the config from `--config` or the platform default location.
///
/// An explicit path must load. A failure at the default location falls
/// back to defaults and is handed back so it can be logged.
fn resolve_config(args: &cli::Args) -> Result<(DomeConfig, Option<ConfigError>), ConfigError> {
    match &args.config {
        Some(path) => Ok((geodome_config::toml_loader::load_from_path(path)?, None)),
        None => match geodome_config::load_config() {
            Ok(config) => Ok((config, None)),
            Err(e) => Ok((DomeConfig::default(), Some(e))),
        },
    }
}

/// Handle `--write-config` and `--dump-config`. Returns `true` when the
/// process should exit instead of opening a window.
fn export_config(args: &cli::Args, config: &DomeConfig) -> Result<bool, ConfigError> {
    if let Some(path) = &args.write_config {
        geodome_config::save_config_to_path(config, path)?;
        tracing::info!("Config written to {}", path.display());
    }
    if args.dump_config {
        print!("{}", geodome_config::config_to_toml(config)?);
    }
    Ok(args.write_config.is_some() || args.dump_config)
}

/// `--log-level` wins, then `RUST_LOG`, then `logging.level` from the config.
fn log_filter(args: &cli::Args, config: &DomeConfig) -> EnvFilter {
    let fallback = config.logging.level.as_directive();
    match &args.log_level {
        Some(directive) => {
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(fallback))
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
    }
}

fn main() {
    let args = cli::parse();

    // Config is read before logging so `logging.level` can take effect
    let resolved = resolve_config(&args);
    let mut config = match &resolved {
        Ok((config, _)) => config.clone(),
        Err(_) => DomeConfig::default(),
    };
    args.apply_overrides(&mut config);

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&args, &config))
        .init();

    tracing::info!("Geodome v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    match resolved {
        Ok((_, Some(e))) => tracing::warn!("Config load failed, using defaults: {e}"),
        Ok((_, None)) => {}
        Err(e) => {
            tracing::error!("Config load failed: {e}");
            std::process::exit(1);
        }
    }

    if let Err(e) = geodome_config::validation::validate(&config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }

    match export_config(&args, &config) {
        Ok(true) => return,
        Ok(false) => {}
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }

    tracing::info!(
        "Config loaded (detail: {}, lights: {}, seed: {:?})",
        config.shape.detail,
        config.lights.len(),
        config.seed
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    // Continuous animation: never sleep between frames
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = app_state::GeodomeApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
