use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use aqua_identity::HttpIdentityService;
use aqua_ui::app::AquaApp;
use aqua_ui::config;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Aquarium calculator with water volume, fish stocking, and diet tabs,
/// plus a password reset flow against the configured identity service.
#[derive(Debug, Parser)]
struct Cli {
    /// Identity service base URL. Overrides the config file.
    #[arg(long)]
    service_url: Option<String>,

    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level or filter directive (e.g. `debug`, `info,aqua_core=trace`).
    /// Takes precedence over RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Picks the active log filter: the CLI flag when given, otherwise `RUST_LOG`,
/// otherwise `info` so normal runs are quiet.
fn log_filter(cli_level: Option<&str>) -> EnvFilter {
    match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info")),
    }
}

/// Initialise the tracing subscriber.
///
/// Strips timestamps and target names to keep output clean.
fn init_tracing(cli_level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli_level))
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_deref());

    let mut settings = config::load_or_default(cli.config.as_deref())?;
    if let Some(url) = cli.service_url {
        settings.service_url = url;
    }
    debug!("identity service at {}", settings.service_url);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let service = Arc::new(HttpIdentityService::new(&settings.identity())?);

    info!("starting AquaCalc");
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "AquaCalc",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(AquaApp::new(
                cc.egui_ctx.clone(),
                runtime,
                service,
                settings,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_level_takes_precedence() {
        assert_eq!(log_filter(Some("debug")).to_string(), "debug");
        assert_eq!(log_filter(Some("warn")).to_string(), "warn");
    }

    #[test]
    fn cli_level_accepts_full_directives() {
        let filter = log_filter(Some("info,aqua_core=trace")).to_string();
        assert!(filter.contains("aqua_core=trace"), "got: {filter}");
    }
}
