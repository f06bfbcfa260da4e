//! CLI entrypoint for Idea Quorum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use idea_application::{CompositeNotifier, RunSessionUseCase};
use idea_infrastructure::{ConfigLoader, FileConfig, InMemorySessionStore, JsonlSessionEventLog};
use idea_presentation::{
    Cli, DemoRunner, FacilitatorRepl, OutputConfig, ProgressReporter, ReplConfig, SimpleProgress,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };
    config.validate().context("invalid configuration")?;

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting Idea Quorum");

    let output = OutputConfig {
        format: config.output.resolve_format(cli.output),
        color: config.output.color,
    };
    if !output.color {
        colored::control::set_override(false);
    }
    let repl_config = ReplConfig {
        show_progress: config.repl.progress_enabled(cli.quiet),
        history_file: config.repl.history_file.clone(),
    };

    // === Dependency Injection ===
    let mut notifier = CompositeNotifier::default();
    if let Some(path) = cli.event_log.as_ref().or(config.logging.event_log.as_ref()) {
        match JsonlSessionEventLog::open(path) {
            Some(log) => {
                info!("Recording session events to {}", log.path().display());
                notifier.push(Arc::new(log));
            }
            None => warn!("Session events will not be recorded"),
        }
    }

    let store = Arc::new(InMemorySessionStore::new());
    let params = config.session.to_session_params();

    // Demo mode
    if let Some(participants) = cli.demo {
        if repl_config.show_progress && output.format == idea_domain::OutputFormat::Text {
            notifier.push(Arc::new(ProgressReporter::new()));
        }
        let use_case = RunSessionUseCase::new(store)
            .with_params(params)
            .with_notifier(Arc::new(notifier));

        let report = DemoRunner::new(use_case)
            .run(usize::from(participants))
            .await
            .context("demo session failed")?;
        println!("{}", report.render(output.format));
        return Ok(());
    }

    // Facilitator console
    if repl_config.show_progress {
        notifier.push(Arc::new(SimpleProgress));
    }
    let use_case = RunSessionUseCase::new(store)
        .with_params(params)
        .with_notifier(Arc::new(notifier));

    let mut repl = FacilitatorRepl::new(use_case)
        .with_output_format(output.format)
        .with_config(repl_config);
    repl.run().await?;

    Ok(())
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over `-v`. With a log file configured the
/// same events are also written there through a non-blocking writer.
fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match file {
        Some(path) => {
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("invalid log file path: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}
