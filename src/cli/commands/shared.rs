//! Shared components for CLI commands
//!
//! This module contains the run summary, log setup and the extraction
//! pipeline used by every command.

use crate::app::adapters::page_source::{PageSource, load_page};
use crate::app::services::markup::HtmlTokenizer;
use crate::app::services::record_assembler::{AssemblyResult, RecordAssembler};
use crate::cli::args::SourceArgs;
use crate::config::Config;
use crate::{Error, Result};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of one command run, used for the process exit status
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Downstream channels extracted
    pub downstream_channels: usize,
    /// Upstream channels extracted
    pub upstream_channels: usize,
    /// Cells that failed to parse
    pub field_errors: usize,
    /// Records written to stdout
    pub lines_written: usize,
    /// Whether field errors should fail the run
    pub fail_on_field_errors: bool,
    /// Total run time
    pub processing_time: Duration,
}

impl RunSummary {
    /// Build a summary from an assembly result
    pub fn from_result(result: &AssemblyResult) -> Self {
        Self {
            downstream_channels: result.stats.downstream_channels,
            upstream_channels: result.stats.upstream_channels,
            field_errors: result.stats.field_errors,
            ..Default::default()
        }
    }

    /// Process exit code for this run
    pub fn exit_code(&self) -> i32 {
        if self.fail_on_field_errors && self.field_errors > 0 {
            2
        } else {
            0
        }
    }
}

/// Set up structured logging on stderr; stdout carries only records
pub fn setup_logging(args: &SourceArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("modem_stats={}", log_level)));

    let init = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    init.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the page from `source` and assemble its channel records
///
/// The whole page is read before assembly starts, and assembly completes
/// before anything is written, so a failure never produces partial output.
pub async fn extract(source: &PageSource, config: &Config) -> Result<(AssemblyResult, Duration)> {
    let start_time = Instant::now();

    let page = load_page(source, config.timeout()).await?;
    let result = RecordAssembler::new().assemble(HtmlTokenizer::new(&page))?;

    let elapsed = start_time.elapsed();
    info!(
        "Extracted {} channels from {} in {:.2}s",
        result.report.channel_count(),
        source,
        elapsed.as_secs_f64()
    );
    Ok((result, elapsed))
}
