//! Command implementations for the modem stats CLI
//!
//! Each command is implemented in its own module:
//! - `collect`: Extract channel records and write them to stdout
//! - `validate`: Extract channel records and report field parse errors
//!
//! Both share page loading, assembly and log setup from `shared`.

pub mod collect;
pub mod shared;
pub mod validate;

pub use shared::RunSummary;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};
use tracing::info;

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<RunSummary> {
    let summary = match args.command {
        Some(Commands::Collect(collect_args)) => collect::run_collect(collect_args).await?,
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args).await?,
        None => return Err(Error::configuration("No command given")),
    };

    info!(
        "Finished in {:.2}s: {} downstream and {} upstream channels, {} records written, {} field errors",
        summary.processing_time.as_secs_f64(),
        summary.downstream_channels,
        summary.upstream_channels,
        summary.lines_written,
        summary.field_errors
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_command_is_error() {
        let err = run(Args { command: None }).await.unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
