//! Collect command implementation
//!
//! Loads the status page, assembles the channel records and writes them to
//! stdout, downstream channels first.

use super::shared::{RunSummary, extract, setup_logging};
use crate::app::models::ChannelReport;
use crate::app::services::line_protocol::LineProtocolEncoder;
use crate::cli::args::{CollectArgs, OutputFormat};
use crate::{Error, Result};
use std::io::Write;
use tracing::{debug, info, warn};

/// Collect command runner
pub async fn run_collect(args: CollectArgs) -> Result<RunSummary> {
    setup_logging(&args.source)?;
    debug!("Collect arguments: {:?}", args);

    args.source.validate()?;
    let config = args.resolve_config()?;
    let source = args.source.page_source(&config);

    let (result, elapsed) = extract(&source, &config).await?;
    if !result.is_clean() {
        warn!(
            "{} cells failed to parse and were written as zero",
            result.diagnostics.len()
        );
    }

    let stdout = std::io::stdout();
    let mut sink = stdout.lock();
    let lines_written = write_report(
        &result.report,
        args.format,
        &config.output.measurement,
        &mut sink,
    )?;

    info!("Wrote {} records", lines_written);

    Ok(RunSummary {
        lines_written,
        processing_time: elapsed,
        ..RunSummary::from_result(&result)
    })
}

/// Render `report` in `format` to `sink`, returning the number of records written
pub fn write_report<W: Write>(
    report: &ChannelReport,
    format: OutputFormat,
    measurement: &str,
    sink: &mut W,
) -> Result<usize> {
    match format {
        OutputFormat::LineProtocol => {
            LineProtocolEncoder::new(measurement).write_report(report, sink)
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *sink, report)?;
            writeln!(sink).map_err(|e| Error::io("Failed to write JSON report", e))?;
            Ok(report.channel_count())
        }
    }
}
