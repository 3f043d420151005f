//! Validate command implementation
//!
//! Runs the full extraction and reports every cell that failed to parse,
//! without writing any records.

use super::shared::{RunSummary, extract, setup_logging};
use crate::app::adapters::page_source::PageSource;
use crate::app::services::field_normalizer::FieldParseError;
use crate::app::services::record_assembler::{AssemblyResult, AssemblyStats};
use crate::cli::args::{ReportFormat, ValidateArgs};
use crate::Result;
use colored::*;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Machine-readable validation report
#[derive(Debug, Serialize)]
pub struct ValidationReport<'a> {
    pub source: String,
    pub passed: bool,
    pub stats: &'a AssemblyStats,
    pub field_errors: &'a [FieldParseError],
}

impl<'a> ValidationReport<'a> {
    pub fn new(source: &PageSource, result: &'a AssemblyResult) -> Self {
        Self {
            source: source.to_string(),
            passed: result.is_clean(),
            stats: &result.stats,
            field_errors: &result.diagnostics,
        }
    }
}

/// Validate command runner
///
/// Field errors are reported and make the run fail; structural errors abort
/// before any report is printed.
pub async fn run_validate(args: ValidateArgs) -> Result<RunSummary> {
    setup_logging(&args.source)?;
    debug!("Validate arguments: {:?}", args);

    args.source.validate()?;
    let config = args.resolve_config()?;
    let source = args.source.page_source(&config);

    info!("Validating status page from {}", source);
    let (result, elapsed) = extract(&source, &config).await?;
    let report = ValidationReport::new(&source, &result);

    match args.output_format {
        ReportFormat::Human => print_human_report(&report),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    info!(
        "Validation completed in {:.2}s: {:.1}% of cells parsed",
        elapsed.as_secs_f64(),
        result.stats.success_rate()
    );

    Ok(validation_summary(&result, elapsed))
}

/// Summary of a validation run; no records are written and field errors fail it
fn validation_summary(result: &AssemblyResult, elapsed: Duration) -> RunSummary {
    RunSummary {
        fail_on_field_errors: true,
        processing_time: elapsed,
        ..RunSummary::from_result(result)
    }
}

/// Print a human-readable validation report
fn print_human_report(report: &ValidationReport<'_>) {
    let stats = report.stats;

    println!("{}", "Modem Status Page Validation".bold());
    println!("============================");
    println!("Source: {}", report.source);
    println!();

    if report.passed {
        println!("Status: {}", "PASS".green().bold());
    } else {
        println!("Status: {}", "FAIL".red().bold());
    }

    println!();
    println!("Summary:");
    println!("   • Downstream channels: {}", stats.downstream_channels);
    println!("   • Upstream channels: {}", stats.upstream_channels);
    println!(
        "   • Rows read: {} ({} skipped)",
        stats.rows_read, stats.rows_skipped
    );
    println!(
        "   • Cells parsed: {} ({:.1}% success rate)",
        stats.cells_parsed,
        stats.success_rate()
    );

    if report.field_errors.is_empty() {
        println!();
        println!("{}", "No field errors found".green());
        return;
    }

    println!();
    println!(
        "{}",
        format!("Field errors: {}", report.field_errors.len()).yellow()
    );
    for error in report.field_errors {
        println!("   • {} (raw {:?})", error, error.raw);
    }
}
