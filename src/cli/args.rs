//! Command-line argument definitions for modem stats
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::adapters::page_source::PageSource;
use crate::config::Config;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the modem stats collector
///
/// Reads the signal status page of a DOCSIS cable modem and writes one
/// line protocol record per downstream and upstream channel.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "modem-stats",
    version,
    about = "Extract cable modem channel statistics as line protocol",
    long_about = "Reads the signal status page served by a DOCSIS cable modem, extracts the \
                  downstream, upstream and codeword tables, and writes one line protocol record \
                  per channel to stdout for time-series ingestion."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract channel records and write them to stdout
    Collect(CollectArgs),
    /// Extract channel records and report every cell that failed to parse
    Validate(ValidateArgs),
}

/// Page source, configuration and logging flags shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct SourceArgs {
    /// Status page URL
    ///
    /// Overrides source.url from the configuration file and MODEM_STATS_URL.
    #[arg(long = "url", value_name = "URL", help = "Status page URL")]
    pub url: Option<String>,

    /// Read a saved status page instead of fetching it
    ///
    /// Use `-` to read the page from standard input.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        conflicts_with = "url",
        help = "Read the status page from a file ('-' for stdin)"
    )]
    pub input: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout", value_name = "SECS", help = "HTTP request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/modem-stats/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the collect command
#[derive(Debug, Clone, Parser)]
pub struct CollectArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Record output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "line-protocol",
        help = "Output format for channel records"
    )]
    pub format: OutputFormat,

    /// Line protocol measurement name
    ///
    /// Overrides output.measurement from the configuration file and
    /// MODEM_STATS_MEASUREMENT.
    #[arg(
        short = 'm',
        long = "measurement",
        value_name = "NAME",
        help = "Line protocol measurement name"
    )]
    pub measurement: Option<String>,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format for the validation report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation report"
    )]
    pub output_format: ReportFormat,
}

/// Channel record output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line protocol record per channel
    LineProtocol,
    /// The whole report as a JSON document
    Json,
}

/// Validation report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary
    Human,
    /// JSON format for scripting
    Json,
}

impl SourceArgs {
    /// Validate the shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if self.timeout_secs == Some(0) {
            return Err(Error::configuration(
                "Timeout must be greater than 0 seconds".to_string(),
            ));
        }

        Ok(())
    }

    /// Load the layered configuration and apply command-line overrides
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config_file.as_deref())?;

        if let Some(url) = &self.url {
            config = config.with_url(url.clone());
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config = config.with_timeout_secs(timeout_secs);
        }

        Ok(config)
    }

    /// Where the page is read from: `--input` wins over the configured URL
    pub fn page_source(&self, config: &Config) -> PageSource {
        match &self.input {
            Some(input) => PageSource::from_input(input.clone()),
            None => PageSource::Url(config.source.url.clone()),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl CollectArgs {
    /// Resolve configuration including the measurement override
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = self.source.resolve_config()?;
        if let Some(measurement) = &self.measurement {
            config = config.with_measurement(measurement.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

impl ValidateArgs {
    pub fn resolve_config(&self) -> Result<Config> {
        let config = self.source.resolve_config()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn test_no_subcommand() {
        assert!(parse(&["modem-stats"]).command.is_none());
    }

    #[test]
    fn test_collect_defaults() {
        let args = parse(&["modem-stats", "collect"]);
        let Some(Commands::Collect(collect)) = args.command else {
            panic!("expected collect command");
        };
        assert_eq!(collect.format, OutputFormat::LineProtocol);
        assert!(collect.measurement.is_none());
        assert_eq!(collect.source.get_log_level(), "warn");
    }

    #[test]
    fn test_collect_flags() {
        let args = parse(&[
            "modem-stats",
            "collect",
            "-i",
            "page.htm",
            "--format",
            "json",
            "-m",
            "channelstats",
            "-vv",
        ]);
        let Some(Commands::Collect(collect)) = args.command else {
            panic!("expected collect command");
        };
        assert_eq!(collect.format, OutputFormat::Json);
        assert_eq!(collect.measurement.as_deref(), Some("channelstats"));
        assert_eq!(collect.source.get_log_level(), "debug");
        assert_eq!(
            collect.source.page_source(&Config::default()),
            PageSource::File(PathBuf::from("page.htm"))
        );
    }

    #[test]
    fn test_url_and_input_conflict() {
        let result = Args::try_parse_from([
            "modem-stats",
            "collect",
            "--url",
            "http://10.0.0.1/",
            "--input",
            "page.htm",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        assert!(Args::try_parse_from(["modem-stats", "validate", "-q", "-v"]).is_err());

        let args = parse(&["modem-stats", "validate", "-q", "--output-format", "json"]);
        let Some(Commands::Validate(validate)) = args.command else {
            panic!("expected validate command");
        };
        assert_eq!(validate.source.get_log_level(), "error");
        assert_eq!(validate.output_format, ReportFormat::Json);
    }

    #[test]
    fn test_stdin_input() {
        let args = parse(&["modem-stats", "collect", "-i", "-"]);
        let Some(Commands::Collect(collect)) = args.command else {
            panic!("expected collect command");
        };
        assert_eq!(collect.source.page_source(&Config::default()), PageSource::Stdin);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let args = parse(&["modem-stats", "collect", "--timeout", "0"]);
        let Some(Commands::Collect(collect)) = args.command else {
            panic!("expected collect command");
        };
        assert!(collect.source.validate().is_err());
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let args = parse(&["modem-stats", "collect", "-c", missing.to_str().unwrap()]);
        let Some(Commands::Collect(collect)) = args.command else {
            panic!("expected collect command");
        };
        assert!(matches!(
            collect.source.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_measurement_override_is_validated() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "[output]\nmeasurement = \"from_file\"\n").unwrap();

        let args = parse(&[
            "modem-stats",
            "collect",
            "-c",
            config.to_str().unwrap(),
            "-m",
            "bad name",
        ]);
        let Some(Commands::Collect(collect)) = args.command else {
            panic!("expected collect command");
        };
        assert!(collect.resolve_config().is_err());
    }
}
