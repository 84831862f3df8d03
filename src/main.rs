// SPDX-License-Identifier: PMPL-1.0-or-later
//! Pagebot CLI - Live Page Accessibility Auditor
//!
//! Part of the gitbot-fleet ecosystem.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use pagebot::config::{self, AuditConfig};
use pagebot::fetch;
use pagebot::report::{self, OutputFormat};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Live page accessibility auditor for gitbot-fleet
#[derive(Parser)]
#[command(name = "pagebot")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a page and print the findings report
    Audit {
        /// URL to audit (http or https)
        url: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file (platform config dir if not specified)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fetch timeout in seconds (overrides config)
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Print the numeric accessibility score for a page
    Score {
        /// URL to audit (http or https)
        url: String,

        /// Exit non-zero when the score is below this threshold
        #[arg(long, default_value_t = 0)]
        min_score: u32,

        /// Config file (platform config dir if not specified)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fetch timeout in seconds (overrides config)
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Write a default config file
    Init {
        /// Config file format
        #[arg(long, value_enum, default_value_t = ConfigFormatArg::Yaml)]
        format: ConfigFormatArg,

        /// Config file to write (platform config dir if not specified)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Config file format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConfigFormatArg {
    Yaml,
    Toml,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pagebot=debug")
    } else {
        EnvFilter::new("pagebot=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Load config from the given path (or the default location) and apply
/// command-line overrides
fn resolve_config(path: Option<&Path>, timeout_secs: Option<u64>) -> anyhow::Result<AuditConfig> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_config_path);

    let mut cfg = config::load_config(&path)?;
    if let Some(secs) = timeout_secs {
        cfg.timeout_secs = secs;
    }

    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit { url, format, output, config, timeout_secs, verbose } => {
            init_logging(verbose);
            fetch::validate_url(&url).with_context(|| format!("Invalid URL: {}", url))?;

            let cfg = resolve_config(config.as_deref(), timeout_secs)?;
            let findings = pagebot::analyze_url(&url, &cfg);
            let rendered = report::generate_report(&url, &findings, format.into());
            write_output(&rendered, output.as_deref())?;

            if !findings.is_empty() {
                std::process::exit(1);
            }
        }

        Commands::Score { url, min_score, config, timeout_secs, verbose } => {
            init_logging(verbose);
            fetch::validate_url(&url).with_context(|| format!("Invalid URL: {}", url))?;

            let cfg = resolve_config(config.as_deref(), timeout_secs)?;
            let findings = pagebot::analyze_url(&url, &cfg);
            let score = report::accessibility_score(&findings);
            println!("{}", score);

            if score < min_score {
                std::process::exit(1);
            }
        }

        Commands::Init { format, path } => {
            let base = path.unwrap_or_else(config::default_config_path);
            let path = match format {
                ConfigFormatArg::Yaml => base,
                ConfigFormatArg::Toml => base.with_extension("toml"),
            };
            config::write_default_config(&path)?;
            eprintln!("Config written to {}", path.display());
        }
    }

    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
