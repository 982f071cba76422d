//! Linkprism main entry point
//!
//! This is the command-line interface for the Linkprism URL classifier.

use clap::Parser;
use linkprism::analysis::{group_by_category, group_by_media_type, group_by_platform};
use linkprism::config::{
    load_config_with_hash, resolve_filter, Config, GroupKey, OutputFormat, UrlFilter,
};
use linkprism::input::read_url_list;
use linkprism::output::{
    compute_statistics, create_handler, format_groups, generate_markdown_report,
    print_statistics, ReportMetadata,
};
use linkprism::{analyze, LinkprismError, UrlAnalysis};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Linkprism: URL platform and media classifier
///
/// Linkprism checks whether strings are URLs, identifies the web platform
/// each one belongs to, detects linked media types and extracts content
/// identifiers. Nothing is fetched.
#[derive(Parser, Debug)]
#[command(name = "linkprism")]
#[command(version = "1.0.0")]
#[command(about = "URL platform and media classifier", long_about = None)]
struct Cli {
    /// URLs to analyze
    #[arg(value_name = "URLS")]
    urls: Vec<String>,

    /// Read URLs from a file, one per line ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print analyses as JSON lines
    #[arg(long)]
    json: bool,

    /// Print URLs grouped by this key instead of one analysis per URL
    #[arg(long, value_enum, value_name = "KEY")]
    group_by: Option<GroupKey>,

    /// Print batch statistics
    #[arg(long)]
    stats: bool,

    /// Write a markdown report to this file
    #[arg(long, value_name = "FILE")]
    markdown: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Settings after command-line flags are applied over the file
struct Settings {
    format: OutputFormat,
    show_summary: bool,
    group_by: Option<GroupKey>,
    markdown_path: Option<PathBuf>,
    filter: UrlFilter,
}

impl Settings {
    fn new(cli: &Cli, config: Config) -> linkprism::Result<Self> {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            config.output.format
        };

        Ok(Self {
            format,
            show_summary: config.output.show_summary,
            group_by: cli.group_by.or(config.group.by),
            markdown_path: cli
                .markdown
                .clone()
                .or_else(|| config.output.markdown_path.map(PathBuf::from)),
            filter: resolve_filter(&config.filter)?,
        })
    }
}

fn main() -> linkprism::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, if one was given
    let (config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    (cfg, Some(hash))
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => (Config::default(), None),
    };

    let settings = Settings::new(&cli, config)?;

    let inputs = match collect_inputs(&cli) {
        Ok(inputs) => inputs,
        Err(e) => {
            tracing::error!("Failed to read input: {}", e);
            return Err(e.into());
        }
    };

    if inputs.is_empty() {
        tracing::error!("No URLs given");
        return Err(LinkprismError::NoInput);
    }

    let analyses: Vec<UrlAnalysis> = inputs
        .iter()
        .map(|input| analyze(input))
        .filter(|analysis| settings.filter.matches(analysis))
        .collect();

    tracing::info!(
        "Analyzed {} inputs, {} match the filter",
        inputs.len(),
        analyses.len()
    );

    match settings.group_by {
        Some(key) => print_groups(key, &analyses)?,
        None => print_analyses(&settings, &analyses)?,
    }

    if cli.stats {
        println!();
        print_statistics(&compute_statistics(&analyses));
    }

    if let Some(path) = &settings.markdown_path {
        write_report(path, &analyses, config_hash)?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkprism=info,warn"),
            1 => EnvFilter::new("linkprism=debug,info"),
            2 => EnvFilter::new("linkprism=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Gathers inputs from the command line, then from the input file
fn collect_inputs(cli: &Cli) -> std::io::Result<Vec<String>> {
    let mut inputs = cli.urls.clone();

    if let Some(path) = &cli.input {
        tracing::info!("Reading URLs from: {}", path.display());
        inputs.extend(read_url_list(path)?);
    }

    Ok(inputs)
}

/// Prints one analysis per URL in the configured format
fn print_analyses(settings: &Settings, analyses: &[UrlAnalysis]) -> linkprism::Result<()> {
    let stdout = std::io::stdout();
    let mut handler = create_handler(settings.format, stdout.lock(), settings.show_summary);

    for analysis in analyses {
        handler.record_analysis(analysis)?;
    }
    handler.finalize()?;

    Ok(())
}

/// Prints the URLs grouped by the given key
fn print_groups(key: GroupKey, analyses: &[UrlAnalysis]) -> linkprism::Result<()> {
    let urls = analyses.iter().map(|a| a.original_url.as_str());

    let text = match key {
        GroupKey::Platform => format_groups(&group_by_platform(urls)),
        GroupKey::Category => format_groups(&group_by_category(urls)),
        GroupKey::MediaType => format_groups(&group_by_media_type(urls)),
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Writes the markdown report
fn write_report(
    path: &Path,
    analyses: &[UrlAnalysis],
    config_hash: Option<String>,
) -> linkprism::Result<()> {
    let stats = compute_statistics(analyses);
    let metadata = ReportMetadata::now(config_hash);

    match generate_markdown_report(analyses, &stats, &metadata, path) {
        Ok(()) => {
            tracing::info!("Markdown report written to: {}", path.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to write markdown report: {}", e);
            Err(e.into())
        }
    }
}
