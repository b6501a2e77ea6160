use clap::Parser;
use std::process::exit;
use tracing_subscriber::EnvFilter;

use colored::Colorize;
use nuvalidate::cmd::{self, OutputStyle};
use nuvalidate::env::EnvConfig;
use nuvalidate::nu::{NuValidator, ValidationRequest};
use nuvalidate::path_or_stdio::PathOrStdio;

#[derive(Parser, Debug)]
#[command(version, about = "Check HTML documents with a validator.nu service")]
struct Args {
    /// Document to check: an http(s) URL, a file path, or "-" for stdin
    input: String,
    /// Parser profile to request from the service (e.g. "html5", "html4tr")
    #[arg(short, long)]
    parser: Option<String>,
    /// Character encoding to declare for uploaded content
    #[arg(long)]
    charset: Option<String>,
    /// Base URL of the checker service (overrides NU_SERVICE_URL)
    #[arg(short, long)]
    service: Option<String>,
    /// Render messages as a compact table instead of full reports
    #[arg(short, long)]
    table: bool,
    /// Whether to suppress per-message output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    let args = Args::parse();

    // Load environment configuration
    let env_config = EnvConfig::load();

    let service_url = args
        .service
        .as_deref()
        .unwrap_or_else(|| env_config.service_url());
    let validator = NuValidator::new(service_url)?;

    let mut builder = ValidationRequest::builder();
    if let Some(parser) = args.parser {
        builder.parser(parser);
    }
    if let Some(charset) = args.charset {
        builder.charset(charset);
    }
    let request = builder.build()?;

    let style = if args.quiet {
        OutputStyle::Quiet
    } else if args.table {
        OutputStyle::Table
    } else {
        OutputStyle::Pretty
    };

    let outcome = if args.input.starts_with("http://") || args.input.starts_with("https://") {
        let document_url = reqwest::Url::parse(&args.input)?;
        cmd::check_uri(&validator, &document_url, &request, style)
    } else {
        let input = PathOrStdio::from(args.input.clone());
        let mut reader = input
            .reader()
            .map_err(|e| format!("Failed to open input '{}': {}", input.filepath(), e))?;
        cmd::check_content(&validator, &mut reader, &request, input.filepath(), style)
    };

    match outcome {
        Err(err) => {
            if env_config.is_debug_mode() {
                eprintln!("{:?}", err);
            }
            println!("{}", format!("Error! {}", err).red());
            Err(err.into())
        }
        Ok(report) => {
            if report.is_result_indeterminate() {
                exit(2)
            }
            if report.error_count() > 0 {
                exit(1)
            }
            Ok(())
        }
    }
}
