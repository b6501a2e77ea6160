use std::io::Read;

use anyhow::Result;
use reqwest::Url;

use crate::nu::reports::pretty_print::{
    message_table, pretty_print_report, print_validation_summary,
};
use crate::nu::{NuValidator, ValidationReport, ValidationRequest};

/// How the CLI should render a report's messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Full per-message reports with highlighted extracts.
    Pretty,
    /// One compact table row per message.
    Table,
    /// Summary line only.
    Quiet,
}

/// Upload the contents of `input` for checking and print the outcome.
pub fn check_content<R: Read>(
    validator: &NuValidator,
    input: &mut R,
    request: &ValidationRequest,
    filename: &str,
    style: OutputStyle,
) -> Result<ValidationReport> {
    let report = validator.validate_content(input, request)?;
    print_report(&report, filename, style)?;
    Ok(report)
}

/// Ask the service to check the document at `document_url` and print the
/// outcome.
pub fn check_uri(
    validator: &NuValidator,
    document_url: &Url,
    request: &ValidationRequest,
    style: OutputStyle,
) -> Result<ValidationReport> {
    let report = validator.validate_uri(document_url, request)?;
    print_report(&report, document_url.as_str(), style)?;
    Ok(report)
}

fn print_report(report: &ValidationReport, filename: &str, style: OutputStyle) -> Result<()> {
    match style {
        OutputStyle::Quiet => {}
        OutputStyle::Table => {
            if !report.messages().is_empty() {
                println!("{}", message_table(report));
            }
        }
        OutputStyle::Pretty => {
            let pretty = pretty_print_report(report, filename)
                .map_err(|e| anyhow::anyhow!("Error generating report: {}", e))?;
            if !pretty.is_empty() {
                print!("{}", pretty);
            }
        }
    }

    print_validation_summary(report);

    Ok(())
}
