use ariadne::{Color, Label, Report, ReportKind, Source};
use colored::Colorize;
use tabled::{Table, Tabled};

use crate::nu::messages::Message;
use crate::nu::report::ValidationReport;

/// Pretty prints one service message using
/// [ariadne](https://github.com/zesterer/ariadne) for nice formatting.
///
/// When the service attached a source extract with a highlight span, the
/// message is rendered as a full report over that extract; otherwise it
/// falls back to a single summary line.
///
/// Returns a String containing the formatted report, or an error message
/// if formatting fails with a message.
pub fn pretty_print_message(message: &Message, filename: &str) -> Result<String, String> {
    let (kind, color) = message_kind(message);

    let (Some(extract), Some(start), Some(len)) =
        (&message.extract, message.hilite_start, message.hilite_length)
    else {
        return Ok(summary_line(message));
    };

    // The service counts the highlight span in characters, ariadne spans
    // are byte offsets into the source. The span is clamped to the
    // extract, so oversized service values cannot overflow or point past
    // the end.
    let byte_start = char_to_byte(extract, start);
    let byte_end = char_to_byte(extract, start.saturating_add(len));

    let mut buffer = Vec::new();
    Report::build(kind, (filename, byte_start..byte_end))
        .with_message(&message.message)
        .with_label(
            Label::new((filename, byte_start..byte_end))
                .with_message(&message.message)
                .with_color(color),
        )
        .finish()
        .write((filename, Source::from(extract.as_str())), &mut buffer)
        .map_err(|e| e.to_string())?;

    Ok(String::from_utf8_lossy(&buffer).to_string())
}

/// Pretty prints every message of a report, one after the other.
pub fn pretty_print_report(report: &ValidationReport, filename: &str) -> Result<String, String> {
    let mut out = String::new();
    for message in report.messages() {
        out.push_str(&pretty_print_message(message, filename)?);
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }
    Ok(out)
}

/// One-line rendering of a message, used when there is no extract to
/// point into.
fn summary_line(message: &Message) -> String {
    let label = match message.location() {
        Some((line, column)) => format!("{}:{}:{}", message.message_type, line, column),
        None => message.message_type.clone(),
    };
    format!("{}: {}", label, message.message)
}

fn message_kind(message: &Message) -> (ReportKind<'static>, Color) {
    if message.is_error() || message.is_non_document_error() {
        (ReportKind::Error, Color::Red)
    } else if message.is_warning() {
        (ReportKind::Warning, Color::Yellow)
    } else {
        (ReportKind::Advice, Color::Blue)
    }
}

fn char_to_byte(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

#[derive(Tabled)]
struct MessageRow {
    #[tabled(rename = "type")]
    message_type: String,
    #[tabled(rename = "location")]
    location: String,
    message: String,
}

/// Renders a report's messages as a compact table, one row per message,
/// in the order the service reported them.
pub fn message_table(report: &ValidationReport) -> String {
    let rows = report.messages().iter().map(|m| MessageRow {
        message_type: match m.sub_type.as_deref() {
            Some(sub_type) => format!("{} ({})", m.message_type, sub_type),
            None => m.message_type.clone(),
        },
        location: match m.location() {
            Some((line, column)) => format!("{}:{}", line, column),
            None => String::new(),
        },
        message: m.message.clone(),
    });

    Table::new(rows).to_string()
}

/// Summary of a report's verdict, colored for terminal output.
pub fn print_validation_summary(report: &ValidationReport) {
    if report.is_result_indeterminate() {
        println!(
            "{}",
            "The service could not produce a reliable verdict for this document."
                .magenta()
                .bold()
        );
        return;
    }

    let errors = report.error_count();
    let warnings = report.warning_count();
    let errors_part = format!(
        "{} error{}",
        errors,
        if errors == 1 { "" } else { "s" }
    );
    let warnings_part = format!(
        "{} warning{}",
        warnings,
        if warnings == 1 { "" } else { "s" }
    );

    match (errors, warnings) {
        (0, 0) => println!("{}", "Validation success!".green()),
        (0, _) => println!("{}, {}", errors_part.green(), warnings_part.yellow()),
        (_, _) => println!("{}, {}", errors_part.red().bold(), warnings_part.yellow()),
    }
}
