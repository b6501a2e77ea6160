use serde::Deserialize;
use tracing::debug;

use crate::nu::errors::ValidatorError;
use crate::nu::messages::Message;
use crate::nu::report::ValidationReport;

/// Wire shape of the service's `out=json` response body.
///
/// Only `messages` feeds the report. The service also sends top-level
/// fields like `url`; those are ignored here, as are unknown fields on
/// the individual messages.
#[derive(Debug, Deserialize)]
struct JsonOutput {
    messages: Vec<Message>,
}

/// Decode a raw response body into a [`ValidationReport`].
///
/// Decoding is all-or-nothing: any missing required field anywhere in the
/// payload rejects the whole body with
/// [`ValidatorError::MalformedResponse`].
pub fn parse_json_output(raw: &str) -> Result<ValidationReport, ValidatorError> {
    let decoded: JsonOutput = serde_json::from_str(raw)
        .map_err(|e| ValidatorError::MalformedResponse(e.to_string()))?;

    debug!(
        "decoded validator response with {} messages",
        decoded.messages.len()
    );

    Ok(ValidationReport::new(decoded.messages, raw.to_string()))
}
