use crate::nu::errors::ValidatorError;
use crate::nu::messages::Message;
use crate::nu::parse::parse_json_output;

/// The outcome of one submission to the checker service.
///
/// Holds the service's messages in the order they arrived plus the raw
/// response body. All the derived queries recompute from the message
/// sequence, so they can never drift out of sync with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    messages: Vec<Message>,
    response_content: String,
}

impl ValidationReport {
    pub(crate) fn new(messages: Vec<Message>, response_content: String) -> Self {
        Self {
            messages,
            response_content,
        }
    }

    /// Decode a raw `out=json` response body into a report.
    ///
    /// Fails with [`ValidatorError::MalformedResponse`] when the body is
    /// not JSON, has no `messages` array, or a message is missing its
    /// required `type` or `message` field. Never returns a partial report.
    pub fn parse(raw: &str) -> Result<Self, ValidatorError> {
        parse_json_output(raw)
    }

    /// The service's messages, in the order the service reported them.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The raw response body the report was parsed from.
    pub fn response_content(&self) -> &str {
        &self.response_content
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_warning()).count()
    }

    /// True when the service reported a non-document error, meaning it
    /// could not produce a reliable verdict. `error_count` and
    /// `warning_count` should not be trusted when this is set.
    pub fn is_result_indeterminate(&self) -> bool {
        self.messages.iter().any(|m| m.is_non_document_error())
    }

    /// A determinate verdict with no document errors.
    pub fn is_valid(&self) -> bool {
        !self.is_result_indeterminate() && self.error_count() == 0
    }
}
