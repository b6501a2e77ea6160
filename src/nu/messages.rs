use serde::Deserialize;

pub const TYPE_INFO: &str = "info";
pub const TYPE_ERROR: &str = "error";
pub const TYPE_NON_DOCUMENT_ERROR: &str = "non-document-error";
pub const SUBTYPE_WARNING: &str = "warning";

/// One finding reported by the checker service.
///
/// Only `type` and `message` are guaranteed to be present; every other
/// field is optional and stays `None` when the service omits it. Fields
/// the service sends that we don't know about are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    /// Message category. Known values are "info", "error" and
    /// "non-document-error"; anything else is kept verbatim and simply
    /// not counted by the report queries.
    #[serde(rename = "type")]
    pub message_type: String,
    /// Refinement of "info" messages. The service currently only emits
    /// "warning".
    #[serde(rename = "subType")]
    pub sub_type: Option<String>,
    /// Human-readable description of the finding.
    pub message: String,
    /// Last line of the offending source range, 1-based.
    #[serde(rename = "lastLine")]
    pub last_line: Option<usize>,
    /// Last column of the offending source range, 1-based.
    #[serde(rename = "lastColumn")]
    pub last_column: Option<usize>,
    /// First column of the offending source range, 1-based.
    #[serde(rename = "firstColumn")]
    pub first_column: Option<usize>,
    /// Snippet of source text surrounding the offending range.
    pub extract: Option<String>,
    /// Start of the highlight span within `extract`, in characters.
    #[serde(rename = "hiliteStart")]
    pub hilite_start: Option<usize>,
    /// Length of the highlight span within `extract`, in characters.
    #[serde(rename = "hiliteLength")]
    pub hilite_length: Option<usize>,
}

impl Message {
    /// A document error: counts towards `ValidationReport::error_count`.
    pub fn is_error(&self) -> bool {
        self.message_type == TYPE_ERROR
    }

    /// A warning is an "info" message refined with the "warning" subtype.
    /// A plain "info" with no subtype is neither an error nor a warning.
    pub fn is_warning(&self) -> bool {
        self.message_type == TYPE_INFO && self.sub_type.as_deref() == Some(SUBTYPE_WARNING)
    }

    /// The service itself failed to produce a reliable verdict for the
    /// document. One of these anywhere in a response makes the whole
    /// report indeterminate.
    pub fn is_non_document_error(&self) -> bool {
        self.message_type == TYPE_NON_DOCUMENT_ERROR
    }

    /// End position of the offending range as `(line, column)`, when the
    /// service located the finding.
    pub fn location(&self) -> Option<(usize, usize)> {
        self.last_line.zip(self.last_column)
    }
}
