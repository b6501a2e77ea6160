use derive_builder::Builder;

/// Caller-supplied knobs forwarded to the service as query parameters.
///
/// The default request lets the service pick everything itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct ValidationRequest {
    /// Parser profile the service should use, e.g. "html5" or "html4tr".
    pub parser: Option<String>,
    /// Character encoding to assume for the submitted document.
    pub charset: Option<String>,
}

impl ValidationRequest {
    pub fn builder() -> ValidationRequestBuilder {
        ValidationRequestBuilder::default()
    }

    /// Query parameters for a submission. Always asks for JSON output.
    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("out", "json".to_string())];
        if let Some(parser) = &self.parser {
            params.push(("parser", parser.clone()));
        }
        if let Some(charset) = &self.charset {
            params.push(("charset", charset.clone()));
        }
        params
    }
}
