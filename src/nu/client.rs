use std::io::Read;

use reqwest::Url;
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::nu::errors::ValidatorError;
use crate::nu::parse::parse_json_output;
use crate::nu::report::ValidationReport;
use crate::nu::request::ValidationRequest;

/// Endpoint of the hosted checker service.
pub const DEFAULT_SERVICE_URL: &str = "https://validator.nu/";

/// Client for a validator.nu compatible markup checker service.
///
/// A document can be submitted by reference (the service fetches the URL
/// itself) or by uploading its raw bytes. Either way the service's JSON
/// response is decoded into a [`ValidationReport`].
pub struct NuValidator {
    service_url: Url,
    http: Client,
}

impl NuValidator {
    pub fn new(service_url: &str) -> Result<Self, ValidatorError> {
        let service_url = Url::parse(service_url)
            .map_err(|_| ValidatorError::InvalidBaseUrl(service_url.to_string()))?;

        Ok(Self {
            service_url,
            http: Client::new(),
        })
    }

    /// Ask the service to fetch `document_url` itself and check it.
    pub fn validate_uri(
        &self,
        document_url: &Url,
        request: &ValidationRequest,
    ) -> Result<ValidationReport, ValidatorError> {
        debug!("submitting document by reference: {}", document_url);

        let response = self
            .http
            .get(self.service_url.clone())
            .query(&request.query_params())
            .query(&[("doc", document_url.as_str())])
            .send()?;

        self.read_response(response)
    }

    /// Upload raw markup from `input` and check it.
    pub fn validate_content<R: Read>(
        &self,
        input: &mut R,
        request: &ValidationRequest,
    ) -> Result<ValidationReport, ValidatorError> {
        let mut body = Vec::new();
        input.read_to_end(&mut body)?;

        debug!("uploading {} bytes for checking", body.len());

        let charset = request.charset.as_deref().unwrap_or("utf-8");
        let response = self
            .http
            .post(self.service_url.clone())
            .query(&request.query_params())
            .header(CONTENT_TYPE, format!("text/html; charset={}", charset))
            .body(body)
            .send()?;

        self.read_response(response)
    }

    fn read_response(&self, response: Response) -> Result<ValidationReport, ValidatorError> {
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            return Err(ValidatorError::UnexpectedStatus { status, url });
        }

        let raw = response.text()?;
        parse_json_output(&raw)
    }
}
