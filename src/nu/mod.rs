pub mod client;
pub mod errors;
pub mod messages;
pub mod parse;
pub mod report;
pub mod reports;
pub mod request;

pub use client::{DEFAULT_SERVICE_URL, NuValidator};
pub use errors::ValidatorError;
pub use messages::Message;
pub use report::ValidationReport;
pub use request::{ValidationRequest, ValidationRequestBuilder};
