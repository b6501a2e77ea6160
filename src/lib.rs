//! Client for validator.nu compatible markup checker services: submit an
//! HTML document by URL or by upload, and get back a typed report of the
//! service's messages.

pub mod cmd;
pub mod env;
pub mod nu;
pub mod path_or_stdio;
