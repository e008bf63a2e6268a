//! Trait abstractions for external dependencies.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
