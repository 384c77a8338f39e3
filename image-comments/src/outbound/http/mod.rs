//! HTTP client outbound adapters.
//!
//! This module provides the reqwest implementation of the
//! [`HttpClient`](crate::domain::ports::HttpClient) port.

mod reqwest_client;

pub use reqwest_client::{ReqwestHttpClient, ReqwestHttpIdentity};
