//! Driven port for issuing HTTP GET requests.
//!
//! The port is completion based: an adapter performs the request on its own
//! execution context and invokes the supplied completion exactly once.

use url::Url;

use super::define_port_error;

/// Raw response handed back by an HTTP client adapter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes, possibly empty.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response from its status code and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

define_port_error! {
    /// Failures raised before a response was obtained.
    pub enum HttpClientError {
        /// The connection could not be established or was interrupted.
        Transport { message: String } =>
            "http transport failed: {message}",
        /// The request exceeded the adapter's timeout.
        Timeout { message: String } =>
            "http request timed out: {message}",
    }
}

/// Outcome delivered to an [`HttpClientCompletion`].
pub type HttpClientResult = Result<HttpResponse, HttpClientError>;

/// Completion invoked once per [`HttpClient::get`] call.
pub type HttpClientCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Port for fetching a resource over HTTP.
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request for `url` and report the outcome to `completion`.
    ///
    /// Implementations must call `completion` exactly once, on whichever
    /// thread or task finishes the request.
    fn get(&self, url: &Url, completion: HttpClientCompletion);
}
