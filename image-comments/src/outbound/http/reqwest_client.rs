//! Reqwest-backed HTTP client adapter.
//!
//! This adapter owns transport details only: request headers, timeout and
//! transport error mapping. Status codes are reported verbatim so callers
//! decide which responses are usable.

use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use tokio::runtime::Handle;
use tracing::debug;
use url::Url;

use crate::domain::ports::{
    HttpClient, HttpClientCompletion, HttpClientError, HttpClientResult, HttpResponse,
};

const DEFAULT_USER_AGENT: &str = "image-comments/0.1";
const TASK_CANCELLED: &str = "request task cancelled";

/// Outbound identity sent with every request.
pub struct ReqwestHttpIdentity {
    /// HTTP user-agent header value.
    pub user_agent: String,
}

impl Default for ReqwestHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// HTTP client adapter that runs each GET as a task on a Tokio runtime.
pub struct ReqwestHttpClient {
    client: Client,
    runtime: Handle,
    user_agent: String,
}

impl ReqwestHttpClient {
    /// Build an adapter with an explicit request timeout.
    /// ```rust,ignore
    /// let client = ReqwestHttpClient::new(runtime.handle().clone(), timeout);
    /// assert!(client.is_ok() || client.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(runtime: Handle, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(runtime, timeout, ReqwestHttpIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        runtime: Handle,
        timeout: Duration,
        identity: ReqwestHttpIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            runtime,
            user_agent: identity.user_agent,
        })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        let request = self
            .client
            .get(url.clone())
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/json");
        let url = url.clone();

        // Dropping the task unfinished, on a stopped runtime included,
        // still answers the caller with a transport error.
        let guard = CompletionGuard::new(url.clone(), completion);

        self.runtime.spawn(async move {
            let result = fetch(request).await;
            match &result {
                Ok(response) => debug!(
                    %url,
                    status = response.status,
                    body_bytes = response.body.len(),
                    "http GET completed"
                ),
                Err(error) => debug!(%url, %error, "http GET failed"),
            }
            guard.finish(result);
        });
    }
}

/// Owns a pending completion and reports cancellation if dropped unfinished.
struct CompletionGuard {
    url: Url,
    completion: Option<HttpClientCompletion>,
}

impl CompletionGuard {
    fn new(url: Url, completion: HttpClientCompletion) -> Self {
        Self {
            url,
            completion: Some(completion),
        }
    }

    fn finish(mut self, result: HttpClientResult) {
        if let Some(completion) = self.completion.take() {
            completion(result);
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(completion) = self.completion.take() {
            debug!(url = %self.url, "http GET task dropped before finishing");
            completion(Err(HttpClientError::transport(TASK_CANCELLED)));
        }
    }
}

async fn fetch(request: RequestBuilder) -> HttpClientResult {
    let response = request.send().await.map_err(map_transport_error)?;
    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(map_transport_error)?;
    Ok(HttpResponse {
        status,
        body: body.to_vec(),
    })
}

fn map_transport_error(error: reqwest::Error) -> HttpClientError {
    if error.is_timeout() {
        HttpClientError::timeout(error.to_string())
    } else {
        HttpClientError::transport(error.to_string())
    }
}
