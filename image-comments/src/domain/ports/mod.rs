//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod http_client;
mod image_comments_loader;

#[cfg(test)]
pub use http_client::MockHttpClient;
pub use http_client::{
    HttpClient, HttpClientCompletion, HttpClientError, HttpClientResult, HttpResponse,
};
pub use image_comments_loader::{
    ImageCommentsLoader, ImageCommentsLoaderError, LoadCompletion, LoadResult,
};
