//! Comment loader backed by the [`HttpClient`] port.
//!
//! The loader owns URL construction and error mapping only. It never spawns
//! work of its own; completions run wherever the HTTP client delivers them.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use super::mapper::map;
use crate::domain::ports::{
    HttpClient, HttpClientResult, ImageCommentsLoader, ImageCommentsLoaderError, LoadCompletion,
    LoadResult,
};

/// Base URL rejected by [`RemoteImageCommentsLoader::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("base URL `{url}` cannot carry path segments")]
pub struct InvalidBaseUrl {
    /// The rejected URL.
    pub url: String,
}

/// Loads image comments from `{base_url}/image/{id}/comments`.
///
/// Pending requests hold only a weak handle to the loader's liveness token,
/// so dropping the loader turns their completions into no-ops.
pub struct RemoteImageCommentsLoader {
    client: Arc<dyn HttpClient>,
    base_url: Url,
    liveness: Arc<()>,
}

impl RemoteImageCommentsLoader {
    /// Build a loader issuing requests below `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBaseUrl`] when `base_url` cannot have path segments
    /// appended (for example `mailto:` or `data:` URLs).
    pub fn new(client: Arc<dyn HttpClient>, base_url: Url) -> Result<Self, InvalidBaseUrl> {
        if base_url.cannot_be_a_base() {
            return Err(InvalidBaseUrl {
                url: base_url.into(),
            });
        }
        Ok(Self {
            client,
            base_url,
            liveness: Arc::new(()),
        })
    }

    /// Request target for the comments of `image_id`.
    ///
    /// # Examples
    /// ```rust,ignore
    /// let loader = RemoteImageCommentsLoader::new(client, Url::parse("https://a.com")?)?;
    /// let id = Uuid::parse_str("E621E1F8-C36C-495A-93FC-0C247A3E6E5F")?;
    /// assert_eq!(
    ///     loader.comments_url(id).as_str(),
    ///     "https://a.com/image/E621E1F8-C36C-495A-93FC-0C247A3E6E5F/comments",
    /// );
    /// ```
    pub fn comments_url(&self, image_id: Uuid) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("image")
                .push(&format!("{:X}", image_id.hyphenated()))
                .push("comments");
        }
        url
    }
}

impl ImageCommentsLoader for RemoteImageCommentsLoader {
    fn load(&self, image_id: Uuid, completion: LoadCompletion) {
        let url = self.comments_url(image_id);
        let liveness = Arc::downgrade(&self.liveness);
        debug!(%image_id, %url, "requesting image comments");

        self.client.get(
            &url,
            Box::new(move |result| {
                if liveness.upgrade().is_none() {
                    debug!(%image_id, "loader dropped before response; discarding result");
                    return;
                }
                completion(map_client_result(result));
            }),
        );
    }
}

fn map_client_result(result: HttpClientResult) -> LoadResult {
    match result {
        Ok(response) => map(&response.body, response.status),
        Err(error) => {
            debug!(%error, "image comments request failed");
            Err(ImageCommentsLoaderError::connectivity())
        }
    }
}
