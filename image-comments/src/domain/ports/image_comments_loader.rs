//! Driving port for loading the comments attached to an image.

use uuid::Uuid;

use super::define_port_error;
use crate::domain::ImageComment;

define_port_error! {
    /// Failure categories surfaced by comment loaders.
    pub enum ImageCommentsLoaderError {
        /// No response could be obtained from the server.
        Connectivity => "image comments could not be fetched",
        /// A response arrived but could not be used.
        InvalidData => "image comments response was invalid",
    }
}

/// Outcome of one [`ImageCommentsLoader::load`] call.
pub type LoadResult = Result<Vec<ImageComment>, ImageCommentsLoaderError>;

/// Completion invoked with a [`LoadResult`].
pub type LoadCompletion = Box<dyn FnOnce(LoadResult) + Send + 'static>;

/// Port for loading the ordered comments of one image.
pub trait ImageCommentsLoader: Send + Sync {
    /// Start loading comments for `image_id`.
    ///
    /// `completion` receives the result at most once. Loaders may stay
    /// silent when they are dropped before the result arrives.
    fn load(&self, image_id: Uuid, completion: LoadCompletion);
}
