//! Domain primitives and ports.
//!
//! Purpose: define the image comment entity and the ports through which
//! comments are fetched. Nothing here knows about reqwest, JSON or views.
//!
//! Public surface:
//! - `ImageComment` and `ImageCommentAuthor`, the loaded entity.
//! - `ports`, the HTTP client and comment loader traits with their errors.

mod image_comment;
pub mod ports;

pub use self::image_comment::{ImageComment, ImageCommentAuthor};
pub use self::ports::{ImageCommentsLoaderError, LoadResult};
