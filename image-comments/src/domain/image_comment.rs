//! Image comment aggregate returned by comment loaders.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Author reference attached to an image comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageCommentAuthor {
    /// Public handle shown next to the comment.
    pub username: String,
}

impl ImageCommentAuthor {
    /// Create an author reference.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// A single comment posted on an image.
///
/// Every field is required; a comment is only constructed once the whole
/// payload item has been decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageComment {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Comment body.
    pub message: String,
    /// Instant the comment was created.
    pub created_at: DateTime<Utc>,
    /// Comment author.
    pub author: ImageCommentAuthor,
}

impl ImageComment {
    /// Create a comment from its parts.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use image_comments::domain::{ImageComment, ImageCommentAuthor};
    /// use uuid::Uuid;
    ///
    /// let comment = ImageComment::new(
    ///     Uuid::new_v4(),
    ///     "a message",
    ///     Utc::now(),
    ///     ImageCommentAuthor::new("an author"),
    /// );
    /// assert_eq!(comment.author.username, "an author");
    /// ```
    pub fn new(
        id: Uuid,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
        author: ImageCommentAuthor,
    ) -> Self {
        Self {
            id,
            message: message.into(),
            created_at,
            author,
        }
    }
}
