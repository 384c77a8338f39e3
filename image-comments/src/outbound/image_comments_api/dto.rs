//! DTOs for decoding image comment API responses.
//!
//! The mapper decodes into these transport DTOs first, then maps into domain
//! comments in one pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{ImageComment, ImageCommentAuthor};

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct ImageCommentsResponseDto {
    pub(super) items: Vec<ImageCommentDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct ImageCommentDto {
    pub(super) id: Uuid,
    pub(super) message: String,
    pub(super) created_at: DateTime<Utc>,
    pub(super) author: ImageCommentAuthorDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct ImageCommentAuthorDto {
    pub(super) username: String,
}

impl ImageCommentsResponseDto {
    pub(super) fn into_domain_comments(self) -> Vec<ImageComment> {
        self.items
            .into_iter()
            .map(ImageCommentDto::into_domain_comment)
            .collect()
    }
}

impl ImageCommentDto {
    fn into_domain_comment(self) -> ImageComment {
        ImageComment {
            id: self.id,
            message: self.message,
            created_at: self.created_at,
            author: ImageCommentAuthor {
                username: self.author.username,
            },
        }
    }
}

#[cfg(test)]
impl From<&ImageComment> for ImageCommentDto {
    fn from(comment: &ImageComment) -> Self {
        Self {
            id: comment.id,
            message: comment.message.clone(),
            created_at: comment.created_at,
            author: ImageCommentAuthorDto {
                username: comment.author.username.clone(),
            },
        }
    }
}
