//! Classification of raw image comment responses.
//!
//! Only `2xx` responses carrying a well-formed `items` payload become
//! comments; every other response is `InvalidData`.

use std::ops::RangeInclusive;

use tracing::debug;

use super::dto::ImageCommentsResponseDto;
use crate::domain::{ImageComment, ImageCommentsLoaderError};

const OK_2XX: RangeInclusive<u16> = 200..=299;

/// Map a response body and status code into ordered comments.
///
/// # Errors
///
/// Returns [`ImageCommentsLoaderError::InvalidData`] when `status` is outside
/// `200..=299` or `body` does not decode into the comments payload.
///
/// # Examples
/// ```
/// use image_comments::outbound::image_comments_api::map;
///
/// let comments = map(br#"{"items": []}"#, 200).expect("empty list is valid");
/// assert!(comments.is_empty());
/// ```
pub fn map(body: &[u8], status: u16) -> Result<Vec<ImageComment>, ImageCommentsLoaderError> {
    if !OK_2XX.contains(&status) {
        debug!(status, "rejecting image comments response with non-2xx status");
        return Err(ImageCommentsLoaderError::invalid_data());
    }

    let decoded: ImageCommentsResponseDto = serde_json::from_slice(body).map_err(|error| {
        debug!(status, %error, "image comments payload failed to decode");
        ImageCommentsLoaderError::invalid_data()
    })?;
    Ok(decoded.into_domain_comments())
}
