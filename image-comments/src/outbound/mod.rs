//! Outbound adapters: HTTP transport and the image comments API.

pub mod http;
pub mod image_comments_api;
