//! Image comments API outbound adapters.
//!
//! This module turns the HTTP client port into an
//! [`ImageCommentsLoader`](crate::domain::ports::ImageCommentsLoader) and
//! classifies raw responses into domain comments.

mod dto;
mod mapper;
mod remote_loader;

pub use mapper::map;
pub use remote_loader::{InvalidBaseUrl, RemoteImageCommentsLoader};
