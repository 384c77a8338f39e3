//! Remote loading and presentation of image comments.
//!
//! - [`domain`] holds the comment entity and the loader and HTTP client ports.
//! - [`outbound`] adapts reqwest to the HTTP client port and implements the
//!   remote comments loader on top of it.
//! - [`presentation`] turns loader outcomes into view models for the list
//!   error, loading and content views.
//! - [`config`] loads API settings from the environment.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod presentation;
#[cfg(test)]
mod test_support;
