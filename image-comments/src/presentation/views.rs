//! View contracts the presenters dispatch to.
//!
//! Each trait covers one display surface. A single adapter may implement all
//! of them, but presenters only ever see the traits.

use super::view_models::{
    ImageCommentViewModel, ImageCommentsListErrorViewModel, ImageCommentsListLoadingViewModel,
    ImageCommentsListViewModel,
};

/// Sink for the list error banner.
#[cfg_attr(test, mockall::automock)]
pub trait ImageCommentsListErrorView: Send + Sync {
    /// Show or clear the error banner.
    fn display(&self, view_model: ImageCommentsListErrorViewModel);
}

/// Sink for the list loading indicator.
#[cfg_attr(test, mockall::automock)]
pub trait ImageCommentsListLoadingView: Send + Sync {
    /// Toggle the loading indicator.
    fn display(&self, view_model: ImageCommentsListLoadingViewModel);
}

/// Sink for the comments list content.
#[cfg_attr(test, mockall::automock)]
pub trait ImageCommentsListView: Send + Sync {
    /// Replace the displayed comments.
    fn display(&self, view_model: ImageCommentsListViewModel);
}

/// Sink for a single comment cell.
#[cfg_attr(test, mockall::automock)]
pub trait ImageCommentView: Send + Sync {
    /// Render one comment.
    fn display(&self, view_model: ImageCommentViewModel);
}
