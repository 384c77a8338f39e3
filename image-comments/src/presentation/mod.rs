//! Presentation layer for image comments.
//!
//! Presenters turn loader events into view models and dispatch them to narrow
//! view contracts. Copy and relative dates come from injected collaborators.

mod comment_presenter;
mod list_presenter;
mod localization;
mod relative_date;
mod state_store;
mod view_models;
pub mod views;

pub use comment_presenter::ImageCommentPresenter;
pub use list_presenter::ImageCommentsListPresenter;
pub use localization::{
    CONNECTION_ERROR_KEY, IMAGE_COMMENTS_TABLE, LocalizedStringTables, LocalizedStringTablesError,
    StringResolver,
};
pub use relative_date::{EnglishRelativeDateFormatter, RelativeDateFormatter};
pub use state_store::{
    ImageCommentsListEvent, ImageCommentsListStateStore, ImageCommentsListViewState,
};
pub use view_models::{
    ImageCommentViewModel, ImageCommentsListErrorViewModel, ImageCommentsListLoadingViewModel,
    ImageCommentsListViewModel,
};
pub use views::{
    ImageCommentView, ImageCommentsListErrorView, ImageCommentsListLoadingView,
    ImageCommentsListView,
};
