//! Presenter driving the image comments list surfaces.
//!
//! Each entry point fans out synchronously to the error, loading and content
//! views in a fixed order; views may render as each call arrives.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;

use super::comment_presenter::ImageCommentPresenter;
use super::localization::{CONNECTION_ERROR_KEY, IMAGE_COMMENTS_TABLE, StringResolver};
use super::relative_date::RelativeDateFormatter;
use super::view_models::{
    ImageCommentsListErrorViewModel, ImageCommentsListLoadingViewModel, ImageCommentsListViewModel,
};
use super::views::{ImageCommentsListErrorView, ImageCommentsListLoadingView, ImageCommentsListView};
use crate::domain::{ImageComment, ImageCommentsLoaderError, LoadResult};

/// Stateless presenter for the comments list.
pub struct ImageCommentsListPresenter {
    error_view: Arc<dyn ImageCommentsListErrorView>,
    loading_view: Arc<dyn ImageCommentsListLoadingView>,
    comments_view: Arc<dyn ImageCommentsListView>,
    strings: Arc<dyn StringResolver>,
    formatter: Arc<dyn RelativeDateFormatter>,
    clock: Arc<dyn Clock>,
}

impl ImageCommentsListPresenter {
    /// Create a presenter dispatching to the three list views.
    ///
    /// # Examples
    /// ```rust,ignore
    /// let presenter = ImageCommentsListPresenter::new(
    ///     store.clone(),
    ///     store.clone(),
    ///     store.clone(),
    ///     Arc::new(LocalizedStringTables::english()),
    ///     Arc::new(EnglishRelativeDateFormatter),
    ///     Arc::new(DefaultClock),
    /// );
    /// presenter.did_start_loading_comments();
    /// ```
    pub fn new(
        error_view: Arc<dyn ImageCommentsListErrorView>,
        loading_view: Arc<dyn ImageCommentsListLoadingView>,
        comments_view: Arc<dyn ImageCommentsListView>,
        strings: Arc<dyn StringResolver>,
        formatter: Arc<dyn RelativeDateFormatter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            error_view,
            loading_view,
            comments_view,
            strings,
            formatter,
            clock,
        }
    }

    /// Clear the error, then show the loading indicator.
    pub fn did_start_loading_comments(&self) {
        self.error_view
            .display(ImageCommentsListErrorViewModel::no_error());
        self.loading_view
            .display(ImageCommentsListLoadingViewModel { is_loading: true });
    }

    /// Hide the loading indicator, then display `comments` relative to now.
    pub fn did_finish_loading_comments(&self, comments: &[ImageComment]) {
        self.did_finish_loading_comments_relative_to(comments, self.clock.utc());
    }

    /// Hide the loading indicator, then display `comments` relative to
    /// `reference`.
    pub fn did_finish_loading_comments_relative_to(
        &self,
        comments: &[ImageComment],
        reference: DateTime<Utc>,
    ) {
        self.loading_view
            .display(ImageCommentsListLoadingViewModel { is_loading: false });
        let view_models = comments
            .iter()
            .map(|comment| ImageCommentPresenter::map(comment, reference, self.formatter.as_ref()))
            .collect();
        self.comments_view.display(ImageCommentsListViewModel {
            comments: view_models,
        });
    }

    /// Hide the loading indicator, then show the connection error message.
    ///
    /// Every error kind renders the same message.
    pub fn did_finish_loading_comments_with_error(&self, _error: &ImageCommentsLoaderError) {
        self.loading_view
            .display(ImageCommentsListLoadingViewModel { is_loading: false });
        let message = self
            .strings
            .resolve(CONNECTION_ERROR_KEY, IMAGE_COMMENTS_TABLE);
        self.error_view
            .display(ImageCommentsListErrorViewModel::error(message));
    }

    /// Route a loader result to the matching finish entry point.
    pub fn did_finish_loading(&self, result: &LoadResult) {
        match result {
            Ok(comments) => self.did_finish_loading_comments(comments),
            Err(error) => self.did_finish_loading_comments_with_error(error),
        }
    }
}
