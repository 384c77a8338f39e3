//! View adapter folding list emissions into one view state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::view_models::{
    ImageCommentViewModel, ImageCommentsListErrorViewModel, ImageCommentsListLoadingViewModel,
    ImageCommentsListViewModel,
};
use super::views::{ImageCommentsListErrorView, ImageCommentsListLoadingView, ImageCommentsListView};

/// Folded state of the comments list screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageCommentsListViewState {
    /// Whether the loading indicator is visible.
    pub is_loading: bool,
    /// Error banner text, if shown.
    pub error_message: Option<String>,
    /// Displayed comments.
    pub comments: Vec<ImageCommentViewModel>,
}

/// One emission received by [`ImageCommentsListStateStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageCommentsListEvent {
    /// Error banner update.
    Error(Option<String>),
    /// Loading indicator update.
    Loading(bool),
    /// Content update.
    Comments(Vec<ImageCommentViewModel>),
}

#[derive(Default)]
struct StoreInner {
    state: ImageCommentsListViewState,
    events: Vec<ImageCommentsListEvent>,
}

/// Implements all three list views and keeps the resulting state.
///
/// Emissions are applied in arrival order and recorded, so callers can read
/// both the current state and the sequence that produced it.
#[derive(Default)]
pub struct ImageCommentsListStateStore {
    inner: Mutex<StoreInner>,
}

impl ImageCommentsListStateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current folded state.
    pub fn snapshot(&self) -> ImageCommentsListViewState {
        self.lock().state.clone()
    }

    /// Every emission received so far, oldest first.
    pub fn events(&self) -> Vec<ImageCommentsListEvent> {
        self.lock().events.clone()
    }

    fn apply(&self, event: ImageCommentsListEvent) {
        let mut inner = self.lock();
        match &event {
            ImageCommentsListEvent::Error(message) => inner.state.error_message.clone_from(message),
            ImageCommentsListEvent::Loading(is_loading) => inner.state.is_loading = *is_loading,
            ImageCommentsListEvent::Comments(comments) => inner.state.comments.clone_from(comments),
        }
        inner.events.push(event);
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ImageCommentsListErrorView for ImageCommentsListStateStore {
    fn display(&self, view_model: ImageCommentsListErrorViewModel) {
        self.apply(ImageCommentsListEvent::Error(view_model.message));
    }
}

impl ImageCommentsListLoadingView for ImageCommentsListStateStore {
    fn display(&self, view_model: ImageCommentsListLoadingViewModel) {
        self.apply(ImageCommentsListEvent::Loading(view_model.is_loading));
    }
}

impl ImageCommentsListView for ImageCommentsListStateStore {
    fn display(&self, view_model: ImageCommentsListViewModel) {
        self.apply(ImageCommentsListEvent::Comments(view_model.comments));
    }
}
