//! Display-ready values emitted by the presenters.

/// Display fields for one comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageCommentViewModel {
    /// Comment body.
    pub message: String,
    /// Relative creation time, e.g. `1 week ago`.
    pub creation_date_text: String,
    /// Author handle.
    pub author_username: String,
}

impl ImageCommentViewModel {
    /// Create a comment view model.
    pub fn new(
        message: impl Into<String>,
        creation_date_text: impl Into<String>,
        author_username: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            creation_date_text: creation_date_text.into(),
            author_username: author_username.into(),
        }
    }
}

/// Error banner state. `None` clears the banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageCommentsListErrorViewModel {
    /// Resolved message to show, if any.
    pub message: Option<String>,
}

impl ImageCommentsListErrorViewModel {
    /// View model that clears any visible error.
    pub const fn no_error() -> Self {
        Self { message: None }
    }

    /// View model showing `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// Loading indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageCommentsListLoadingViewModel {
    /// Whether a load is in flight.
    pub is_loading: bool,
}

/// Ordered comments ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageCommentsListViewModel {
    /// Comments in payload order.
    pub comments: Vec<ImageCommentViewModel>,
}
