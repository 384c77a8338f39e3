//! Presenter for a single comment cell.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;

use super::relative_date::RelativeDateFormatter;
use super::view_models::ImageCommentViewModel;
use super::views::ImageCommentView;
use crate::domain::ImageComment;

/// Maps one comment to its view model and hands it to an [`ImageCommentView`].
pub struct ImageCommentPresenter {
    view: Arc<dyn ImageCommentView>,
    formatter: Arc<dyn RelativeDateFormatter>,
    clock: Arc<dyn Clock>,
}

impl ImageCommentPresenter {
    /// Create a presenter for `view`.
    pub fn new(
        view: Arc<dyn ImageCommentView>,
        formatter: Arc<dyn RelativeDateFormatter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            view,
            formatter,
            clock,
        }
    }

    /// Display `comment` with its creation time relative to now.
    pub fn did_load(&self, comment: &ImageComment) {
        self.did_load_relative_to(comment, self.clock.utc());
    }

    /// Display `comment` with its creation time relative to `reference`.
    pub fn did_load_relative_to(&self, comment: &ImageComment, reference: DateTime<Utc>) {
        self.view
            .display(Self::map(comment, reference, self.formatter.as_ref()));
    }

    /// Build the view model for `comment` as seen from `reference`.
    ///
    /// The formatter's text is used unmodified.
    pub fn map(
        comment: &ImageComment,
        reference: DateTime<Utc>,
        formatter: &dyn RelativeDateFormatter,
    ) -> ImageCommentViewModel {
        ImageCommentViewModel {
            message: comment.message.clone(),
            creation_date_text: formatter.format(comment.created_at, reference),
            author_username: comment.author.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! View model mapping coverage for the single comment presenter.

    use super::*;
    use crate::domain::ImageCommentAuthor;
    use crate::presentation::relative_date::MockRelativeDateFormatter;
    use crate::presentation::views::MockImageCommentView;
    use crate::test_support::fixture_clock;
    use chrono::TimeDelta;
    use rstest::rstest;
    use uuid::Uuid;

    fn comment(created_at: DateTime<Utc>) -> ImageComment {
        ImageComment::new(
            Uuid::new_v4(),
            "a message",
            created_at,
            ImageCommentAuthor::new("a username"),
        )
    }

    #[rstest]
    fn construction_sends_nothing_to_the_view() {
        let mut view = MockImageCommentView::new();
        view.expect_display().never();
        let (clock, _) = fixture_clock();

        let _presenter = ImageCommentPresenter::new(
            Arc::new(view),
            Arc::new(MockRelativeDateFormatter::new()),
            clock,
        );
    }

    #[rstest]
    fn did_load_uses_clock_as_reference() {
        let (clock, now) = fixture_clock();
        let created_at = now - TimeDelta::seconds(1);

        let mut formatter = MockRelativeDateFormatter::new();
        formatter
            .expect_format()
            .withf(move |date, reference| *date == created_at && *reference == now)
            .times(1)
            .return_const("1 second ago".to_owned());

        let mut view = MockImageCommentView::new();
        view.expect_display()
            .withf(|model| {
                *model == ImageCommentViewModel::new("a message", "1 second ago", "a username")
            })
            .times(1)
            .return_const(());

        ImageCommentPresenter::new(Arc::new(view), Arc::new(formatter), clock)
            .did_load(&comment(created_at));
    }

    #[rstest]
    fn map_forwards_formatter_text_verbatim() {
        let (_, now) = fixture_clock();
        let mut formatter = MockRelativeDateFormatter::new();
        formatter
            .expect_format()
            .return_const("  formatted by collaborator  ".to_owned());

        let model = ImageCommentPresenter::map(
            &comment(now - TimeDelta::days(7)),
            now,
            &formatter,
        );

        assert_eq!(model.creation_date_text, "  formatted by collaborator  ");
        assert_eq!(model.message, "a message");
        assert_eq!(model.author_username, "a username");
    }
}
