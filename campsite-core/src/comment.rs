use time::{format_description::FormatItem, macros::format_description};

use crate::entities::{comment::Comment, id::Id, time::Timestamp};

/// `Jun 15, 2023`
const COMMENT_DATE_FORMAT: &[FormatItem] =
    format_description!("[month repr:short] [day padding:zero], [year]");

pub fn format_comment_date(date: Timestamp) -> String {
    date.into_inner()
        .format(COMMENT_DATE_FORMAT)
        .unwrap_or_else(|err| {
            log::warn!("Unable to format comment date {date}: {err}");
            date.to_string()
        })
}

/// The line below the comment text naming its author and date.
pub fn attribution(comment: &Comment) -> String {
    format!(
        "-- {}, {}",
        comment.author,
        format_comment_date(comment.date)
    )
}

/// A comment as it is listed below the campsite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    pub text: String,
    pub attribution: String,
}

impl From<&Comment> for CommentEntry {
    fn from(comment: &Comment) -> Self {
        Self {
            text: comment.text.clone(),
            attribution: attribution(comment),
        }
    }
}

/// The entries of the comment panel in the given order.
///
/// Missing comments yield no panel at all while an empty
/// list yields a panel without entries.
pub fn comment_entries(comments: Option<&[Comment]>) -> Option<Vec<CommentEntry>> {
    comments.map(|comments| comments.iter().map(CommentEntry::from).collect())
}

/// All comments of one campsite in the order they were given.
pub fn comments_of<'a>(
    campsite_id: &'a Id,
    comments: &'a [Comment],
) -> impl Iterator<Item = &'a Comment> + 'a {
    comments
        .iter()
        .filter(move |c| &c.campsite_id == campsite_id)
}
