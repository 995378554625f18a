//! State of the comment submission modal.

use std::{collections::HashSet, fmt};

use thiserror::Error;

use crate::{
    entities::{comment::NewComment, id::Id},
    validate::{validate_author, validate_text, CommentDraft, DraftInvalidation, Validate},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Rating,
    Author,
    Text,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Author => "author",
            Self::Text => "text",
        }
    }

    pub const fn all() -> [Self; 3] {
        [Self::Rating, Self::Author, Self::Text]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("The comment form is closed")]
    Closed,
    #[error(transparent)]
    Invalid(#[from] DraftInvalidation),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommentForm {
    visibility: ModalVisibility,
    draft: CommentDraft,
    touched: HashSet<Field>,
}

impl CommentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == ModalVisibility::Open
    }

    pub const fn draft(&self) -> &CommentDraft {
        &self.draft
    }

    /// Opens the modal with an empty draft.
    pub fn open(&mut self) {
        log::debug!("Open comment form");
        self.reset();
        self.visibility = ModalVisibility::Open;
    }

    /// Closes the modal and discards the draft.
    pub fn dismiss(&mut self) {
        if self.is_open() {
            log::debug!("Dismiss comment form");
        }
        self.reset();
        self.visibility = ModalVisibility::Closed;
    }

    /// Closes the modal when `Escape` is pressed.
    pub fn dismiss_on_key(&mut self, key: &str) {
        if key == "Escape" && self.is_open() {
            self.dismiss();
        }
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.dismiss();
        } else {
            self.open();
        }
    }

    /// Updates a field from the raw value of its form control.
    ///
    /// Rating values that cannot be selected are ignored.
    pub fn set_value(&mut self, field: Field, value: &str) {
        if !self.is_open() {
            log::debug!("Ignore input for {field}: form is closed");
            return;
        }
        match field {
            Field::Rating => match value.parse() {
                Ok(rating) => self.draft.rating = rating,
                Err(err) => log::warn!("{err}"),
            },
            Field::Author => value.clone_into(&mut self.draft.author),
            Field::Text => value.clone_into(&mut self.draft.text),
        }
    }

    /// Marks a field whose control lost the focus.
    pub fn touch(&mut self, field: Field) {
        if self.is_open() {
            self.touched.insert(field);
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// The error message of a field that is displayed to the user.
    pub fn error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        match field {
            Field::Rating => None,
            Field::Author => validate_author(&self.draft.author)
                .err()
                .map(|err| err.to_string()),
            Field::Text => validate_text(&self.draft.text)
                .err()
                .map(|err| err.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.draft.validate().is_ok()
    }

    /// Submits the draft and closes the modal.
    ///
    /// An invalid draft keeps the modal open and
    /// reveals the errors of all fields.
    pub fn submit(&mut self, campsite_id: &Id) -> Result<NewComment, SubmitError> {
        if !self.is_open() {
            return Err(SubmitError::Closed);
        }
        if let Err(err) = self.draft.validate() {
            log::warn!("Rejected comment for campsite {campsite_id}: {err:?}");
            self.touched.extend(Field::all());
            return Err(err.into());
        }
        let CommentDraft {
            rating,
            author,
            text,
        } = std::mem::take(&mut self.draft);
        self.dismiss();
        let new_comment = NewComment {
            campsite_id: campsite_id.clone(),
            rating,
            author: author.trim().to_owned(),
            text: text.trim().to_owned(),
        };
        log::info!(
            "Submit comment of {} for campsite {campsite_id}",
            new_comment.author
        );
        Ok(new_comment)
    }

    fn reset(&mut self) {
        self.draft = CommentDraft::default();
        self.touched.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::rating::RatingValue;

    fn open_form() -> CommentForm {
        let mut form = CommentForm::new();
        form.open();
        form
    }

    fn fill(form: &mut CommentForm, rating: &str, author: &str, text: &str) {
        form.set_value(Field::Rating, rating);
        form.set_value(Field::Author, author);
        form.set_value(Field::Text, text);
    }

    #[test]
    fn initially_closed() {
        let form = CommentForm::new();
        assert_eq!(form.visibility(), ModalVisibility::Closed);
        assert!(!form.is_open());
    }

    #[test]
    fn open_and_dismiss() {
        let mut form = open_form();
        assert!(form.is_open());
        form.set_value(Field::Author, "Alice");
        form.dismiss();
        assert!(!form.is_open());
        assert_eq!(form.draft(), &CommentDraft::default());
    }

    #[test]
    fn toggle_switches_visibility() {
        let mut form = CommentForm::new();
        form.toggle();
        assert!(form.is_open());
        form.toggle();
        assert!(!form.is_open());
    }

    #[test]
    fn escape_dismisses_without_submit() {
        let mut form = open_form();
        form.set_value(Field::Author, "Alice");
        form.set_value(Field::Text, "Nice!");
        form.dismiss_on_key("Enter");
        assert!(form.is_open());
        form.dismiss_on_key("Escape");
        assert!(!form.is_open());
        assert_eq!(form.draft(), &CommentDraft::default());
        assert_eq!(form.submit(&Id::from(5)), Err(SubmitError::Closed));
    }

    #[test]
    fn escape_keeps_closed_form_closed() {
        let mut form = CommentForm::new();
        form.dismiss_on_key("Escape");
        assert!(!form.is_open());
    }

    #[test]
    fn no_errors_before_touch() {
        let mut form = open_form();
        form.set_value(Field::Author, "A");
        assert_eq!(form.error(Field::Author), None);
        assert_eq!(form.error(Field::Text), None);
    }

    #[test]
    fn errors_after_touch() {
        let mut form = open_form();
        form.set_value(Field::Author, "A");
        form.touch(Field::Author);
        assert_eq!(
            form.error(Field::Author).as_deref(),
            Some("Must be at least 2 characters")
        );
        form.touch(Field::Text);
        assert_eq!(form.error(Field::Text).as_deref(), Some("Required"));
    }

    #[test]
    fn errors_are_cleared_once_valid() {
        let mut form = open_form();
        form.set_value(Field::Author, "Abcdefghijklmnop");
        form.touch(Field::Author);
        assert_eq!(
            form.error(Field::Author).as_deref(),
            Some("Must be 15 characters or less")
        );
        form.set_value(Field::Author, "Abc");
        assert_eq!(form.error(Field::Author), None);
    }

    #[test]
    fn rating_has_no_error() {
        let mut form = open_form();
        form.touch(Field::Rating);
        assert_eq!(form.error(Field::Rating), None);
    }

    #[test]
    fn invalid_rating_input_is_ignored() {
        let mut form = open_form();
        form.set_value(Field::Rating, "3");
        form.set_value(Field::Rating, "7");
        assert_eq!(form.draft().rating, RatingValue::new(3));
    }

    #[test]
    fn reject_invalid_draft() {
        let mut form = open_form();
        fill(&mut form, "5", "A", "Nice!");
        let err = form.submit(&Id::from(5)).unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert!(form.is_open());
        assert_eq!(form.draft().author, "A");
        assert_eq!(
            form.error(Field::Author).as_deref(),
            Some("Must be at least 2 characters")
        );
        assert_eq!(form.error(Field::Text), None);
    }

    #[test]
    fn reject_missing_text() {
        let mut form = open_form();
        fill(&mut form, "2", "Alice", "");
        assert!(form.submit(&Id::from(5)).is_err());
        assert!(form.is_open());
        assert_eq!(form.error(Field::Text).as_deref(), Some("Required"));
    }

    #[test]
    fn submit_valid_draft() {
        let mut form = open_form();
        fill(&mut form, "5", "Alice", "Nice!");
        assert!(form.is_valid());
        let new_comment = form.submit(&Id::from(5)).unwrap();
        assert_eq!(
            new_comment,
            NewComment {
                campsite_id: Id::from(5),
                rating: RatingValue::new(5),
                author: "Alice".into(),
                text: "Nice!".into(),
            }
        );
        assert!(!form.is_open());
        assert_eq!(form.draft(), &CommentDraft::default());
    }

    #[test]
    fn submit_only_once() {
        let mut form = open_form();
        fill(&mut form, "4", "Alice", "Nice!");
        assert!(form.submit(&Id::from(1)).is_ok());
        assert_eq!(form.submit(&Id::from(1)), Err(SubmitError::Closed));
    }

    #[test]
    fn submit_trimmed_values() {
        let mut form = open_form();
        fill(&mut form, "3", "  Bob ", " Quiet at night\n");
        let new_comment = form.submit(&Id::from(2)).unwrap();
        assert_eq!(new_comment.author, "Bob");
        assert_eq!(new_comment.text, "Quiet at night");
    }

    #[test]
    fn submit_default_rating() {
        let mut form = open_form();
        form.set_value(Field::Author, "Alice");
        form.set_value(Field::Text, "Nice!");
        let new_comment = form.submit(&Id::from(2)).unwrap();
        assert_eq!(new_comment.rating, RatingValue::min());
    }

    #[test]
    fn reopened_form_starts_empty() {
        let mut form = open_form();
        fill(&mut form, "2", "A", "");
        assert!(form.submit(&Id::from(5)).is_err());
        form.dismiss();
        form.open();
        assert_eq!(form.draft(), &CommentDraft::default());
        assert!(!form.is_touched(Field::Author));
        assert_eq!(form.error(Field::Author), None);
    }

    #[test]
    fn closed_form_ignores_input() {
        let mut form = CommentForm::new();
        form.set_value(Field::Author, "Alice");
        form.touch(Field::Author);
        assert_eq!(form.draft(), &CommentDraft::default());
        assert!(!form.is_touched(Field::Author));
        assert_eq!(form.submit(&Id::from(5)), Err(SubmitError::Closed));
    }
}
