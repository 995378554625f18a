use thiserror::Error;

use crate::entities::rating::RatingValue;

pub const AUTHOR_MIN_LEN: usize = 2;
pub const AUTHOR_MAX_LEN: usize = 15;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthorInvalidation {
    #[error("Required")]
    Required,
    #[error("Must be at least 2 characters")]
    TooShort,
    #[error("Must be 15 characters or less")]
    TooLong,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TextInvalidation {
    #[error("Required")]
    Required,
}

/// Lengths are counted in characters, not bytes.
pub fn validate_author(author: &str) -> Result<(), AuthorInvalidation> {
    let len = author.trim().chars().count();
    if len == 0 {
        return Err(AuthorInvalidation::Required);
    }
    if len < AUTHOR_MIN_LEN {
        return Err(AuthorInvalidation::TooShort);
    }
    if len > AUTHOR_MAX_LEN {
        return Err(AuthorInvalidation::TooLong);
    }
    Ok(())
}

pub fn validate_text(text: &str) -> Result<(), TextInvalidation> {
    if text.trim().is_empty() {
        return Err(TextInvalidation::Required);
    }
    Ok(())
}

/// The values of the comment form while the modal is open.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub rating: RatingValue,
    pub author: String,
    pub text: String,
}

/// Every field of a [`CommentDraft`] that failed validation.
#[derive(Debug, Error, Default, Clone, PartialEq, Eq)]
#[error("Invalid comment draft")]
pub struct DraftInvalidation {
    pub author: Option<AuthorInvalidation>,
    pub text: Option<TextInvalidation>,
}

impl DraftInvalidation {
    pub const fn is_empty(&self) -> bool {
        self.author.is_none() && self.text.is_none()
    }
}

impl Validate for CommentDraft {
    type Error = DraftInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        // NOTE:
        // The rating is always one of the selectable values
        // so there is nothing left to check.
        debug_assert!(self.rating.is_valid());
        let invalidation = DraftInvalidation {
            author: validate_author(&self.author).err(),
            text: validate_text(&self.text).err(),
        };
        if invalidation.is_empty() {
            Ok(())
        } else {
            Err(invalidation)
        }
    }
}
