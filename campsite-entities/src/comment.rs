use crate::{id::*, rating::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id          : Id,
    pub campsite_id : Id,
    pub rating      : RatingValue,
    pub author      : String,
    pub text        : String,
    pub date        : Timestamp,
}

/// A validated comment that has not been stored yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub campsite_id : Id,
    pub rating      : RatingValue,
    pub author      : String,
    pub text        : String,
}

impl NewComment {
    pub fn into_comment(self, id: Id, date: Timestamp) -> Comment {
        let Self {
            campsite_id,
            rating,
            author,
            text,
        } = self;
        Comment {
            id,
            campsite_id,
            rating,
            author,
            text,
            date,
        }
    }
}
