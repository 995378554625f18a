use campsite_entities as e;
use thiserror::Error;
use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime, Time,
};

use super::*;

/// `2018-10-25T16:30Z`
const MINUTES_DATE_TIME_FORMAT: &[FormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]Z");

/// `2023-06-15`
const DATE_FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid date: {0:?}")]
    Date(String),
    #[error("Rating value out of range: {0}")]
    Rating(u8),
}

pub fn parse_date(s: &str) -> Result<e::time::Timestamp, Error> {
    let s = s.trim();
    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
        return Ok(dt.into());
    }
    if let Ok(dt) = PrimitiveDateTime::parse(s, MINUTES_DATE_TIME_FORMAT) {
        return Ok(dt.assume_utc().into());
    }
    if let Ok(date) = Date::parse(s, DATE_FORMAT) {
        return Ok(date.with_time(Time::MIDNIGHT).assume_utc().into());
    }
    Err(Error::Date(s.to_owned()))
}

impl From<Campsite> for e::campsite::Campsite {
    fn from(from: Campsite) -> Self {
        let Campsite {
            id,
            name,
            image,
            description,
            ..
        } = from;
        Self {
            id: id.into(),
            name,
            image,
            description,
        }
    }
}

impl TryFrom<Comment> for e::comment::Comment {
    type Error = Error;
    fn try_from(from: Comment) -> Result<Self, Self::Error> {
        let Comment {
            id,
            campsite_id,
            rating,
            text,
            author,
            date,
        } = from;
        let rating = e::rating::RatingValue::from(rating);
        if !rating.is_valid() {
            return Err(Error::Rating(rating.into()));
        }
        let date = parse_date(&date)?;
        Ok(Self {
            id: id.into(),
            campsite_id: campsite_id.into(),
            rating,
            author,
            text,
            date,
        })
    }
}

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            campsite_id,
            rating,
            author,
            text,
            date,
        } = from;
        Self {
            // Ids that are not numeric are never handed out by the container.
            id: id.as_str().parse().unwrap_or_default(),
            campsite_id: campsite_id.as_str().parse().unwrap_or_default(),
            rating: rating.into(),
            text,
            author,
            date: date
                .into_inner()
                .format(&Rfc3339)
                .unwrap_or_else(|_| date.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const COMMENTS_JSON: &str = r#"[
      {
        "id": 0,
        "campsiteId": 0,
        "rating": 5,
        "text": "What a magnificent campsite!",
        "author": "Kevin Costner",
        "date": "2018-10-25T16:30Z"
      },
      {
        "id": 1,
        "campsiteId": 1,
        "rating": 4,
        "text": "Great spot",
        "author": "Al",
        "date": "2023-06-15"
      },
      {
        "id": 2,
        "campsiteId": 0,
        "rating": 4,
        "text": "This campsite was amazing.",
        "author": "Jane Doe",
        "date": "2018-10-26T17:30:00.000Z"
      }
    ]"#;

    fn comments() -> Vec<Comment> {
        serde_json::from_str(COMMENTS_JSON).unwrap()
    }

    #[test]
    fn parse_supported_date_formats() {
        assert_eq!(
            parse_date("2018-10-25T16:30Z").unwrap().into_inner(),
            datetime!(2018-10-25 16:30 UTC)
        );
        assert_eq!(
            parse_date("2018-10-26T17:30:00.000Z").unwrap().into_inner(),
            datetime!(2018-10-26 17:30 UTC)
        );
        assert_eq!(
            parse_date("2023-06-15").unwrap().into_inner(),
            datetime!(2023-06-15 0:00 UTC)
        );
        assert_eq!(
            parse_date("yesterday"),
            Err(Error::Date("yesterday".into()))
        );
    }

    #[test]
    fn convert_comment_into_entity() {
        let comment = comments().remove(1);
        let comment = e::comment::Comment::try_from(comment).unwrap();
        assert_eq!(comment.id.as_str(), "1");
        assert_eq!(comment.campsite_id.as_str(), "1");
        assert_eq!(comment.rating, e::rating::RatingValue::new(4));
        assert_eq!(comment.author, "Al");
        assert_eq!(comment.text, "Great spot");
        assert_eq!(comment.date.into_inner(), datetime!(2023-06-15 0:00 UTC));
    }

    #[test]
    fn reject_rating_out_of_range() {
        let mut comment = comments().remove(0);
        comment.rating = 0;
        assert_eq!(
            e::comment::Comment::try_from(comment).unwrap_err(),
            Error::Rating(0)
        );
    }

    #[test]
    fn convert_campsite_into_entity() {
        let campsite: Campsite = serde_json::from_str(
            r#"{
              "id": 5,
              "name": "Pine Ridge",
              "image": "pine.jpg",
              "elevation": 1233,
              "featured": false,
              "description": "Quiet site"
            }"#,
        )
        .unwrap();
        let campsite = e::campsite::Campsite::from(campsite);
        assert_eq!(campsite.id.as_str(), "5");
        assert_eq!(campsite.name, "Pine Ridge");
        assert_eq!(campsite.image, "pine.jpg");
        assert_eq!(campsite.description, "Quiet site");
    }

    #[test]
    fn convert_entity_into_comment() {
        let comment = e::comment::Comment {
            id: 3.into(),
            campsite_id: 1.into(),
            rating: e::rating::RatingValue::new(2),
            author: "Alice".into(),
            text: "Nice!".into(),
            date: datetime!(2023-06-15 12:00 UTC).into(),
        };
        let comment = Comment::from(comment);
        assert_eq!(comment.id, 3);
        assert_eq!(comment.campsite_id, 1);
        assert_eq!(comment.rating, 2);
        assert_eq!(comment.date, "2023-06-15T12:00:00Z");
        assert_eq!(
            parse_date(&comment.date).unwrap().into_inner(),
            datetime!(2023-06-15 12:00 UTC)
        );
    }
}
