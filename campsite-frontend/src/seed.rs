use anyhow::Context as _;
use serde::Deserialize;

use campsite_boundary as boundary;
use campsite_core::entities::{campsite::Campsite, comment::Comment};

const SEED_JSON: &str = include_str!("../data/seed.json");

#[derive(Deserialize)]
struct Seed {
    campsites: Vec<boundary::Campsite>,
    comments: Vec<boundary::Comment>,
}

pub fn load() -> anyhow::Result<(Vec<Campsite>, Vec<Comment>)> {
    parse(SEED_JSON)
}

fn parse(json: &str) -> anyhow::Result<(Vec<Campsite>, Vec<Comment>)> {
    let Seed {
        campsites,
        comments,
    } = serde_json::from_str(json).context("Invalid campsite data")?;
    let campsites = campsites.into_iter().map(Campsite::from).collect();
    let comments = comments
        .into_iter()
        .map(|c| {
            let id = c.id;
            Comment::try_from(c).with_context(|| format!("Invalid comment {id}"))
        })
        .collect::<anyhow::Result<_>>()?;
    Ok((campsites, comments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_embedded_seed() {
        let (campsites, comments) = load().unwrap();
        assert!(campsites.iter().any(|c| c.name == "Pine Ridge"));
        assert!(comments
            .iter()
            .all(|c| campsites.iter().any(|s| s.id == c.campsite_id)));
    }

    #[test]
    fn reject_invalid_comment() {
        let json = r#"{
          "campsites": [],
          "comments": [
            { "id": 7, "campsiteId": 0, "rating": 9, "text": "x", "author": "Al", "date": "2023-06-15" }
          ]
        }"#;
        let err = parse(json).unwrap_err();
        assert_eq!(err.to_string(), "Invalid comment 7");
    }
}
