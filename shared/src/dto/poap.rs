//! Proof-of-attendance token records.

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CollectionError;

/// Rarity tag of a token. Drives visual treatment only.
///
/// Parsing is total: any tag other than `rare` or `legendary` is `Common`.
///
/// ```rust
/// use shared::Rarity;
///
/// assert_eq!(Rarity::from_tag("Legendary"), Rarity::Legendary);
/// assert_eq!(Rarity::from_tag(" rare "), Rarity::Rare);
/// assert_eq!(Rarity::from_tag("mythic"), Rarity::Common);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 3] = [Rarity::Common, Rarity::Rare, Rarity::Legendary];

    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "legendary" => Rarity::Legendary,
            "rare" => Rarity::Rare,
            _ => Rarity::Common,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }
}

impl FromStr for Rarity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Rarity::from_tag(s))
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rarity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Missing, null or non-string tags all read as common.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Rarity::from_tag).unwrap_or_default())
    }
}

/// A single proof-of-attendance token.
///
/// `hash` is the certificate content identifier. It is shown as-is and never
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoapToken {
    pub id: u32,
    pub event_name: String,
    pub date: NaiveDate,
    pub organizer: String,
    pub hash: String,
    #[serde(default)]
    pub rarity: Rarity,
}

/// Ordered token collection. Insertion order is display order.
///
/// Token ids are unique; an empty collection is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PoapToken>", into = "Vec<PoapToken>")]
pub struct Collection {
    tokens: Vec<PoapToken>,
}

impl Collection {
    pub fn new(tokens: Vec<PoapToken>) -> Result<Self, CollectionError> {
        let mut seen = HashSet::with_capacity(tokens.len());
        for token in &tokens {
            if !seen.insert(token.id) {
                return Err(CollectionError::DuplicateId(token.id));
            }
        }
        Ok(Self { tokens })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON token array as delivered by a token source.
    pub fn from_json(json: &str) -> Result<Self, CollectionError> {
        let tokens: Vec<PoapToken> = serde_json::from_str(json)?;
        Self::new(tokens)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PoapToken> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PoapToken> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[PoapToken] {
        &self.tokens
    }
}

impl TryFrom<Vec<PoapToken>> for Collection {
    type Error = CollectionError;

    fn try_from(tokens: Vec<PoapToken>) -> Result<Self, Self::Error> {
        Collection::new(tokens)
    }
}

impl From<Collection> for Vec<PoapToken> {
    fn from(collection: Collection) -> Self {
        collection.tokens
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a PoapToken;
    type IntoIter = std::slice::Iter<'a, PoapToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(id: u32, rarity: Rarity) -> PoapToken {
        PoapToken {
            id,
            event_name: format!("Event {}", id),
            date: NaiveDate::from_ymd_opt(2024, 1, id).unwrap(),
            organizer: "Organizer".to_string(),
            hash: format!("QmHash{}", id),
            rarity,
        }
    }

    #[test]
    fn test_rarity_from_tag_is_case_insensitive() {
        assert_eq!(Rarity::from_tag("LEGENDARY"), Rarity::Legendary);
        assert_eq!(Rarity::from_tag("Rare"), Rarity::Rare);
        assert_eq!(Rarity::from_tag("common"), Rarity::Common);
    }

    #[test]
    fn test_rarity_unknown_tag_falls_back_to_common() {
        assert_eq!(Rarity::from_tag(""), Rarity::Common);
        assert_eq!(Rarity::from_tag("epic"), Rarity::Common);
        assert_eq!("ultra".parse::<Rarity>(), Ok(Rarity::Common));
    }

    #[test]
    fn test_token_json_uses_camel_case() {
        let json = serde_json::to_value(token(3, Rarity::Rare)).unwrap();
        assert_eq!(json["eventName"], "Event 3");
        assert_eq!(json["date"], "2024-01-03");
        assert_eq!(json["rarity"], "rare");
    }

    #[test]
    fn test_token_with_unknown_rarity_deserializes_as_common() {
        let json = r#"{"id": 9, "eventName": "Meetup", "date": "2024-01-20",
                       "organizer": "Community", "hash": "QmZ", "rarity": "mythic"}"#;
        let parsed: PoapToken = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.rarity, Rarity::Common);
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
    }

    #[test]
    fn test_token_without_string_rarity_deserializes_as_common() {
        let missing = r#"{"id": 1, "eventName": "A", "date": "2024-01-01",
                          "organizer": "O", "hash": "h1"}"#;
        let numeric = r#"{"id": 2, "eventName": "B", "date": "2024-01-02",
                          "organizer": "O", "hash": "h2", "rarity": 3}"#;
        let null = r#"{"id": 3, "eventName": "C", "date": "2024-01-03",
                       "organizer": "O", "hash": "h3", "rarity": null}"#;

        for json in [missing, numeric, null] {
            let parsed: PoapToken = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.rarity, Rarity::Common);
        }
    }

    #[test]
    fn test_one_odd_rarity_keeps_the_rest_of_the_collection() {
        let json = r#"[
            {"id": 1, "eventName": "A", "date": "2024-01-01", "organizer": "O", "hash": "h1", "rarity": "legendary"},
            {"id": 2, "eventName": "B", "date": "2024-01-02", "organizer": "O", "hash": "h2", "rarity": {"tier": 2}},
            {"id": 3, "eventName": "C", "date": "2024-01-03", "organizer": "O", "hash": "h3"}
        ]"#;
        let collection = Collection::from_json(json).unwrap();
        let rarities: Vec<Rarity> = collection.iter().map(|t| t.rarity).collect();
        assert_eq!(rarities, vec![Rarity::Legendary, Rarity::Common, Rarity::Common]);
    }

    #[test]
    fn test_collection_keeps_insertion_order() {
        let collection = Collection::new(vec![
            token(3, Rarity::Common),
            token(1, Rarity::Legendary),
            token(2, Rarity::Rare),
        ])
        .unwrap();
        let ids: Vec<u32> = collection.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_collection_rejects_duplicate_ids() {
        let result = Collection::new(vec![token(1, Rarity::Common), token(1, Rarity::Rare)]);
        assert_eq!(result, Err(CollectionError::DuplicateId(1)));
    }

    #[test]
    fn test_collection_from_json_rejects_duplicates_and_garbage() {
        let dup = r#"[
            {"id": 4, "eventName": "A", "date": "2024-01-01", "organizer": "O", "hash": "h1", "rarity": "rare"},
            {"id": 4, "eventName": "B", "date": "2024-01-02", "organizer": "O", "hash": "h2", "rarity": "rare"}
        ]"#;
        assert_eq!(Collection::from_json(dup), Err(CollectionError::DuplicateId(4)));
        assert!(matches!(
            Collection::from_json("{not json"),
            Err(CollectionError::Json(_))
        ));
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let collection = Collection::from_json("[]").unwrap();
        assert!(collection.is_empty());
        assert_eq!(collection, Collection::empty());
        assert!(collection.get(0).is_none());
    }

    #[test]
    fn test_collection_deserialize_rejects_duplicates() {
        let dup = serde_json::json!([
            {"id": 1, "eventName": "A", "date": "2024-01-01", "organizer": "O", "hash": "h", "rarity": "common"},
            {"id": 1, "eventName": "A", "date": "2024-01-01", "organizer": "O", "hash": "h", "rarity": "common"}
        ]);
        assert!(serde_json::from_value::<Collection>(dup).is_err());
    }
}
