//! Feed normalization: maps loosely-typed feed objects onto `ExhibitorRecord`.
//!
//! Feeds are edited by hand and exported from spreadsheets, so every logical
//! field may arrive under several names. Each field walks its alias chain and
//! takes the first present, non-null value.

use serde_json::Value;

use crate::feed::FeedError;
use crate::models::{ExhibitorKey, ExhibitorRecord};

const NUMBER_KEYS: &[&str] = &["number", "num", "index", "#"];
const NAME_KEYS: &[&str] = &["name", "exposant", "titre", "Nom", "nom"];
const ROLE_KEYS: &[&str] = &["role", "metier", "fonction"];
const BIO_KEYS: &[&str] = &["bio", "description"];
const PHOTO_KEYS: &[&str] = &["photo_path", "photo", "image", "visuel"];

/// Normalizes a whole feed document. The document must be a JSON array.
pub fn normalize_feed(raw: &Value) -> Result<Vec<ExhibitorRecord>, FeedError> {
    let items = raw.as_array().ok_or(FeedError::NotAnArray)?;
    Ok(items
        .iter()
        .enumerate()
        .map(|(idx, item)| normalize_item(item, idx))
        .collect())
}

/// Normalizes one feed object found at position `idx`.
///
/// A missing number falls back to `idx + 1`; missing text fields become empty strings.
pub fn normalize_item(item: &Value, idx: usize) -> ExhibitorRecord {
    let number = first_present(item, NUMBER_KEYS)
        .and_then(as_key)
        .unwrap_or(idx as ExhibitorKey + 1);

    ExhibitorRecord {
        number,
        name: text_field(item, NAME_KEYS),
        role: text_field(item, ROLE_KEYS),
        bio: text_field(item, BIO_KEYS),
        photo_path: text_field(item, PHOTO_KEYS),
    }
}

fn first_present<'a>(item: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| item.get(*k))
        .find(|v| !v.is_null())
}

fn text_field(item: &Value, keys: &[&str]) -> String {
    match first_present(item, keys) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn as_key(value: &Value) -> Option<ExhibitorKey> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_fields() {
        let item = json!({
            "number": 7,
            "name": "Atelier Brun",
            "role": "Tourneur sur bois",
            "bio": "Bols et plats en essences locales.",
            "photo_path": "C:\\photos\\brun.jpg"
        });
        let record = normalize_item(&item, 0);
        assert_eq!(record.number, 7);
        assert_eq!(record.name, "Atelier Brun");
        assert_eq!(record.role, "Tourneur sur bois");
        assert_eq!(record.bio, "Bols et plats en essences locales.");
        assert_eq!(record.photo_path, "C:\\photos\\brun.jpg");
    }

    #[test]
    fn test_alias_chains() {
        let item = json!({
            "#": "12",
            "exposant": "Verrerie du Lac",
            "metier": "Souffleur de verre",
            "description": "Pièces uniques.",
            "visuel": "verre.png"
        });
        let record = normalize_item(&item, 3);
        assert_eq!(record.number, 12);
        assert_eq!(record.name, "Verrerie du Lac");
        assert_eq!(record.role, "Souffleur de verre");
        assert_eq!(record.bio, "Pièces uniques.");
        assert_eq!(record.photo_path, "verre.png");
    }

    #[test]
    fn test_earlier_alias_wins_and_null_is_skipped() {
        let item = json!({ "name": null, "titre": "Titre", "Nom": "Nom" });
        assert_eq!(normalize_item(&item, 0).name, "Titre");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let record = normalize_item(&json!({}), 4);
        assert_eq!(record.number, 5, "number falls back to position + 1");
        assert_eq!(record.name, "");
        assert_eq!(record.role, "");
        assert_eq!(record.bio, "");
        assert_eq!(record.photo_path, "");
    }

    #[test]
    fn test_unparseable_number_falls_back_to_position() {
        let record = normalize_item(&json!({ "num": "douze" }), 1);
        assert_eq!(record.number, 2);
    }

    #[test]
    fn test_scalar_text_rendered() {
        let record = normalize_item(&json!({ "fonction": 42 }), 0);
        assert_eq!(record.role, "42");
    }

    #[test]
    fn test_feed_must_be_array() {
        let err = normalize_feed(&json!({ "items": [] })).unwrap_err();
        assert!(matches!(err, FeedError::NotAnArray));
    }

    #[test]
    fn test_feed_positions_used_for_missing_numbers() {
        let records = normalize_feed(&json!([{ "nom": "A" }, { "nom": "B" }])).unwrap();
        let numbers: Vec<i64> = records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
