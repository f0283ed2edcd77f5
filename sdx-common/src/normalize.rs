//! Record normalization layer
//!
//! Converts raw stored documents, which may follow either of two historical
//! shapes, into the canonical character shape. Pure and reentrant: no
//! storage or network access, no state across calls, and no failure mode;
//! missing or wrongly-typed fields degrade to defaults instead of raising.
//!
//! Shape discrimination: a document whose `abilities` field is a JSON
//! object is already structured (nested legacy shape / canonical); anything
//! else (absent, or the flat string array of the old schema) gets the
//! abilities back-fill. A flat abilities array is retained as
//! `special_abilities` rather than dropped.

use serde_json::{Map, Value};

use crate::jutsu::default_jutsu_for;

/// Sentinel keys tagging a value as a wrapped number in store exports
const NUMBER_DOUBLE: &str = "$numberDouble";
const NUMBER_INT: &str = "$numberInt";
const NUMBER_LONG: &str = "$numberLong";

/// Normalize one raw stored document into canonical shape.
///
/// Identity cases: `Null` returns `Null`; non-object values return
/// themselves after numeric unwrapping only. Idempotent on documents
/// already in canonical shape.
pub fn normalize(doc: Value) -> Value {
    if doc.is_null() {
        return doc;
    }

    let cleaned = unwrap_extended_numbers(doc);

    let mut obj = match cleaned {
        Value::Object(map) => map,
        other => return other,
    };

    ensure_id(&mut obj);
    ensure_abilities(&mut obj);
    ensure_string_array(&mut obj, "strengths");
    ensure_string_array(&mut obj, "weaknesses");

    Value::Object(obj)
}

/// Recursively unwrap numeric wrapper objects anywhere in the tree.
///
/// A map carrying one of the sentinel keys collapses to the wrapped number.
/// The wrapped payload may be a JSON number or a numeric string; a payload
/// that parses as neither is kept as-is (unwrapped but not converted).
pub fn unwrap_extended_numbers(value: Value) -> Value {
    match value {
        Value::Array(items) => {
            Value::Array(items.into_iter().map(unwrap_extended_numbers).collect())
        }
        Value::Object(map) => {
            for key in [NUMBER_DOUBLE, NUMBER_INT, NUMBER_LONG] {
                if let Some(inner) = map.get(key) {
                    return unwrap_number(inner, key == NUMBER_DOUBLE);
                }
            }
            Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, unwrap_extended_numbers(v)))
                    .collect(),
            )
        }
        other => other,
    }
}

fn unwrap_number(inner: &Value, as_double: bool) -> Value {
    match inner {
        Value::Number(_) => inner.clone(),
        Value::String(s) => {
            if as_double {
                s.parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or_else(|| inner.clone())
            } else {
                s.parse::<i64>()
                    .map(|n| Value::Number(n.into()))
                    .unwrap_or_else(|_| inner.clone())
            }
        }
        other => other.clone(),
    }
}

/// Synthesize a stable identifier from a character name: lowercase, with
/// every character outside `[a-z0-9]` collapsed to an underscore.
///
/// Distinct names can normalize to the same id; that is a data-quality
/// issue surfaced upstream, not deduplicated here.
pub fn synthesize_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn ensure_id(obj: &mut Map<String, Value>) {
    let has_id = matches!(obj.get("id"), Some(Value::String(s)) if !s.is_empty());
    if has_id {
        return;
    }
    // A document with neither id nor name keeps no id
    let synthesized = obj
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .map(synthesize_id);
    if let Some(id) = synthesized {
        obj.insert("id".to_string(), Value::String(id));
    }
}

fn ensure_abilities(obj: &mut Map<String, Value>) {
    // Already-structured abilities pass through untouched
    if matches!(obj.get("abilities"), Some(Value::Object(_))) {
        return;
    }

    // Flat legacy ability list becomes special_abilities
    let special_abilities = match obj.get("abilities") {
        Some(Value::Array(items)) => Value::Array(
            items
                .iter()
                .filter(|v| v.is_string())
                .cloned()
                .collect(),
        ),
        _ => Value::Array(Vec::new()),
    };

    let nature_transformations = match obj.get("chakra_nature") {
        Some(Value::Array(items)) => Value::Array(items.clone()),
        _ => Value::Array(Vec::new()),
    };

    let unique_jutsu = legacy_unique_jutsu(obj)
        .unwrap_or_else(|| match obj.get("name") {
            Some(Value::String(name)) => Value::Array(
                default_jutsu_for(name)
                    .into_iter()
                    .map(Value::String)
                    .collect(),
            ),
            _ => Value::Array(Vec::new()),
        });

    let mut abilities = Map::new();
    abilities.insert("kekkei_genkai".to_string(), Value::Null);
    abilities.insert("nature_transformations".to_string(), nature_transformations);
    abilities.insert("unique_jutsu".to_string(), unique_jutsu);
    abilities.insert("special_abilities".to_string(), special_abilities);

    obj.insert("abilities".to_string(), Value::Object(abilities));
}

/// A legacy `basic_info.unique_jutsu` list takes precedence over the
/// static lookup table
fn legacy_unique_jutsu(obj: &Map<String, Value>) -> Option<Value> {
    let basic_info = obj.get("basic_info")?.as_object()?;
    match basic_info.get("unique_jutsu") {
        Some(Value::Array(items)) => Some(Value::Array(items.clone())),
        _ => None,
    }
}

fn ensure_string_array(obj: &mut Map<String, Value>, key: &str) {
    if !matches!(obj.get(key), Some(Value::Array(_))) {
        obj.insert(key.to_string(), Value::Array(Vec::new()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// A document in the flat legacy shape, as seeded
    fn shape_a_doc() -> Value {
        json!({
            "name": "Naruto Uzumaki",
            "village": "Hidden Leaf Village",
            "rank": "Hokage",
            "abilities": ["Rasengan", "Shadow Clone Jutsu"],
            "chakra_nature": ["Wind", "Fire"],
            "description": "The Seventh Hokage.",
            "stats": { "strength": 95, "speed": 90, "intelligence": 75, "chakra": 100 }
        })
    }

    /// A document already in canonical shape
    fn canonical_doc() -> Value {
        json!({
            "id": "rock_lee",
            "name": "Rock Lee",
            "basic_info": {
                "full_name": "Rock Lee",
                "aliases": [],
                "affiliations": ["Konohagakure", "Team Guy"],
                "rank": "Jōnin"
            },
            "databook_stats": {
                "ninjutsu": 1.0, "taijutsu": 5.0, "genjutsu": 1.0,
                "intelligence": 2.5, "strength": 4.5, "speed": 5.0,
                "stamina": 4.5, "hand_seals": 1.0
            },
            "abilities": {
                "kekkei_genkai": null,
                "nature_transformations": [],
                "unique_jutsu": ["Eight Gates", "Primary Lotus"],
                "special_abilities": ["Drunken Fist"]
            },
            "strengths": ["Relentless"],
            "weaknesses": ["No ninjutsu"]
        })
    }

    #[test]
    fn null_passes_through_unchanged() {
        assert_eq!(normalize(Value::Null), Value::Null);
    }

    #[test]
    fn scalars_pass_through_unchanged() {
        assert_eq!(normalize(json!(42)), json!(42));
        assert_eq!(normalize(json!("text")), json!("text"));
        assert_eq!(normalize(json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn shape_a_gets_all_four_ability_fields() {
        let out = normalize(shape_a_doc());
        let abilities = out["abilities"].as_object().unwrap();

        assert!(abilities.contains_key("kekkei_genkai"));
        assert_eq!(abilities["kekkei_genkai"], Value::Null);
        assert_eq!(abilities["nature_transformations"], json!(["Wind", "Fire"]));
        assert_eq!(
            abilities["special_abilities"],
            json!(["Rasengan", "Shadow Clone Jutsu"])
        );
        // Known name: curated list, not the generic default
        assert_eq!(
            abilities["unique_jutsu"],
            json!(["Rasengan", "Shadow Clone Jutsu", "Sage Mode"])
        );
    }

    #[test]
    fn missing_strengths_and_weaknesses_become_empty_arrays() {
        let out = normalize(shape_a_doc());
        assert_eq!(out["strengths"], json!([]));
        assert_eq!(out["weaknesses"], json!([]));
    }

    #[test]
    fn wrongly_typed_strengths_degrade_to_empty() {
        let out = normalize(json!({ "name": "Tenten", "strengths": "many" }));
        assert_eq!(out["strengths"], json!([]));
    }

    #[test]
    fn canonical_document_is_unchanged() {
        let doc = canonical_doc();
        assert_eq!(normalize(doc.clone()), doc);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize(shape_a_doc());
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn id_synthesis_is_deterministic() {
        assert_eq!(synthesize_id("Naruto Uzumaki"), "naruto_uzumaki");
        assert_eq!(synthesize_id("Pain/Nagato"), "pain_nagato");
        assert_eq!(synthesize_id("Might Guy"), "might_guy");
    }

    #[test]
    fn synthesized_id_lands_on_document() {
        let out = normalize(json!({ "name": "Pain/Nagato" }));
        assert_eq!(out["id"], json!("pain_nagato"));
    }

    #[test]
    fn existing_id_is_kept() {
        let out = normalize(json!({ "id": "custom_7", "name": "Naruto Uzumaki" }));
        assert_eq!(out["id"], json!("custom_7"));
    }

    #[test]
    fn empty_id_is_replaced() {
        let out = normalize(json!({ "id": "", "name": "Gaara" }));
        assert_eq!(out["id"], json!("gaara"));
    }

    #[test]
    fn document_without_name_keeps_no_id() {
        let out = normalize(json!({ "rank": "Genin" }));
        assert!(out.get("id").is_none());
    }

    #[test]
    fn known_name_backfill_uses_lookup_table() {
        let out = normalize(json!({ "name": "Rock Lee" }));
        let jutsu = out["abilities"]["unique_jutsu"].as_array().unwrap();
        assert!(jutsu.contains(&json!("Eight Gates")));
        assert!(jutsu.contains(&json!("Primary Lotus")));
    }

    #[test]
    fn unknown_name_backfill_uses_generic_default() {
        let out = normalize(json!({ "name": "Totally Unknown Shinobi" }));
        assert_eq!(
            out["abilities"]["unique_jutsu"],
            json!(["Basic Techniques", "Substitution Jutsu"])
        );
    }

    #[test]
    fn legacy_basic_info_unique_jutsu_wins_over_table() {
        let out = normalize(json!({
            "name": "Rock Lee",
            "basic_info": { "unique_jutsu": ["Leaf Hurricane"] }
        }));
        assert_eq!(out["abilities"]["unique_jutsu"], json!(["Leaf Hurricane"]));
    }

    #[test]
    fn numeric_wrappers_unwrap_recursively() {
        let out = normalize(json!({
            "name": "Gaara",
            "databook_stats": {
                "ninjutsu": { "$numberDouble": "5.0" },
                "taijutsu": { "$numberInt": "2" },
                "stamina": { "$numberLong": 4 }
            },
            "strengths": [{ "$numberInt": "1" }]
        }));
        assert_eq!(out["databook_stats"]["ninjutsu"], json!(5.0));
        assert_eq!(out["databook_stats"]["taijutsu"], json!(2));
        assert_eq!(out["databook_stats"]["stamina"], json!(4));
        assert_eq!(out["strengths"][0], json!(1));
    }

    #[test]
    fn unparseable_wrapper_payload_is_kept() {
        let out = unwrap_extended_numbers(json!({ "$numberInt": "not-a-number" }));
        assert_eq!(out, json!("not-a-number"));
    }

    #[test]
    fn structured_abilities_are_never_backfilled() {
        let out = normalize(json!({
            "name": "Rock Lee",
            "abilities": { "kekkei_genkai": null, "unique_jutsu": ["Front Lotus"] }
        }));
        // No table lookup once abilities is an object, even a partial one
        assert_eq!(out["abilities"]["unique_jutsu"], json!(["Front Lotus"]));
        assert!(out["abilities"].get("special_abilities").is_none());
    }
}
