//! Coercion of loosely typed catalog payloads into strict records.
//!
//! Catalog addons disagree on key names and happily send numbers as
//! strings. Everything is normalised here so the resolver only ever sees
//! well-formed `EpisodeRecord`s. Entries that can't be placed in a season
//! are dropped with a warning instead of failing the whole payload.

use std::path::Path;

use nuvio_parse::StreamDescriptor;
use serde_json::{Map, Value};

use crate::error::NuvioError;
use crate::models::{EpisodeCollection, EpisodeRecord};

const SEASON_KEYS: &[&str] = &["season", "seasonNumber", "season_number"];
const EPISODE_KEYS: &[&str] = &["episode", "episodeNumber", "episode_number", "number"];
const ALT_ID_KEYS: &[&str] = &["altId", "tvdbId", "tvdb_id"];
const NAME_KEYS: &[&str] = &["name", "title"];
const OVERVIEW_KEYS: &[&str] = &["overview", "description"];

/// Build a collection from either a grouped object (`{"1": [..]}`) or a
/// flat episode array, which is then grouped by season number.
pub fn parse_collection(value: &Value) -> EpisodeCollection {
    let mut collection = EpisodeCollection::new();
    match value {
        Value::Object(groups) => {
            for (group, entries) in groups {
                let Some(entries) = entries.as_array() else {
                    tracing::warn!(group = %group, "catalog group is not a list, skipping");
                    continue;
                };
                for episode in entries.iter().filter_map(parse_episode) {
                    collection.push(group.clone(), episode);
                }
            }
        }
        Value::Array(entries) => {
            collection = entries.iter().filter_map(parse_episode).collect();
        }
        Value::Null => {}
        other => {
            tracing::warn!(kind = json_kind(other), "unexpected catalog payload");
        }
    }
    collection
}

/// Coerce one catalog entry. `None` when season or episode is unusable.
pub fn parse_episode(value: &Value) -> Option<EpisodeRecord> {
    let Some(obj) = value.as_object() else {
        tracing::warn!(kind = json_kind(value), "dropping non-object episode entry");
        return None;
    };

    let season = first_number(obj, SEASON_KEYS);
    let episode = first_number(obj, EPISODE_KEYS).filter(|&e| e >= 1);
    let (Some(season), Some(episode)) = (season, episode) else {
        let id = obj.get("id").and_then(as_text).unwrap_or_default();
        tracing::warn!(id = %id, "dropping episode without usable season/episode");
        return None;
    };

    Some(EpisodeRecord {
        identifier: obj.get("id").and_then(as_text),
        alt_id: ALT_ID_KEYS
            .iter()
            .find_map(|k| obj.get(*k).and_then(as_u64)),
        season_number: season,
        episode_number: episode,
        name: first_text(obj, NAME_KEYS),
        overview: first_text(obj, OVERVIEW_KEYS),
    })
}

/// Stream list from either a bare array or an addon response
/// (`{"streams": [..]}`). Non-object entries are skipped.
pub fn parse_streams(value: &Value) -> Vec<StreamDescriptor> {
    let entries = match value {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(obj) => match obj.get("streams").and_then(Value::as_array) {
            Some(entries) => entries.as_slice(),
            None => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    entries.iter().filter_map(parse_stream).collect()
}

fn parse_stream(value: &Value) -> Option<StreamDescriptor> {
    let obj = value.as_object()?;
    let cached = ["cached", "isCached"]
        .iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_bool))
        .or_else(|| {
            obj.get("behaviorHints")
                .and_then(|h| h.get("cached"))
                .and_then(Value::as_bool)
        })
        .unwrap_or(false);
    Some(StreamDescriptor {
        name: obj.get("name").and_then(as_text),
        title: obj.get("title").and_then(as_text),
        cached,
    })
}

/// Read and coerce an episode catalog from a JSON file.
pub fn load_collection(path: &Path) -> Result<EpisodeCollection, NuvioError> {
    let value = read_json(path)?;
    let collection = parse_collection(&value);
    tracing::debug!(path = %path.display(), episodes = collection.len(), "loaded catalog");
    Ok(collection)
}

/// Read and coerce a stream list from a JSON file.
pub fn load_streams(path: &Path) -> Result<Vec<StreamDescriptor>, NuvioError> {
    let value = read_json(path)?;
    Ok(parse_streams(&value))
}

fn read_json(path: &Path) -> Result<Value, NuvioError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| NuvioError::Catalog(format!("{}: {e}", path.display())))?;
    Ok(serde_json::from_str(&content)?)
}

fn first_number(obj: &Map<String, Value>, keys: &[&str]) -> Option<u32> {
    keys.iter()
        .find_map(|k| obj.get(*k).and_then(as_u64))
        .and_then(|n| u32::try_from(n).ok())
}

fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| obj.get(*k).and_then(as_text))
}

/// Non-negative integer, or a string holding one.
fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Strings pass through; numbers become their decimal text.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grouped_payload() {
        let value = json!({
            "Season 1": [
                {"id": "tt1:1:1", "season": 1, "episode": 1, "overview": "Pilot"},
                {"id": "tt1:1:2", "season": "1", "episode": "2"}
            ],
            "Season 2": [
                {"seasonNumber": 2, "episodeNumber": 1, "tvdbId": "5551", "name": "Return"}
            ]
        });
        let collection = parse_collection(&value);
        assert_eq!(collection.len(), 3);
        let all: Vec<_> = collection.flatten().collect();
        assert!(all[1].is_at(1, 2));
        assert_eq!(all[2].alt_id, Some(5551));
        assert_eq!(all[2].name.as_deref(), Some("Return"));
        assert_eq!(all[2].identifier, None);
    }

    #[test]
    fn test_flat_payload_groups_by_season() {
        let value = json!([
            {"season": 2, "episode": 1},
            {"season": 1, "episode": 1, "description": "From description"}
        ]);
        let collection = parse_collection(&value);
        let groups: Vec<_> = collection.groups().map(|(k, v)| (k, v.len())).collect();
        assert_eq!(groups, vec![("1", 1), ("2", 1)]);
        let first = collection.flatten().next().unwrap();
        assert_eq!(first.overview.as_deref(), Some("From description"));
    }

    #[test]
    fn test_malformed_entries_are_dropped() {
        let value = json!({
            "1": [
                "not an episode",
                {"season": 1},
                {"season": 1, "episode": 0},
                {"season": -1, "episode": 3},
                {"season": 1, "episode": "two"},
                {"season": 1, "episode": 4}
            ],
            "2": "not a list"
        });
        let collection = parse_collection(&value);
        assert_eq!(collection.len(), 1);
        assert!(collection.flatten().next().unwrap().is_at(1, 4));
    }

    #[test]
    fn test_entry_with_id_but_no_position_is_dropped() {
        assert!(parse_episode(&json!({"id": "tt1:1:9", "season": 1})).is_none());
        assert!(parse_episode(&json!({"id": 7, "episode": "x"})).is_none());
        assert!(parse_episode(&json!({"episode": 2})).is_none());
    }

    #[test]
    fn test_specials_season_is_kept() {
        let episode = parse_episode(&json!({"season": 0, "episode": 1})).unwrap();
        assert!(episode.is_at(0, 1));
    }

    #[test]
    fn test_numeric_id_becomes_text() {
        let episode = parse_episode(&json!({"id": 42, "season": 1, "episode": 1})).unwrap();
        assert_eq!(episode.identifier.as_deref(), Some("42"));
    }

    #[test]
    fn test_unexpected_payload_is_empty() {
        assert!(parse_collection(&json!("nope")).is_empty());
        assert!(parse_collection(&Value::Null).is_empty());
    }

    #[test]
    fn test_parse_streams_shapes() {
        let response = json!({"streams": [
            {"name": "Torrentio\n1080p", "title": "Movie.1080p 💾 2 GB"},
            {"name": "RD+", "behaviorHints": {"cached": true}},
            {"title": "x", "isCached": true},
            7
        ]});
        let streams = parse_streams(&response);
        assert_eq!(streams.len(), 3);
        assert!(!streams[0].cached);
        assert!(streams[1].cached);
        assert!(streams[2].cached);

        let bare = json!([{"title": "only"}]);
        assert_eq!(parse_streams(&bare)[0].title.as_deref(), Some("only"));
        assert!(parse_streams(&json!({"other": []})).is_empty());
    }

    #[test]
    fn test_load_collection_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"[{"season": 1, "episode": 1}]"#).unwrap();
        assert_eq!(load_collection(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_load_collection_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_collection(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, NuvioError::Catalog(_)));
    }
}
