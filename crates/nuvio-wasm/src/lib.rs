//! JS bindings for the player UI.
//!
//! Every export takes and returns JSON strings and never throws: bad input
//! yields the same empty value the UI would show for "nothing found".

use nuvio_core::catalog;
use nuvio_core::models::SelectionRequest;
use nuvio_core::EpisodeResolver;
use nuvio_parse::{classify_all, StreamCard};
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// One stream descriptor in, one stream card out (`"{}"` on bad input).
#[wasm_bindgen]
pub fn classify_stream(input: &str) -> String {
    let Some(stream) = parse_json(input)
        .and_then(|v| catalog::parse_streams(&Value::Array(vec![v])).pop())
    else {
        return "{}".to_string();
    };
    serde_json::to_string(&StreamCard::from_descriptor(&stream)).unwrap_or_else(|_| "{}".to_string())
}

/// Stream list or addon response in, card list out (`"[]"` on bad input).
#[wasm_bindgen]
pub fn classify_streams(input: &str) -> String {
    let streams = parse_json(input)
        .map(|v| catalog::parse_streams(&v))
        .unwrap_or_default();
    serde_json::to_string(&classify_all(&streams)).unwrap_or_else(|_| "[]".to_string())
}

/// Trimmed synopsis of the requested episode, or "".
#[wasm_bindgen]
pub fn current_description(collection: &str, request: &str) -> String {
    let Some(request) = parse_request(request) else {
        return String::new();
    };
    let collection = catalog::parse_collection(&parse_json(collection).unwrap_or(Value::Null));
    EpisodeResolver::new(&collection).current_description(&request)
}

/// Next episode as JSON, or `"null"`.
#[wasm_bindgen]
pub fn next_episode(collection: &str, request: &str) -> String {
    let Some(request) = parse_request(request) else {
        return "null".to_string();
    };
    let collection = catalog::parse_collection(&parse_json(collection).unwrap_or(Value::Null));
    EpisodeResolver::new(&collection)
        .next_episode(&request)
        .and_then(|ep| serde_json::to_string(ep).ok())
        .unwrap_or_else(|| "null".to_string())
}

fn parse_json(input: &str) -> Option<Value> {
    serde_json::from_str(input).ok()
}

fn parse_request(input: &str) -> Option<SelectionRequest> {
    serde_json::from_str(input).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{"1": [
        {"id": "a", "season": 1, "episode": 1, "overview": "  One. "},
        {"id": "b", "season": 1, "episode": 2}
    ]}"#;

    #[test]
    fn test_classify_stream() {
        let out = classify_stream(r#"{"title": "Show 2160p DV", "cached": true}"#);
        let card: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(card["facets"]["qualityTier"], "HD");
        assert_eq!(card["facets"]["isDolbyVision"], true);
        assert_eq!(card["facets"]["isDebrid"], true);
    }

    #[test]
    fn test_bad_input_never_throws() {
        assert_eq!(classify_stream("not json"), "{}");
        assert_eq!(classify_stream("[]"), "{}");
        assert_eq!(classify_streams("{"), "[]");
        assert_eq!(current_description(CATALOG, "nope"), "");
        assert_eq!(next_episode("garbage", r#"{"mediaKind":"series","season":1,"episode":1}"#), "null");
    }

    #[test]
    fn test_episode_lookups() {
        let request = r#"{"mediaKind": "series", "season": 1, "episode": 1}"#;
        assert_eq!(current_description(CATALOG, request), "One.");
        let next: Value = serde_json::from_str(&next_episode(CATALOG, request)).unwrap();
        assert_eq!(next["id"], "b");
        let movie = r#"{"mediaKind": "movie", "season": 1, "episode": 1}"#;
        assert_eq!(next_episode(CATALOG, movie), "null");
    }
}
