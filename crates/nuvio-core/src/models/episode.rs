use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One episode of a series, as supplied by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRecord {
    /// Opaque external id (e.g., "tt0944947:1:2").
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Alternate numeric id (e.g., a TVDB episode id).
    #[serde(default, alias = "tvdbId", skip_serializing_if = "Option::is_none")]
    pub alt_id: Option<u64>,
    #[serde(alias = "season")]
    pub season_number: u32,
    #[serde(alias = "episode")]
    pub episode_number: u32,
    /// Episode title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Synopsis; may be empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
}

impl EpisodeRecord {
    pub fn new(season_number: u32, episode_number: u32) -> Self {
        Self {
            season_number,
            episode_number,
            ..Default::default()
        }
    }

    /// Short position label, e.g. "S01E02".
    pub fn code(&self) -> String {
        format!("S{:02}E{:02}", self.season_number, self.episode_number)
    }

    pub fn is_at(&self, season: u32, episode: u32) -> bool {
        self.season_number == season && self.episode_number == episode
    }

    /// Exact match on the external id, or on the alternate id's decimal form.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.identifier.as_deref() == Some(identifier)
            || self
                .alt_id
                .is_some_and(|alt| alt.to_string() == identifier)
    }
}

/// Episodes grouped by an arbitrary key, usually the season label.
///
/// Groups iterate in key order, so flattening is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeCollection {
    groups: BTreeMap<String, Vec<EpisodeRecord>>,
}

impl EpisodeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an episode to the named group, creating it if needed.
    pub fn push(&mut self, group: impl Into<String>, episode: EpisodeRecord) {
        self.groups.entry(group.into()).or_default().push(episode);
    }

    /// Every episode across all groups, group by group.
    pub fn flatten(&self) -> impl Iterator<Item = &EpisodeRecord> {
        self.groups.values().flatten()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[EpisodeRecord])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<EpisodeRecord> for EpisodeCollection {
    /// Group loose records by their season number.
    fn from_iter<I: IntoIterator<Item = EpisodeRecord>>(iter: I) -> Self {
        let mut collection = Self::new();
        for episode in iter {
            collection.push(episode.season_number.to_string(), episode);
        }
        collection
    }
}
