use serde::{Deserialize, Serialize};

/// What kind of title the player is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Movie,
    Series,
    /// Any kind the catalog reports that we don't know about.
    #[serde(other)]
    Other,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
            Self::Other => "other",
        }
    }

    pub fn has_episodes(&self) -> bool {
        matches!(self, Self::Series)
    }
}

impl std::str::FromStr for MediaKind {
    type Err = std::convert::Infallible;

    /// Unknown kinds parse as `Other` rather than failing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Self::Movie,
            "series" => Self::Series,
            _ => Self::Other,
        })
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The position the player is currently at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    #[serde(alias = "type")]
    pub media_kind: MediaKind,
    #[serde(default)]
    pub season: Option<u32>,
    #[serde(default)]
    pub episode: Option<u32>,
    /// External episode id, when the player was opened from one.
    #[serde(default, alias = "episodeId")]
    pub identifier: Option<String>,
}

impl SelectionRequest {
    pub fn movie() -> Self {
        Self::default()
    }

    pub fn series(season: u32, episode: u32) -> Self {
        Self {
            media_kind: MediaKind::Series,
            season: Some(season),
            episode: Some(episode),
            identifier: None,
        }
    }

    pub fn by_identifier(identifier: impl Into<String>) -> Self {
        Self {
            media_kind: MediaKind::Series,
            identifier: Some(identifier.into()),
            ..Default::default()
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Both season and episode, when the request carries them.
    pub fn position(&self) -> Option<(u32, u32)> {
        Some((self.season?, self.episode?))
    }
}
