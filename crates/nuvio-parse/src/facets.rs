use serde::{Deserialize, Serialize};

/// Resolution tier badge shown on a stream card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityTier {
    #[serde(rename = "HD")]
    Hd,
}

impl QualityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hd => "HD",
        }
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display facets derived from a single stream descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamFacets {
    /// `HD` when the title advertises 720p or better.
    pub quality_tier: Option<QualityTier>,
    /// Title mentions HDR.
    pub is_hdr: bool,
    /// Title mentions Dolby Vision.
    pub is_dolby_vision: bool,
    /// File size as written in the title (e.g., "4.2 GB").
    pub size_label: Option<String>,
    /// Source is debrid-backed.
    pub is_debrid: bool,
}
