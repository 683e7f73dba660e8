use serde::{Deserialize, Serialize};

/// One playable source candidate as handed over by an addon resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Short label, usually the addon or provider name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw descriptive text (quality, HDR, codec and size tokens).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Source is pre-cached on a debrid host.
    #[serde(default, alias = "isCached")]
    pub cached: bool,
}

impl StreamDescriptor {
    /// Title text, or the empty string when absent.
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Name text, or the empty string when absent.
    pub fn name_text(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
