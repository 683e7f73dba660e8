use serde::{Deserialize, Serialize};

use crate::descriptor::StreamDescriptor;
use crate::display;
use crate::extract;
use crate::facets::StreamFacets;

/// Derive every display facet of a stream.
///
/// Total: a missing title or an unmatched token just leaves that facet
/// empty.
///
/// # Example
/// ```
/// use nuvio_parse::{classify, QualityTier, StreamDescriptor};
///
/// let stream = StreamDescriptor {
///     title: Some("Movie.2023.1080p.HDR.💾 4.2 GB".into()),
///     ..Default::default()
/// };
/// let facets = classify(&stream);
/// assert_eq!(facets.quality_tier, Some(QualityTier::Hd));
/// assert!(facets.is_hdr);
/// assert_eq!(facets.size_label.as_deref(), Some("4.2 GB"));
/// ```
pub fn classify(stream: &StreamDescriptor) -> StreamFacets {
    let title = stream.title_text();
    StreamFacets {
        quality_tier: extract::quality_tier(title),
        is_hdr: extract::is_hdr(title),
        is_dolby_vision: extract::is_dolby_vision(title),
        size_label: extract::size_label(title),
        is_debrid: stream.cached,
    }
}

/// Everything a stream list row renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamCard {
    pub display_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_line: Option<String>,
    pub facets: StreamFacets,
}

impl StreamCard {
    pub fn from_descriptor(stream: &StreamDescriptor) -> Self {
        Self {
            display_title: display::display_title(stream).to_string(),
            secondary_line: display::secondary_line(stream).map(str::to_string),
            facets: classify(stream),
        }
    }
}

/// Build cards for a whole stream list, keeping its order.
pub fn classify_all(streams: &[StreamDescriptor]) -> Vec<StreamCard> {
    let cards: Vec<StreamCard> = streams.iter().map(StreamCard::from_descriptor).collect();
    tracing::debug!(
        streams = cards.len(),
        hd = cards.iter().filter(|c| c.facets.quality_tier.is_some()).count(),
        debrid = cards.iter().filter(|c| c.facets.is_debrid).count(),
        "classified stream list"
    );
    cards
}
