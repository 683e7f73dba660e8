use crate::models::{EpisodeCollection, EpisodeRecord, SelectionRequest};

/// Flattened, read-only view of a series used to answer player lookups.
///
/// Matching is by field equality, never by position, so the catalog does
/// not need to be sorted. When two records share a key the first one in
/// flattened order wins.
#[derive(Debug, Clone, Default)]
pub struct EpisodeResolver<'a> {
    episodes: Vec<&'a EpisodeRecord>,
}

impl<'a> EpisodeResolver<'a> {
    pub fn new(collection: &'a EpisodeCollection) -> Self {
        Self {
            episodes: collection.flatten().collect(),
        }
    }

    /// An absent collection is an empty universe.
    pub fn from_optional(collection: Option<&'a EpisodeCollection>) -> Self {
        collection.map(Self::new).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// The episode the request points at.
    ///
    /// Strategy: identifier → (season, episode) → None.
    pub fn current_episode(&self, request: &SelectionRequest) -> Option<&'a EpisodeRecord> {
        if !request.media_kind.has_episodes() {
            return None;
        }

        // Pass 1: external or alternate id.
        if let Some(id) = request.identifier.as_deref().filter(|id| !id.is_empty()) {
            if let Some(ep) = self.find(|ep| ep.matches_identifier(id)) {
                return Some(ep);
            }
        }

        // Pass 2: season/episode position.
        let (season, episode) = request.position()?;
        self.find_at(season, episode)
    }

    /// Trimmed synopsis of the current episode, or "" when unknown.
    pub fn current_description(&self, request: &SelectionRequest) -> String {
        self.current_episode(request)
            .and_then(|ep| ep.overview.as_deref())
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }

    /// The episode to play after the requested one.
    ///
    /// Strategy: same-season successor → next season's opener → None.
    pub fn next_episode(&self, request: &SelectionRequest) -> Option<&'a EpisodeRecord> {
        if !request.media_kind.has_episodes() {
            return None;
        }
        let (season, episode) = request.position()?;

        if let Some(next) = episode
            .checked_add(1)
            .and_then(|e| self.find_at(season, e))
        {
            return Some(next);
        }

        let rollover = season.checked_add(1).and_then(|s| self.find_at(s, 1));
        if rollover.is_none() {
            tracing::debug!(season, episode, "no next episode in catalog");
        }
        rollover
    }

    fn find_at(&self, season: u32, episode: u32) -> Option<&'a EpisodeRecord> {
        self.find(|ep| ep.is_at(season, episode))
    }

    fn find(&self, pred: impl Fn(&EpisodeRecord) -> bool) -> Option<&'a EpisodeRecord> {
        self.episodes.iter().copied().find(|&ep| pred(ep))
    }
}

/// Synopsis of the requested episode; "" for movies, misses and absent data.
pub fn resolve_current_description(
    collection: Option<&EpisodeCollection>,
    request: &SelectionRequest,
) -> String {
    EpisodeResolver::from_optional(collection).current_description(request)
}

/// Next episode to play, rolling over into the next season when needed.
pub fn resolve_next_episode<'a>(
    collection: Option<&'a EpisodeCollection>,
    request: &SelectionRequest,
) -> Option<&'a EpisodeRecord> {
    EpisodeResolver::from_optional(collection).next_episode(request)
}
