mod episode;
mod selection;

pub use episode::{EpisodeCollection, EpisodeRecord};
pub use selection::{MediaKind, SelectionRequest};
