pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod settings;

pub use error::NuvioError;
pub use resolver::{resolve_current_description, resolve_next_episode, EpisodeResolver};
