//! CLI command implementations

use std::path::{Path, PathBuf};

use clap::Subcommand;
use nuvio_core::catalog;
use nuvio_core::config::AppConfig;
use nuvio_core::models::{EpisodeRecord, MediaKind, SelectionRequest};
use nuvio_core::settings::{JsonFileStore, KeyValueStore, PlayerSettings};
use nuvio_core::{EpisodeResolver, NuvioError};
use nuvio_parse::{classify_all, StreamCard, StreamDescriptor};
use serde_json::{json, Value};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify a single stream from its name and title
    Classify {
        /// Raw stream title (quality, HDR and size tokens)
        title: Option<String>,
        /// Short stream label
        #[arg(short, long)]
        name: Option<String>,
        /// Stream is cached on a debrid host
        #[arg(long)]
        cached: bool,
    },
    /// Classify every stream in a JSON stream list or addon response
    Streams {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// Episode lookups against a JSON catalog
    Episode {
        #[command(subcommand)]
        command: EpisodeCommand,
    },
    /// Show or change player settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    /// Show configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum EpisodeCommand {
    /// Episode to play after the given one
    Next {
        /// Path to the JSON catalog
        catalog: PathBuf,
        #[arg(short, long)]
        season: u32,
        #[arg(short, long)]
        episode: u32,
        /// Media kind ("series" or "movie")
        #[arg(long, default_value = "series")]
        kind: MediaKind,
    },
    /// Synopsis of an episode, by id or by position
    Describe {
        /// Path to the JSON catalog
        catalog: PathBuf,
        #[arg(long)]
        id: Option<String>,
        #[arg(short, long)]
        season: Option<u32>,
        #[arg(short, long)]
        episode: Option<u32>,
        /// Media kind ("series" or "movie")
        #[arg(long, default_value = "series")]
        kind: MediaKind,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print the stored player settings
    Show,
    /// Update the speed boost preference
    Set {
        /// Enable or disable the hold-to-speed-up gesture
        #[arg(long)]
        enabled: Option<bool>,
        /// Boosted playback speed
        #[arg(long)]
        speed: Option<f32>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print config and settings file locations
    Path,
    /// Print the effective configuration
    Show,
    /// Write the built-in defaults to the user config file
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Handle the CLI command, returning the JSON to print
///
/// # Errors
/// Returns the first catalog, settings or config error encountered
pub fn handle_command(command: Commands, config: &AppConfig) -> Result<Value, NuvioError> {
    match command {
        Commands::Classify {
            title,
            name,
            cached,
        } => Ok(classify_one(StreamDescriptor {
            name,
            title,
            cached,
        })),
        Commands::Streams { file } => classify_file(&file),
        Commands::Episode { command } => handle_episode(command),
        Commands::Settings { command } => {
            let store = JsonFileStore::new(config.settings_path());
            handle_settings(command, &store, config)
        }
        Commands::Config { command } => handle_config(command, config),
    }
}

fn classify_one(stream: StreamDescriptor) -> Value {
    json!(StreamCard::from_descriptor(&stream))
}

fn classify_file(file: &Path) -> Result<Value, NuvioError> {
    let streams = catalog::load_streams(file)?;
    Ok(json!(classify_all(&streams)))
}

fn handle_episode(command: EpisodeCommand) -> Result<Value, NuvioError> {
    match command {
        EpisodeCommand::Next {
            catalog: path,
            season,
            episode,
            kind,
        } => {
            let collection = catalog::load_collection(&path)?;
            let request = SelectionRequest {
                media_kind: kind,
                ..SelectionRequest::series(season, episode)
            };
            let next = EpisodeResolver::new(&collection).next_episode(&request);
            Ok(next.map(episode_json).unwrap_or(Value::Null))
        }
        EpisodeCommand::Describe {
            catalog: path,
            id,
            season,
            episode,
            kind,
        } => {
            let collection = catalog::load_collection(&path)?;
            let request = SelectionRequest {
                media_kind: kind,
                season,
                episode,
                identifier: id,
            };
            let resolver = EpisodeResolver::new(&collection);
            Ok(json!({
                "episode": resolver.current_episode(&request).map(EpisodeRecord::code),
                "description": resolver.current_description(&request),
            }))
        }
    }
}

fn episode_json(episode: &EpisodeRecord) -> Value {
    let mut value = json!(episode);
    value["code"] = Value::String(episode.code());
    value
}

fn handle_settings(
    command: SettingsCommand,
    store: &dyn KeyValueStore,
    config: &AppConfig,
) -> Result<Value, NuvioError> {
    let defaults = PlayerSettings::with_default_speed(config.player.default_boosted_speed);
    let mut settings = PlayerSettings::load(store, defaults);
    if let SettingsCommand::Set { enabled, speed } = command {
        if let Some(enabled) = enabled {
            settings.speed_boost_enabled = enabled;
        }
        if let Some(speed) = speed {
            settings.set_boosted_speed(speed)?;
        }
        settings.save(store)?;
        tracing::info!(
            enabled = settings.speed_boost_enabled,
            speed = settings.boosted_speed,
            "player settings updated"
        );
    }
    Ok(json!(settings))
}

fn handle_config(command: ConfigCommand, config: &AppConfig) -> Result<Value, NuvioError> {
    match command {
        ConfigCommand::Path => Ok(json!({
            "config": AppConfig::config_path(),
            "settings": config.settings_path(),
        })),
        ConfigCommand::Show => Ok(serde_json::to_value(config)?),
        ConfigCommand::Init { force } => init_config(&AppConfig::config_path(), force),
    }
}

fn init_config(path: &Path, force: bool) -> Result<Value, NuvioError> {
    AppConfig::default().write_to(path, force)?;
    Ok(json!({ "written": path }))
}
