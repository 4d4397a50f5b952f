use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::application::services::PollPolicy;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub remote: RemoteSettings,
    pub poll: PollSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteSettings {
    pub base_url: String,
    /// Local file holding the bearer credential, read once at startup.
    pub api_key_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollSettings {
    pub interval_secs: u64,
    pub max_interval_secs: u64,
    pub deadline_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub podcasts_dir: PathBuf,
    pub mp3_dir: PathBuf,
    pub study_guides_dir: PathBuf,
    pub cache_file: PathBuf,
}

impl Settings {
    /// Environment-variable configuration with local-development defaults.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT", 3001),
            },
            remote: RemoteSettings {
                base_url: env_or("AUTOCONTENT_BASE_URL", "https://api.autocontentapi.com"),
                api_key_file: env_or("API_KEY_FILE", "API-KEY.txt").into(),
            },
            poll: PollSettings {
                interval_secs: env_parse("POLL_INTERVAL_SECS", 5),
                max_interval_secs: env_parse("POLL_MAX_INTERVAL_SECS", 60),
                deadline_secs: env_parse("POLL_DEADLINE_SECS", 600),
            },
            storage: StorageSettings {
                podcasts_dir: env_or("PODCASTS_DIR", "podcasts").into(),
                mp3_dir: env_or("MP3_DIR", "mp3").into(),
                study_guides_dir: env_or("STUDY_GUIDES_DIR", "study_guides").into(),
                cache_file: env_or("CACHE_FILE", "audio_cache.json").into(),
            },
        }
    }
}

impl PollSettings {
    pub fn policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_secs(self.interval_secs),
            max_interval: Duration::from_secs(self.max_interval_secs),
            deadline: Duration::from_secs(self.deadline_secs),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr + Copy>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
