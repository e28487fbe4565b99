use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::{errors::PlayLogError, export::validate_file_name, log_warn};

const ENABLE_LOGS: bool = true;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "play_tags.csv";

/// When the "use current time" stamp is read from the clock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TimestampSampling {
    /// Time the form was last drawn.
    #[default]
    Render,
    /// Time "Add Entry" was pressed.
    Submit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggerSettings {
    pub timestamp_sampling: TimestampSampling,
    pub require_play_name: bool,
    pub export_file_name: String,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            timestamp_sampling: TimestampSampling::Render,
            require_play_name: false,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UserSettings {
    #[serde(default)]
    logger: LoggerSettings,
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let mut data: UserSettings = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!("Ignoring unreadable settings at {}: {err}", path.display());
                UserSettings::default()
            })
        } else {
            UserSettings::default()
        };

        if let Err(reason) = validate_file_name(&data.logger.export_file_name) {
            log_warn!("Resetting export file name: {reason}");
            data.logger.export_file_name = DEFAULT_EXPORT_FILE_NAME.into();
        }

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn logger(&self) -> LoggerSettings {
        match self.data.read() {
            Ok(guard) => guard.logger.clone(),
            Err(poisoned) => poisoned.into_inner().logger.clone(),
        }
    }

    pub fn update_logger(&self, settings: LoggerSettings) -> Result<()> {
        validate_file_name(&settings.export_file_name).map_err(PlayLogError::Validation)?;

        let mut guard = self
            .data
            .write()
            .map_err(|_| anyhow::anyhow!("settings lock poisoned"))?;
        guard.logger = settings;
        self.persist(&guard)
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
