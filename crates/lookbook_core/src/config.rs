//! Credential configuration for the tabular store and the text helper.
//!
//! # Responsibility
//! - Build an explicit `LookbookConfig` from process environment or a
//!   caller-provided lookup.
//! - Persist interactively entered credentials in a JSON settings file.
//!
//! # Invariants
//! - Empty or whitespace-only values are treated as absent.
//! - A missing credential is reported before any network request is built.
//! - Configuration is passed by value into clients; there is no global state.

use crate::model::entity::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_EXA_API_URL: &str = "https://api.exa.ai";
pub const DEFAULT_EXA_MODEL: &str = "exa-chat";
pub const DEFAULT_MENTOR_TABLE: &str = "Mentors";
pub const DEFAULT_FOUNDER_TABLE: &str = "tbl0QMMe09tybCQ0K";

/// Configuration-layer error.
#[derive(Debug)]
pub enum ConfigError {
    /// A required credential for one entity kind is absent.
    MissingCredential {
        kind: EntityKind,
        field: &'static str,
    },
    /// The text-generation API key is absent.
    MissingApiKey,
    /// A value supplied for saving is invalid.
    InvalidSetting(String),
    /// Settings file could not be read or written.
    SettingsIo { path: PathBuf, source: std::io::Error },
    /// Settings file content is not valid JSON for the settings shape.
    SettingsFormat { path: PathBuf, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential { kind, field } => write!(
                f,
                "{kind} Airtable credentials not configured: missing {field}"
            ),
            Self::MissingApiKey => write!(f, "Exa API key not configured"),
            Self::InvalidSetting(message) => write!(f, "invalid setting: {message}"),
            Self::SettingsIo { path, source } => {
                write!(f, "settings file `{}`: {source}", path.display())
            }
            Self::SettingsFormat { path, message } => {
                write!(f, "settings file `{}` is malformed: {message}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SettingsIo { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Token, base id and table name/id for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialTriple {
    pub token: String,
    pub base_id: String,
    pub table: String,
}

impl CredentialTriple {
    pub fn new(
        token: impl Into<String>,
        base_id: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            base_id: base_id.into(),
            table: table.into(),
        }
    }

    /// Returns the first missing field name, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.token.trim().is_empty() {
            Some("token")
        } else if self.base_id.trim().is_empty() {
            Some("base_id")
        } else if self.table.trim().is_empty() {
            Some("table")
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Validates completeness for `kind`.
    pub fn require(&self, kind: EntityKind) -> Result<&Self, ConfigError> {
        match self.missing_field() {
            Some(field) => Err(ConfigError::MissingCredential { kind, field }),
            None => Ok(self),
        }
    }
}

/// Text-generation helper settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExaConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
}

impl Default for ExaConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_EXA_MODEL.to_string(),
            api_url: DEFAULT_EXA_API_URL.to_string(),
        }
    }
}

impl ExaConfig {
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.api_key.trim().is_empty() {
            Err(ConfigError::MissingApiKey)
        } else {
            Ok(self)
        }
    }
}

/// Full application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookbookConfig {
    pub mentor: CredentialTriple,
    pub founder: CredentialTriple,
    pub company: CredentialTriple,
    pub airtable_api_url: String,
    pub exa: ExaConfig,
}

impl Default for LookbookConfig {
    fn default() -> Self {
        Self {
            mentor: CredentialTriple::new("", "", DEFAULT_MENTOR_TABLE),
            founder: CredentialTriple::new("", "", DEFAULT_FOUNDER_TABLE),
            company: CredentialTriple::default(),
            airtable_api_url: DEFAULT_AIRTABLE_API_URL.to_string(),
            exa: ExaConfig::default(),
        }
    }
}

impl LookbookConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, applying per-kind defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let read_or = |key: &str, default: &str| read(key).unwrap_or_else(|| default.to_string());

        Self {
            mentor: CredentialTriple::new(
                read_or("MENTOR_AIRTABLE_API_TOKEN", ""),
                read_or("MENTOR_AIRTABLE_BASE_ID", ""),
                read_or("MENTOR_AIRTABLE_TABLE_NAME", DEFAULT_MENTOR_TABLE),
            ),
            founder: CredentialTriple::new(
                read_or("FOUNDER_AIRTABLE_API_TOKEN", ""),
                read_or("FOUNDER_AIRTABLE_BASE_ID", ""),
                read_or("FOUNDER_AIRTABLE_TABLE_ID", DEFAULT_FOUNDER_TABLE),
            ),
            company: CredentialTriple::new(
                read_or("COMPANY_AIRTABLE_API_TOKEN", ""),
                read_or("COMPANY_AIRTABLE_BASE_ID", ""),
                read_or("COMPANY_AIRTABLE_TABLE_ID", ""),
            ),
            airtable_api_url: read_or("AIRTABLE_API_URL", DEFAULT_AIRTABLE_API_URL),
            exa: ExaConfig {
                api_key: read_or("EXA_API_KEY", ""),
                model: read_or("EXA_MODEL", DEFAULT_EXA_MODEL),
                api_url: read_or("EXA_API_URL", DEFAULT_EXA_API_URL),
            },
        }
    }

    pub fn credentials(&self, kind: EntityKind) -> &CredentialTriple {
        match kind {
            EntityKind::Mentor => &self.mentor,
            EntityKind::Founder => &self.founder,
            EntityKind::Company => &self.company,
        }
    }

    pub fn credentials_mut(&mut self, kind: EntityKind) -> &mut CredentialTriple {
        match kind {
            EntityKind::Mentor => &mut self.mentor,
            EntityKind::Founder => &mut self.founder,
            EntityKind::Company => &mut self.company,
        }
    }

    /// Overlays saved triples on top of the current values.
    ///
    /// A saved triple replaces the whole triple for its kind.
    pub fn with_settings(mut self, settings: &StoredSettings) -> Self {
        for (kind, triple) in &settings.credentials {
            *self.credentials_mut(*kind) = triple.clone();
        }
        self
    }
}

/// Persisted credential overrides, keyed by entity kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSettings {
    #[serde(default)]
    pub credentials: BTreeMap<EntityKind, CredentialTriple>,
}

/// JSON-file backed settings store.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads saved settings. A missing file yields empty settings.
    pub fn load(&self) -> Result<StoredSettings, ConfigError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoredSettings::default())
            }
            Err(source) => {
                return Err(ConfigError::SettingsIo {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|err| ConfigError::SettingsFormat {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }

    /// Validates and saves one triple, keeping other kinds untouched.
    pub fn save(&self, kind: EntityKind, triple: CredentialTriple) -> Result<(), ConfigError> {
        let triple = CredentialTriple::new(
            triple.token.trim(),
            triple.base_id.trim(),
            triple.table.trim(),
        );
        if let Some(field) = triple.missing_field() {
            return Err(ConfigError::InvalidSetting(format!(
                "{kind} {field} is required"
            )));
        }

        let mut settings = self.load()?;
        settings.credentials.insert(kind, triple);
        let encoded =
            serde_json::to_string_pretty(&settings).map_err(|err| ConfigError::SettingsFormat {
                path: self.path.clone(),
                message: err.to_string(),
            })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| ConfigError::SettingsIo {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        std::fs::write(&self.path, encoded).map_err(|source| ConfigError::SettingsIo {
            path: self.path.clone(),
            source,
        })
    }
}
