//! Layered configuration for the domain core
//!
//! Sources, lowest precedence first:
//! 1. An optional file (`.toml`, `.json`, `.yaml`/`.yml`)
//! 2. Environment variables such as `TODOAPP_LOGGING__LEVEL=debug`
//!
//! An absent policy section means "use the default rule set"; a present one
//! replaces the defaults entirely.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todoapp_common::{LogLevel, LogOptions};
use tracing::info;

use crate::errors::DomainError;
use crate::permission::Permission;
use crate::role::UserRole;
use crate::services::{TodoStatusTransitionPolicy, UserPermissionPolicy};
use crate::status::TodoStatus;

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "TODOAPP";

/// Configuration result type
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<DomainError> for ConfigError {
    fn from(err: DomainError) -> Self {
        ConfigError::Validation(err.to_string())
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    pub logging: LoggingConfig,
    pub policies: PolicyConfig,
}

impl DomainConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.logging.log_level()?;
        self.policies.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn log_level(&self) -> ConfigResult<LogLevel> {
        LogLevel::parse(&self.level)
            .ok_or_else(|| ConfigError::Validation(format!("Unknown log level: {}", self.level)))
    }

    pub fn to_log_options(&self) -> ConfigResult<LogOptions> {
        Ok(LogOptions::with_level(self.log_level()?))
    }
}

/// Rule tables written as codes, e.g. `TODO = ["IN_PROGRESS", "DELETED"]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<BTreeMap<String, Vec<String>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_permissions: Option<BTreeMap<String, Vec<String>>>,
}

impl PolicyConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(transitions) = &self.transitions {
            parse_transitions(transitions)?;
        }
        if let Some(role_permissions) = &self.role_permissions {
            parse_role_permissions(role_permissions)?;
        }
        Ok(())
    }

    pub fn build_transition_policy(&self) -> ConfigResult<TodoStatusTransitionPolicy> {
        match &self.transitions {
            Some(transitions) => Ok(TodoStatusTransitionPolicy::with_rules(parse_transitions(
                transitions,
            )?)),
            None => Ok(TodoStatusTransitionPolicy::new()),
        }
    }

    pub fn build_permission_policy(&self) -> ConfigResult<UserPermissionPolicy> {
        match &self.role_permissions {
            Some(role_permissions) => Ok(UserPermissionPolicy::with_permissions(
                parse_role_permissions(role_permissions)?,
            )),
            None => Ok(UserPermissionPolicy::new()),
        }
    }
}

fn parse_transitions(
    raw: &BTreeMap<String, Vec<String>>,
) -> ConfigResult<HashMap<TodoStatus, HashSet<TodoStatus>>> {
    let mut rules = HashMap::with_capacity(raw.len());
    for (from, targets) in raw {
        let from = TodoStatus::from_code(from)?;
        let targets = targets
            .iter()
            .map(|code| TodoStatus::from_code(code))
            .collect::<Result<HashSet<_>, _>>()?;
        rules.insert(from, targets);
    }
    Ok(rules)
}

fn parse_role_permissions(
    raw: &BTreeMap<String, Vec<String>>,
) -> ConfigResult<HashMap<UserRole, HashSet<Permission>>> {
    let mut role_permissions = HashMap::with_capacity(raw.len());
    for (role, permissions) in raw {
        let role = UserRole::from_code(role)?;
        let permissions = permissions
            .iter()
            .map(|code| Permission::from_code(code))
            .collect::<Result<HashSet<_>, _>>()?;
        role_permissions.insert(role, permissions);
    }
    Ok(role_permissions)
}

/// Loads and saves [`DomainConfig`]
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Environment only
    pub fn new() -> Self {
        Self {
            path: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// File (if it exists) overlaid by the environment
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load(&self) -> ConfigResult<DomainConfig> {
        let mut builder = Config::builder();
        if let Some(path) = &self.path {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__"),
        );

        let config: DomainConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        info!(
            path = ?self.path,
            level = %config.logging.level,
            custom_transitions = config.policies.transitions.is_some(),
            custom_permissions = config.policies.role_permissions.is_some(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Write `config` in the format implied by the file extension
    pub fn save(&self, config: &DomainConfig) -> ConfigResult<()> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| ConfigError::Validation("No configuration path set".to_string()))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let content = match extension.as_str() {
            "toml" => {
                toml::to_string_pretty(config).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            "json" => {
                serde_json::to_string_pretty(config).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            "yaml" | "yml" => {
                serde_yaml::to_string(config).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            other => {
                return Err(ConfigError::Validation(format!(
                    "Unsupported configuration format: '{}'",
                    other
                )))
            }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
