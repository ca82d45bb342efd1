//! Configuration management for polymul.
//!
//! Configuration is assembled from layered sources: built-in defaults, an
//! optional TOML or JSON file, then `POLYMUL_*` environment variables. Later
//! sources override earlier ones key by key. Nested keys in the environment
//! are separated by a double underscore, so `POLYMUL_ROOTS__ORDER=8` sets
//! `roots.order`.

use crate::error::{PolymulError, PolymulResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Environment variable prefix read by [`Settings::load`].
pub const ENV_PREFIX: &str = "POLYMUL";

/// Log levels accepted in `logging.level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> PolymulResult<ConfigValue>;

    /// Get the source name
    fn source_name(&self) -> &str;
}

/// Configuration value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ConfigValue {
    /// String value
    String(String),
    /// Integer value
    Integer(i64),
    /// Float value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Array of values
    Array(Vec<ConfigValue>),
    /// Object/map of values
    Object(HashMap<String, ConfigValue>),
    /// Null value
    Null,
}

impl ConfigValue {
    /// Try to convert to string
    pub fn as_string(&self) -> PolymulResult<&str> {
        match self {
            ConfigValue::String(s) => Ok(s),
            _ => Err(PolymulError::config("Value is not a string")),
        }
    }

    /// Try to convert to integer
    pub fn as_integer(&self) -> PolymulResult<i64> {
        match self {
            ConfigValue::Integer(i) => Ok(*i),
            _ => Err(PolymulError::config("Value is not an integer")),
        }
    }

    /// Try to convert to boolean. `0` and `1` are accepted as well.
    pub fn as_boolean(&self) -> PolymulResult<bool> {
        match self {
            ConfigValue::Boolean(b) => Ok(*b),
            ConfigValue::Integer(0) => Ok(false),
            ConfigValue::Integer(1) => Ok(true),
            _ => Err(PolymulError::config("Value is not a boolean")),
        }
    }

    /// Try to convert to object
    pub fn as_object(&self) -> PolymulResult<&HashMap<String, ConfigValue>> {
        match self {
            ConfigValue::Object(obj) => Ok(obj),
            _ => Err(PolymulError::config("Value is not an object")),
        }
    }

    /// Check if value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Parse a scalar from its textual form, as found in the environment.
    fn infer(raw: &str) -> Self {
        if let Ok(i) = raw.parse::<i64>() {
            ConfigValue::Integer(i)
        } else if let Ok(b) = raw.parse::<bool>() {
            ConfigValue::Boolean(b)
        } else if let Ok(f) = raw.parse::<f64>() {
            ConfigValue::Float(f)
        } else {
            ConfigValue::String(raw.to_string())
        }
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

/// File-based configuration source
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
    format: ConfigFormat,
}

impl FileConfigSource {
    /// Create a new file config source
    pub fn new<P: AsRef<Path>>(path: P, format: ConfigFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    /// Auto-detect format from file extension
    pub fn auto_detect<P: AsRef<Path>>(path: P) -> PolymulResult<Self> {
        let path = path.as_ref();
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => ConfigFormat::Toml,
            Some("json") => ConfigFormat::Json,
            _ => {
                return Err(PolymulError::config(
                    "Cannot detect config format from file extension",
                ))
            }
        };

        Ok(Self::new(path, format))
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> PolymulResult<ConfigValue> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| PolymulError::config(format!("Failed to read config file: {e}")))?;

        match self.format {
            ConfigFormat::Toml => {
                let value: toml::Value = content
                    .parse()
                    .map_err(|e| PolymulError::config(format!("Failed to parse TOML: {e}")))?;
                Ok(toml_value_to_config_value(value))
            }
            ConfigFormat::Json => {
                let value: serde_json::Value = serde_json::from_str(&content)
                    .map_err(|e| PolymulError::config(format!("Failed to parse JSON: {e}")))?;
                Ok(json_value_to_config_value(value))
            }
        }
    }

    fn source_name(&self) -> &str {
        self.path.to_str().unwrap_or("unknown")
    }
}

/// Environment variable configuration source
#[derive(Debug, Clone)]
pub struct EnvConfigSource {
    prefix: String,
}

impl EnvConfigSource {
    /// Create a new environment config source with prefix
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ConfigSource for EnvConfigSource {
    fn load(&self) -> PolymulResult<ConfigValue> {
        let mut config = ConfigValue::Object(HashMap::new());

        for (key, value) in std::env::vars() {
            let Some(rest) = key.strip_prefix(&self.prefix) else {
                continue;
            };
            let Some(rest) = rest.strip_prefix('_') else {
                continue;
            };
            let path: Vec<String> = rest.split("__").map(str::to_lowercase).collect();
            if path.iter().any(String::is_empty) {
                continue;
            }

            config = merge_config_values(config, nest(&path, ConfigValue::infer(&value)));
        }

        Ok(config)
    }

    fn source_name(&self) -> &str {
        "environment"
    }
}

/// In-memory configuration source, used for defaults and tests.
#[derive(Debug, Clone)]
pub struct StaticConfigSource {
    name: String,
    value: ConfigValue,
}

impl StaticConfigSource {
    /// Wrap an already-built value
    pub fn new<S: Into<String>>(name: S, value: ConfigValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl ConfigSource for StaticConfigSource {
    fn load(&self) -> PolymulResult<ConfigValue> {
        Ok(self.value.clone())
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

/// Configuration manager that combines multiple sources
pub struct ConfigManager {
    sources: Vec<Box<dyn ConfigSource>>,
    cache: Option<ConfigValue>,
}

impl fmt::Debug for ConfigManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.source_name()).collect();
        f.debug_struct("ConfigManager")
            .field("sources", &names)
            .field("loaded", &self.cache.is_some())
            .finish()
    }
}

impl ConfigManager {
    /// Create a new config manager
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            cache: None,
        }
    }

    /// Add a configuration source
    pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Load configuration from all sources
    pub fn load(&mut self) -> PolymulResult<&ConfigValue> {
        let mut merged = ConfigValue::Object(HashMap::new());

        for source in &self.sources {
            let config = source.load().map_err(|e| {
                PolymulError::config(format!(
                    "Failed to load from {}: {}",
                    source.source_name(),
                    e
                ))
            })?;
            debug!(source = source.source_name(), "loaded configuration source");

            merged = merge_config_values(merged, config);
        }

        Ok(self.cache.insert(merged))
    }

    /// Get a configuration value by path (e.g., "roots.order")
    pub fn get(&self, path: &str) -> PolymulResult<&ConfigValue> {
        get_config_value_by_path(self.loaded()?, path)
    }

    /// Like [`get`](Self::get), but a missing key is `Ok(None)`.
    ///
    /// Traversing through a non-table value is still an error.
    pub fn find(&self, path: &str) -> PolymulResult<Option<&ConfigValue>> {
        find_config_value_by_path(self.loaded()?, path)
    }

    fn loaded(&self) -> PolymulResult<&ConfigValue> {
        self.cache
            .as_ref()
            .ok_or_else(|| PolymulError::config("Configuration not loaded"))
    }

    /// Check if configuration is loaded
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cache.is_some()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Root <k>: (re±imi)` lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = PolymulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(PolymulError::config(format!("Unknown output format '{other}'"))),
        }
    }
}

/// Roots-of-unity settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootsSettings {
    /// Order `n` used when none is given on the command line
    pub order: usize,
}

impl Default for RootsSettings {
    fn default() -> Self {
        Self { order: 4 }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter level when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON log lines
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Roots generator settings
    pub roots: RootsSettings,
    /// Logging settings
    pub logging: LoggingSettings,
    /// Output format
    pub output: OutputFormat,
}

impl Settings {
    /// Load defaults, then `path` (if any), then `POLYMUL_*` variables.
    pub fn load(path: Option<&Path>) -> PolymulResult<Self> {
        let mut manager = ConfigManager::new();
        if let Some(path) = path {
            manager = manager.add_source(FileConfigSource::auto_detect(path)?);
        }
        manager = manager.add_source(EnvConfigSource::new(ENV_PREFIX));
        manager.load()?;

        Self::from_manager(&manager)
    }

    /// Resolve settings from a loaded manager, falling back to defaults for
    /// missing keys.
    pub fn from_manager(manager: &ConfigManager) -> PolymulResult<Self> {
        let mut settings = Self::default();

        if let Some(value) = lookup(manager, "roots.order")? {
            let order = value.as_integer()?;
            settings.roots.order = usize::try_from(order).map_err(|_| {
                PolymulError::config(format!("roots.order must be non-negative, got {order}"))
            })?;
        }
        if let Some(value) = lookup(manager, "logging.level")? {
            settings.logging.level = value.as_string()?.to_lowercase();
        }
        if let Some(value) = lookup(manager, "logging.json")? {
            settings.logging.json = value.as_boolean()?;
        }
        if let Some(value) = lookup(manager, "output")? {
            settings.output = value.as_string()?.parse()?;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges.
    pub fn validate(&self) -> PolymulResult<()> {
        if self.roots.order == 0 {
            return Err(PolymulError::config("roots.order must be at least 1"));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(PolymulError::config(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}

fn lookup<'a>(manager: &'a ConfigManager, path: &str) -> PolymulResult<Option<&'a ConfigValue>> {
    Ok(manager.find(path)?.filter(|value| !value.is_null()))
}

// Helper functions for value conversion and manipulation

fn nest(path: &[String], leaf: ConfigValue) -> ConfigValue {
    path.iter().rev().fold(leaf, |inner, key| {
        ConfigValue::Object(HashMap::from([(key.clone(), inner)]))
    })
}

fn toml_value_to_config_value(value: toml::Value) -> ConfigValue {
    match value {
        toml::Value::String(s) => ConfigValue::String(s),
        toml::Value::Integer(i) => ConfigValue::Integer(i),
        toml::Value::Float(f) => ConfigValue::Float(f),
        toml::Value::Boolean(b) => ConfigValue::Boolean(b),
        toml::Value::Array(arr) => {
            ConfigValue::Array(arr.into_iter().map(toml_value_to_config_value).collect())
        }
        toml::Value::Table(table) => ConfigValue::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_value_to_config_value(v)))
                .collect(),
        ),
        toml::Value::Datetime(dt) => ConfigValue::String(dt.to_string()),
    }
}

fn json_value_to_config_value(value: serde_json::Value) -> ConfigValue {
    match value {
        serde_json::Value::String(s) => ConfigValue::String(s),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ConfigValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                ConfigValue::Float(f)
            } else {
                ConfigValue::String(n.to_string())
            }
        }
        serde_json::Value::Bool(b) => ConfigValue::Boolean(b),
        serde_json::Value::Array(arr) => {
            ConfigValue::Array(arr.into_iter().map(json_value_to_config_value).collect())
        }
        serde_json::Value::Object(obj) => ConfigValue::Object(
            obj.into_iter()
                .map(|(k, v)| (k, json_value_to_config_value(v)))
                .collect(),
        ),
        serde_json::Value::Null => ConfigValue::Null,
    }
}

fn merge_config_values(base: ConfigValue, overlay: ConfigValue) -> ConfigValue {
    match (base, overlay) {
        (ConfigValue::Object(mut base_map), ConfigValue::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(existing) => merge_config_values(existing, value),
                    None => value,
                };
                base_map.insert(key, merged);
            }
            ConfigValue::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

fn find_config_value_by_path<'a>(
    config: &'a ConfigValue,
    path: &str,
) -> PolymulResult<Option<&'a ConfigValue>> {
    let mut current = config;

    for part in path.split('.') {
        match current {
            ConfigValue::Object(map) => match map.get(part) {
                Some(next) => current = next,
                None => return Ok(None),
            },
            _ => {
                return Err(PolymulError::config(format!(
                    "Cannot navigate path '{path}' on non-object value"
                )))
            }
        }
    }

    Ok(Some(current))
}

fn get_config_value_by_path<'a>(config: &'a ConfigValue, path: &str) -> PolymulResult<&'a ConfigValue> {
    find_config_value_by_path(config, path)?
        .ok_or_else(|| PolymulError::config(format!("Path '{path}' not found")))
}
