use crate::error::{ConfigErrorKind, DirlsError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use toml::Value as TomlValue;

pub const CONFIG_ENV_VAR: &str = "DIRLS_CONFIG";
const PROFILE_FILE_NAME: &str = ".dirls.toml";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefaultFormat {
    #[default]
    Short,
    Long,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PermissionFormat {
    /// `1`/`0` per bit, e.g. `101`
    #[default]
    Binary,
    /// `r`/`w`/`x` or `-` per bit, e.g. `r-x`
    Symbolic,
}

/// Zone used to render modification times.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneChoice {
    #[default]
    Local,
    Utc,
}

/// What to do when the target directory cannot be enumerated.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnreadablePolicy {
    #[default]
    Error,
    Empty,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub default_format: DefaultFormat,
    #[serde(default)]
    pub permission_format: PermissionFormat,
    #[serde(default)]
    pub sort_reverse: bool,
    #[serde(default)]
    pub time_zone: TimeZoneChoice,
    #[serde(default)]
    pub unreadable_directory: UnreadablePolicy,
}

#[derive(Clone, Debug)]
pub struct ConfigLayers {
    pub effective: Config,
    pub profile_path: Option<PathBuf>,
}

/// Loads the global config and merges the nearest `.dirls.toml` profile over it.
///
/// A broken global file is not fatal: defaults are used and the error is
/// handed back so the caller can warn about it. A broken profile is fatal.
pub fn load_config_layers(start_dir: Option<&Path>) -> Result<(ConfigLayers, Option<DirlsError>)> {
    let config_path = Config::get_config_path();
    let (global_config, config_error) = match Config::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let mut effective_config = global_config.clone();
    let profile_path = match find_profile_file(start_dir) {
        Some(path) => {
            effective_config.apply_profile_file(&path)?;
            Some(path)
        }
        None => None,
    };

    Ok((
        ConfigLayers {
            effective: effective_config,
            profile_path,
        },
        config_error,
    ))
}

/// Walks up from `start_dir` (or the working directory) looking for a profile.
/// An unusable working directory simply means there is no profile.
pub fn find_profile_file(start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut current_dir = match start_dir {
        Some(dir) => dir.to_path_buf(),
        None => match env::current_dir() {
            Ok(dir) => dir,
            Err(err) => {
                log::debug!("no working directory, skipping profile lookup: {}", err);
                return None;
            }
        },
    };

    loop {
        let candidate = current_dir.join(PROFILE_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

impl Config {
    /// Reads `path`, falling back to defaults when it does not exist.
    /// Nothing is written to disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents).map_err(|err| {
            DirlsError::Config(ConfigErrorKind::InvalidFormat(format!(
                "{}: {}",
                path.display(),
                err.message()
            )))
        })?;
        Ok(config)
    }

    pub fn apply_profile_file(&mut self, profile_path: &Path) -> Result<()> {
        if !profile_path.is_file() {
            return Err(DirlsError::Config(ConfigErrorKind::InvalidPath(
                profile_path.display().to_string(),
            )));
        }

        let contents = fs::read_to_string(profile_path)?;
        let overlay: TomlValue = toml::from_str(&contents)?;
        log::debug!("applying profile {}", profile_path.display());
        self.apply_profile_value(&overlay)
    }

    fn apply_profile_value(&mut self, overlay: &TomlValue) -> Result<()> {
        let mut base_value = TomlValue::try_from(self.clone())
            .map_err(|err| DirlsError::Config(ConfigErrorKind::InvalidFormat(err.to_string())))?;

        merge_toml_values(&mut base_value, overlay);

        let merged: Config = base_value.try_into().map_err(|err: toml::de::Error| {
            DirlsError::Config(ConfigErrorKind::InvalidFormat(err.to_string()))
        })?;

        *self = merged;
        Ok(())
    }

    pub fn get_config_path() -> PathBuf {
        if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("dirls").join("config.toml")
    }
}

fn merge_toml_values(base: &mut TomlValue, overlay: &TomlValue) {
    if let (Some(base_table), TomlValue::Table(overlay_table)) = (base.as_table_mut(), overlay) {
        for (key, overlay_value) in overlay_table {
            if let Some(existing) = base_table.get_mut(key) {
                merge_toml_values(existing, overlay_value);
            } else {
                base_table.insert(key.clone(), overlay_value.clone());
            }
        }
    } else {
        *base = overlay.clone();
    }
}
