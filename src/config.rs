use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub field: FieldConfig,
}

/// Bound configuration for an integer field.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FieldConfig {
    /// Only allow values >= this when `clamp_min` is set.
    pub min_value: i32,
    /// Only allow values <= this when `clamp_max` is set.
    pub max_value: i32,
    pub clamp_min: bool,
    pub clamp_max: bool,
    /// Relax clamp targets toward zero while typing.
    pub smart_typing_clamp: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            field: FieldConfig::default(),
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            min_value: 0,
            max_value: 100,
            clamp_min: true,
            clamp_max: false,
            smart_typing_clamp: true,
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}
