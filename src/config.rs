use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Field projection for the list-all request. An empty list sends a bare `/all`.
    #[serde(default = "default_fields")]
    pub fields: Option<Vec<String>>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_flag_images")]
    pub flag_images: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    /// Override for the preference database location
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fields: default_fields(),
            vim_mode: false,
            flag_images: default_flag_images(),
            image_protocol: default_image_protocol(),
            preferences_path: None,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Failed to parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml(&text)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Fields the views read. The upstream caps a projection at ten fields, so `cca3`
/// is left out: records are keyed by common name and border codes come from `borders`.
pub const DEFAULT_FIELDS: [&str; 10] = [
    "name",
    "population",
    "region",
    "subregion",
    "capital",
    "tld",
    "currencies",
    "languages",
    "borders",
    "flags",
];

fn default_fields() -> Option<Vec<String>> {
    Some(DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect())
}

fn default_flag_images() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise `{config_dir}/wheretui/config.yaml`,
/// then `./config.yaml`; `None` means run on defaults.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("wheretui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.base_url, "https://restcountries.com/v3.1");
        assert_eq!(config.fields.as_deref().map(<[String]>::len), Some(10));
        assert!(!config.vim_mode);
        assert!(config.flag_images);
        assert_eq!(config.image_protocol, "auto");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_yaml(
            "base_url: http://localhost:8080/v3.1\nvim_mode: true\nfields: [name, cca3]\n",
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v3.1");
        assert!(config.vim_mode);
        assert_eq!(config.fields, Some(vec!["name".to_string(), "cca3".to_string()]));
        assert!(config.flag_images);
    }

    #[test]
    fn test_default_projection_reaches_list_url() {
        let config = Config::default();
        let client = crate::api::RestCountriesClient::new(config.base_url, config.fields);
        assert_eq!(
            client.all_url(),
            "https://restcountries.com/v3.1/all?fields=name,population,region,subregion,capital,tld,currencies,languages,borders,flags"
        );
    }

    #[test]
    fn test_empty_fields_sends_bare_all() {
        let config = Config::from_yaml("fields: []\n").unwrap();
        let client = crate::api::RestCountriesClient::new(config.base_url, config.fields);
        assert_eq!(client.all_url(), "https://restcountries.com/v3.1/all");
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        assert!(find_config_path(Some("/definitely/not/here.yaml")).is_err());
    }
}
