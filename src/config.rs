use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the config-file API key.
pub const API_KEY_ENV: &str = "NEWS_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_mins: u64,
    /// NewsAPI key. Left empty in the generated file; `NEWS_API_KEY` wins
    /// when both are set.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_refresh_interval() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval_mins: default_refresh_interval(),
            api_key: None,
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("cloud-radar");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir.join("config.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Resolve the NewsAPI key, or fail with instructions. There is no
    /// default key and none is ever baked into the binary.
    pub fn resolve_api_key(&self) -> Result<String> {
        let from_env = std::env::var(API_KEY_ENV).ok();
        match api_key_from(from_env, self.api_key.as_deref()) {
            Some(key) => Ok(key),
            None => Err(anyhow::anyhow!(
                "no NewsAPI key configured: set {} or add \"api_key\" to {}",
                API_KEY_ENV,
                Self::config_path()?.display()
            )),
        }
    }

    pub fn test_config() -> Self {
        Self {
            refresh_interval_mins: 30,
            api_key: Some("test-key".to_string()),
        }
    }
}

/// Environment value takes precedence over the config file; blank values
/// count as unset.
fn api_key_from(env: Option<String>, file: Option<&str>) -> Option<String> {
    env.filter(|k| !k.trim().is_empty())
        .or_else(|| file.map(str::to_string))
        .filter(|k| !k.trim().is_empty())
}
