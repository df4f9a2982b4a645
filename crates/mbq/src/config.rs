use figment::{
    Figment,
    providers::{Format, Toml},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub user_agent: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            base_url: None,
            timeout_secs: 30,
        }
    }
}

pub fn load() -> anyhow::Result<Config> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("failed to get config directory"))?
        .join("mbq")
        .join("config.toml");

    Ok(Figment::new()
        .merge(Toml::file("config.toml"))
        .merge(Toml::file(config_dir))
        .extract()?)
}
