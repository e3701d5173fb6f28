use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATASET: &str = "materiales_energyplus.xlsx";
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3-0324:free";
pub const DEFAULT_REFERER: &str = "https://tudespacho-academico.com";
pub const DEFAULT_TITLE: &str = "Ficha Tecnica AI";

#[derive(Clone, Debug)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub base_url: String,
    pub model: String,
    pub referer: String,
    pub title: String,
    pub api_key: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            api_key: None,
            timeout: None,
        }
    }
}

impl Config {
    /// Defaults overlaid with whatever the process environment provides.
    /// `.env` must already be loaded by the caller.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty("FICHA_DATASET") {
            config.dataset_path = PathBuf::from(path);
        }
        if let Some(url) = non_empty("MENTOR_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(model) = non_empty("MENTOR_MODEL") {
            config.model = model;
        }
        config.api_key = non_empty("OPENROUTER_API_KEY");

        if let Some(secs) = non_empty("MENTOR_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(0) => {}
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(_) => log::warn!("Ignoring invalid MENTOR_TIMEOUT_SECS value: {}", secs),
            }
        }

        config
    }
}
