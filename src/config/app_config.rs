use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub admission: AdmissionConfig,
    pub budget: BudgetConfig,
    pub generation: GenerationConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Per-client rate window settings
#[derive(Debug, Clone, Deserialize)]
pub struct AdmissionConfig {
    pub max_requests: u32,
    pub window_seconds: u64,
}

/// Monthly spend ceilings
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetConfig {
    pub monthly_cost_limit_usd: f64,
    pub max_monthly_tokens: u64,
}

/// Completion provider settings
///
/// The API key comes from the `OPENAI_API_KEY` environment variable, never
/// from config files.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub model: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the persisted usage map
    pub usage_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            max_requests: 3,
            window_seconds: 3600,
        }
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            monthly_cost_limit_usd: 10.0,
            max_monthly_tokens: 3_000_000,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            base_url: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            usage_file: "data/token-usage.json".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
