//! Application configuration

mod app_config;

pub use app_config::{
    AdmissionConfig, AppConfig, BudgetConfig, GenerationConfig, LogFormat, LoggingConfig,
    ServerConfig, StorageConfig,
};
