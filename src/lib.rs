use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError};
use serde::Deserialize;

pub mod application;
pub mod domain;
pub mod infrastructure;

const CONFIG_FILE: &str = "hbs";

#[derive(Clone, Debug, Deserialize)]
pub struct HbsConfig {
    pub logger: Logger,
    pub date: DateFormat,
}

impl HbsConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix("HBS").separator("_"))
            .build()?
            .try_deserialize::<HbsConfig>()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("logger.level", "INFO")?
            .set_default("date.format", "%Y-%m-%d")
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    pub level: Level,
}

/// 日付の入出力形式 (chrono の strftime 書式)
#[derive(Clone, Debug, Deserialize)]
pub struct DateFormat {
    pub format: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub enum Level {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}
