use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

pub const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, Clone, Deserialize)]
pub struct Service2Config {
    #[serde(flatten)]
    pub common: core_config::Config,
}

impl Service2Config {
    pub fn load() -> Result<Self, AppError> {
        let settings = core_config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for Service2Config {
    fn default() -> Self {
        Self {
            common: core_config::Config {
                port: DEFAULT_PORT,
                ..Default::default()
            },
        }
    }
}
