use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

pub const DEFAULT_PORT: u16 = 8080;

/// Where service2 answers in a local deployment.
pub const DEFAULT_SERVICE2_HELLO_URL: &str = "http://localhost:8081/service2/hello";

#[derive(Debug, Clone, Deserialize)]
pub struct Service1Config {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service2: Service2Settings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service2Settings {
    /// Full URL of service2's greeting route.
    pub hello_url: String,
}

impl Default for Service2Settings {
    fn default() -> Self {
        Self {
            hello_url: DEFAULT_SERVICE2_HELLO_URL.to_string(),
        }
    }
}

impl Service1Config {
    pub fn load() -> Result<Self, AppError> {
        let settings = core_config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("service2.hello_url", DEFAULT_SERVICE2_HELLO_URL)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for Service1Config {
    fn default() -> Self {
        Self {
            common: core_config::Config {
                port: DEFAULT_PORT,
                ..Default::default()
            },
            service2: Service2Settings::default(),
        }
    }
}
