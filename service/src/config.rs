use folio::ConverterConfig;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub concurrency: ConcurrencyConfig,
    /// Page, layout and font settings shared by every conversion.
    pub converter: ConverterConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_size_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_request_size_mb: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConcurrencyConfig {
    /// Conversions allowed to run at once; further requests wait for a slot.
    pub max_concurrent_conversions: usize,
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self { max_concurrent_conversions: 8 }
    }
}

impl Config {
    /// Loads `config/default.toml` (or the file named by `FOLIO_SERVICE_CONFIG`,
    /// without extension) when present, then layers `FOLIO_SERVICE__*`
    /// environment variables on top.
    pub fn load() -> Result<Self, config::ConfigError> {
        let explicit = std::env::var("FOLIO_SERVICE_CONFIG").ok().filter(|p| !p.is_empty());
        Self::load_from(explicit)
    }

    /// Same as [`Config::load`] with `explicit` standing in for `FOLIO_SERVICE_CONFIG`.
    pub fn load_from(explicit: Option<String>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        let candidates = explicit
            .into_iter()
            .chain(["config/default".to_string(), "service/config/default".to_string()]);
        for candidate in candidates {
            if Path::new(&format!("{}.toml", candidate)).exists() {
                tracing::debug!("Using configuration file {}.toml", candidate);
                builder = builder.add_source(config::File::with_name(&candidate));
                break;
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("FOLIO_SERVICE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn max_request_bytes(&self) -> usize {
        self.server.max_request_size_mb.saturating_mul(1024 * 1024)
    }
}
