use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Every section has defaults matching `config/default.toml`, so a missing
/// or partial file never stops the server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub llm: LlmConfig,
    pub places: PlacesConfig,
    pub mongodb: MongoDbConfig,
    pub logging: LoggingConfig,
    
    // Secrets (from ENV only)
    pub gemini_api_key: Option<String>,
    pub google_maps_api_key: Option<String>,
    pub mongodb_uri: Option<String>,
    pub mongodb_uri_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
            request_timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    /// Optional instruction prepended to every health question
    pub system_prompt: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            temperature: None,
            max_tokens: None,
            system_prompt: None,
            base_url: None,
            timeout_secs: DEFAULT_CLIENT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlacesConfig {
    pub max_results: usize,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            max_results: mediassist_places::MAX_RESULTS,
            base_url: None,
            timeout_secs: DEFAULT_CLIENT_TIMEOUT_SECS,
        }
    }
}

const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MongoDbConfig {
    pub database: String,
    /// Keep reminders in process memory when no database is configured
    pub in_memory_fallback: bool,
}

impl Default for MongoDbConfig {
    fn default() -> Self {
        Self {
            database: "mediassist".to_string(),
            in_memory_fallback: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    /// 
    /// Hierarchy (weakest to strongest):
    /// 1. {dir}/default.toml
    /// 2. {dir}/{ENV}.toml (if ENV is set)
    /// 3. Environment variables shaped `MEDIASSIST_<SECTION>__<KEY>`
    ///    (e.g. `MEDIASSIST_LLM__MODEL`)
    /// 
    /// `{dir}` is `MEDIASSIST_CONFIG_DIR`, or `config` relative to the working
    /// directory. Missing files fall back to built-in defaults, and missing
    /// secrets are not an error here; each integration reports its own
    /// absence when used.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());
        let dir = std::env::var("MEDIASSIST_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
        
        let builder = ConfigLoader::builder()
            // 1. Load default config
            .add_source(File::with_name(&format!("{}/default", dir)).required(false))
            // 2. Load environment-specific config
            .add_source(File::with_name(&format!("{}/{}", dir, env)).required(false))
            // 3. Environment variables override everything
            .add_source(
                Environment::with_prefix("MEDIASSIST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.origins"),
            );
        
        let config = builder.build()?;
        
        let mut cfg: Config = config.try_deserialize()?;
        
        // Load secrets from ENV (not in TOML)
        cfg.gemini_api_key = non_empty_env("GEMINI_API_KEY");
        cfg.google_maps_api_key = non_empty_env("GOOGLE_MAPS_API_KEY");
        cfg.mongodb_uri = non_empty_env("MONGODB_URI");
        cfg.mongodb_uri_file = non_empty_env("MONGODB_URI_FILE").map(PathBuf::from);
        
        Ok(cfg)
    }
    
    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder()
            .add_source(File::from(path.as_ref()));
        
        let config = builder.build()?;
        config.try_deserialize()
    }
    
    /// Resolve the database connection string
    /// 
    /// `MONGODB_URI` wins over `MONGODB_URI_FILE`. `Ok(None)` means no
    /// credentials were provided at all.
    pub fn resolve_mongodb_uri(&self) -> Result<Option<String>, ConfigError> {
        if let Some(uri) = &self.mongodb_uri {
            return Ok(Some(uri.clone()));
        }
        
        let Some(path) = &self.mongodb_uri_file else {
            return Ok(None);
        };
        
        if !path.exists() {
            return Err(ConfigError::Message(format!(
                "Database credentials file not found: {}",
                path.display()
            )));
        }
        
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Message(format!(
                "Failed to read database credentials file {}: {}",
                path.display(),
                e
            ))
        })?;
        
        let uri = contents.trim();
        if uri.is_empty() {
            return Err(ConfigError::Message(format!(
                "Database credentials file is empty: {}",
                path.display()
            )));
        }
        
        Ok(Some(uri.to_string()))
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
