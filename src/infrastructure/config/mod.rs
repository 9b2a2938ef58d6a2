use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub tts_api_key: String,
    pub tts_api_url: String,
    pub tts_model: String,
    pub tts_voice: String,
    pub upstream_timeout_secs: u64,
    pub artifact_dir: PathBuf,
    pub keep_artifacts: bool,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            // The provider credential is required up front so a missing key
            // fails at startup instead of as a 401 from the provider.
            tts_api_key: env::var("TTS_API_KEY")?,
            tts_api_url: env::var("TTS_API_URL")
                .unwrap_or_else(|_| "https://www.mnapi.com/v1/audio/speech".to_string()),
            tts_model: env::var("TTS_MODEL").unwrap_or_else(|_| "tts-1".to_string()),
            tts_voice: env::var("TTS_VOICE").unwrap_or_else(|_| "alloy".to_string()),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            artifact_dir: env::var("ARTIFACT_DIR")
                .unwrap_or_else(|_| ".".to_string())
                .into(),
            keep_artifacts: env::var("KEEP_ARTIFACTS")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
