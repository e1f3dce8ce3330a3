use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Default Gemini REST endpoint.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default request timeout toward the text provider, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct EmailGeneratorConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub provider: ProviderKind,
    pub models: ModelConfig,
    pub google: GoogleConfig,
    pub gemini: GeminiApiConfig,
    pub otlp_endpoint: Option<String>,
}

/// Which text provider backs the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
    Mock,
}

impl std::str::FromStr for ProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "mock" => Ok(ProviderKind::Mock),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "Unknown GENAI_PROVIDER '{}', expected 'gemini' or 'mock'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model used for reply generation (e.g., gemini-2.0-flash)
    pub text_model: String,
    /// Sampling temperature; provider default when unset
    pub temperature: Option<f32>,
    /// Cap on generated tokens; provider default when unset
    pub max_output_tokens: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiApiConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl EmailGeneratorConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let provider: ProviderKind = get_env("GENAI_PROVIDER", Some("gemini"), is_prod)?.parse()?;

        // The mock provider never talks to Gemini, so the key is optional there.
        let api_key_default = match provider {
            ProviderKind::Gemini => None,
            ProviderKind::Mock => Some(""),
        };

        Ok(EmailGeneratorConfig {
            common: common_config,
            provider,
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some("gemini-2.0-flash"), is_prod)?,
                temperature: parse_optional("GENAI_TEMPERATURE", env::var("GENAI_TEMPERATURE").ok()),
                max_output_tokens: parse_optional(
                    "GENAI_MAX_OUTPUT_TOKENS",
                    env::var("GENAI_MAX_OUTPUT_TOKENS").ok(),
                ),
            },
            google: GoogleConfig {
                api_key: get_env("GOOGLE_API_KEY", api_key_default, is_prod)?,
            },
            gemini: GeminiApiConfig {
                api_base_url: get_env("GEMINI_API_BASE_URL", Some(DEFAULT_GEMINI_API_BASE), is_prod)?,
                timeout_secs: parse_or_default(
                    "GEMINI_TIMEOUT_SECS",
                    &get_env(
                        "GEMINI_TIMEOUT_SECS",
                        Some(&DEFAULT_TIMEOUT_SECS.to_string()),
                        is_prod,
                    )?,
                    DEFAULT_TIMEOUT_SECS,
                ),
            },
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
        })
    }
}

fn parse_or_default<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                key,
                value = raw,
                fallback = %default,
                "Unparseable configuration value, using default"
            );
            default
        }
    }
}

fn parse_optional<T: FromStr>(key: &str, raw: Option<String>) -> Option<T> {
    let raw = raw.filter(|s| !s.trim().is_empty())?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Unparseable configuration value, ignoring");
            None
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
