use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default Gemini REST base, including the API version segment.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default request body cap (20MB) for media uploads.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Placeholder persona used when no persona is configured.
pub const DEFAULT_PERSONA_CONTEXT: &str = "
You are Daksh, an AI assistant representing a person. Here is their resume information:
my info
Rules:
1. Answer questions based ONLY on the information provided in this resume
2. If asked about something not in the resume, respond with \"I don't wish to answer that\"
3. Be friendly and professional
4. Keep responses concise and relevant
5. Answers should never exceed 300 words
";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub persona: PersonaSettings,
    pub upload: UploadSettings,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    pub model: String,
    /// Base URL up to and including the version segment, without a trailing slash.
    pub api_base: String,
    /// `None` leaves upstream calls unbounded.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct PersonaSettings {
    pub context: String,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_bytes: usize,
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let timeout = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(parse_setting(
                "GEMINI_TIMEOUT_SECS",
                &raw,
            )?)),
            Err(_) => None,
        };

        Ok(RelayConfig {
            common: common_config,
            gemini: GeminiSettings {
                api_key: Secret::new(get_env("GEMINI_API_KEY", None, is_prod)?),
                model: get_env("GEMINI_MODEL", Some(DEFAULT_MODEL), is_prod)?,
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_API_BASE), is_prod)?
                    .trim_end_matches('/')
                    .to_string(),
                timeout,
            },
            persona: PersonaSettings {
                context: load_persona(is_prod)?,
            },
            upload: UploadSettings {
                max_bytes: parse_setting(
                    "MAX_UPLOAD_BYTES",
                    &get_env(
                        "MAX_UPLOAD_BYTES",
                        Some(&DEFAULT_MAX_UPLOAD_BYTES.to_string()),
                        is_prod,
                    )?,
                )?,
            },
            log_level: get_env("LOG_LEVEL", Some("info"), false)?,
        })
    }
}

/// Resolve the persona text: a file path wins over inline text, which wins
/// over the built-in placeholder (dev only).
fn load_persona(is_prod: bool) -> Result<String, AppError> {
    if let Ok(path) = env::var("PERSONA_CONTEXT_FILE") {
        return std::fs::read_to_string(&path).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Failed to read PERSONA_CONTEXT_FILE {}: {}",
                path,
                e
            ))
        });
    }

    get_env("PERSONA_CONTEXT", Some(DEFAULT_PERSONA_CONTEXT), is_prod)
}

fn parse_setting<T>(key: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!("{} is invalid ({:?}): {}", key, raw, e))
    })
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
