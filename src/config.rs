use crate::errors::{GlucoseError, Result};
use crate::gemini::GeminiClient;
use crate::insight::{MockGenerator, TextGenerator};
use crate::storage::resolve_data_path;
use std::{env, path::PathBuf, sync::Arc};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightBackend {
    Gemini,
    Mock,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub backend: InsightBackend,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let backend = match env::var("INSIGHT_BACKEND").as_deref() {
            Ok("mock") => InsightBackend::Mock,
            _ => InsightBackend::Gemini,
        };

        let api_key = non_empty_var(API_KEY_VAR).or_else(|| non_empty_var("API_KEY"));

        Self {
            port,
            data_path: resolve_data_path(),
            backend,
            api_key,
            model: non_empty_var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_empty_var("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Builds the configured text generator. Fails with `MissingCredential`
    /// when the Gemini backend is selected without an API key.
    pub fn text_generator(&self) -> Result<Arc<dyn TextGenerator>> {
        match self.backend {
            InsightBackend::Mock => Ok(Arc::new(MockGenerator::new())),
            InsightBackend::Gemini => {
                let api_key = self
                    .api_key
                    .as_deref()
                    .ok_or(GlucoseError::MissingCredential(API_KEY_VAR))?;
                Ok(Arc::new(GeminiClient::new(&self.base_url, &self.model, api_key)))
            }
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
