//! Runtime settings read from the environment.
//!
//! The `config` crate loads `.env` and `~/.config/tutor/config.toml` into the process
//! environment first; [`TutorSettings::from_env`] then reads the resolved values.

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::DEFAULT_RECURSION_LIMIT;
use crate::search::DEFAULT_FIRECRAWL_API_URL;

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("TUTOR_RECURSION_LIMIT must be a positive integer, got {0:?}")]
    InvalidRecursionLimit(String),
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
}

/// Everything needed to build the tutor graph against real backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorSettings {
    pub openai_api_key: Option<String>,
    /// Custom OpenAI-compatible endpoint (`OPENAI_BASE_URL` or `OPENAI_API_BASE`).
    pub openai_base_url: Option<String>,
    pub model: String,
    /// Without a key, every search returns the tool error sentinel.
    pub firecrawl_api_key: Option<String>,
    pub firecrawl_api_url: String,
    pub recursion_limit: usize,
    /// Directory whose `agents.yaml` overrides the embedded prompts.
    pub prompts_dir: Option<PathBuf>,
}

impl Default for TutorSettings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: None,
            model: DEFAULT_MODEL.to_string(),
            firecrawl_api_key: None,
            firecrawl_api_url: DEFAULT_FIRECRAWL_API_URL.to_string(),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            prompts_dir: None,
        }
    }
}

impl TutorSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let recursion_limit = match get("TUTOR_RECURSION_LIMIT") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(SettingsError::InvalidRecursionLimit(raw))?,
            None => DEFAULT_RECURSION_LIMIT,
        };
        Ok(Self {
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL").or_else(|| get("OPENAI_API_BASE")),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            firecrawl_api_key: get("FIRECRAWL_API_KEY"),
            firecrawl_api_url: get("FIRECRAWL_API_URL")
                .unwrap_or_else(|| DEFAULT_FIRECRAWL_API_URL.to_string()),
            recursion_limit,
            prompts_dir: get("PROMPTS_DIR").map(PathBuf::from),
        })
    }

    /// Overrides the model (e.g. from a command-line flag).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The OpenAI key, required before talking to the real backend.
    pub fn require_api_key(&self) -> Result<&str, SettingsError> {
        self.openai_api_key
            .as_deref()
            .ok_or(SettingsError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = TutorSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, TutorSettings::default());
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.recursion_limit, 25);
        assert_eq!(settings.require_api_key(), Err(SettingsError::MissingApiKey));
    }

    #[test]
    fn reads_every_variable() {
        let settings = TutorSettings::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_API_BASE", "http://localhost:8080/v1"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("FIRECRAWL_API_KEY", "fc-test"),
            ("FIRECRAWL_API_URL", "http://localhost:3002"),
            ("TUTOR_RECURSION_LIMIT", "10"),
            ("PROMPTS_DIR", "/tmp/prompts"),
        ]))
        .unwrap();
        assert_eq!(settings.require_api_key(), Ok("sk-test"));
        assert_eq!(settings.openai_base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.firecrawl_api_key.as_deref(), Some("fc-test"));
        assert_eq!(settings.firecrawl_api_url, "http://localhost:3002");
        assert_eq!(settings.recursion_limit, 10);
        assert_eq!(settings.prompts_dir, Some(PathBuf::from("/tmp/prompts")));
    }

    #[test]
    fn base_url_prefers_openai_base_url() {
        let settings = TutorSettings::from_lookup(lookup(&[
            ("OPENAI_BASE_URL", "http://a"),
            ("OPENAI_API_BASE", "http://b"),
        ]))
        .unwrap();
        assert_eq!(settings.openai_base_url.as_deref(), Some("http://a"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let settings =
            TutorSettings::from_lookup(lookup(&[("OPENAI_MODEL", "  "), ("FIRECRAWL_API_KEY", "")]))
                .unwrap();
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.firecrawl_api_key, None);
    }

    #[test]
    fn invalid_recursion_limit_is_rejected() {
        for raw in ["0", "-3", "many"] {
            assert_eq!(
                TutorSettings::from_lookup(lookup(&[("TUTOR_RECURSION_LIMIT", raw)])),
                Err(SettingsError::InvalidRecursionLimit(raw.to_string()))
            );
        }
    }
}
