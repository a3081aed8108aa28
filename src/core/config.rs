use std::env;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 25;

/// Per-invocation configuration. Read once from the environment at the start
/// of each request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_api_base: Option<String>,
    pub remote_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: None,
            gemini_api_base: None,
            remote_timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, so callers can supply
    /// values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let remote_timeout_secs = match non_empty("GEMINI_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(format!(
                        "GEMINI_TIMEOUT_SECS: expected a positive integer, got {raw:?}"
                    ));
                }
            },
            None => DEFAULT_REMOTE_TIMEOUT_SECS,
        };

        Ok(Self {
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_model: non_empty("GEMINI_MODEL"),
            gemini_api_base: non_empty("GEMINI_API_BASE"),
            remote_timeout_secs,
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.gemini_model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        self.gemini_api_base
            .as_deref()
            .unwrap_or(DEFAULT_GEMINI_API_BASE)
    }

    #[must_use]
    pub fn has_remote_credential(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.model_name(), "gemini-2.5-flash");
        assert_eq!(config.api_base(), DEFAULT_GEMINI_API_BASE);
        assert!(!config.has_remote_credential());
    }

    #[test]
    fn test_reads_all_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "key-123"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("GEMINI_API_BASE", "http://localhost:9999"),
            ("GEMINI_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.gemini_api_key.as_deref(), Some("key-123"));
        assert_eq!(config.model_name(), "gemini-2.5-pro");
        assert_eq!(config.api_base(), "http://localhost:9999");
        assert_eq!(config.remote_timeout_secs, 5);
        assert!(config.has_remote_credential());
    }

    #[test]
    fn test_empty_api_key_counts_as_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "  ")])).unwrap();
        assert!(!config.has_remote_credential());
    }

    #[test]
    fn test_rejects_bad_timeout() {
        for raw in ["0", "-3", "soon"] {
            let err = AppConfig::from_lookup(lookup_from(&[("GEMINI_TIMEOUT_SECS", raw)]))
                .unwrap_err();
            assert!(err.contains("GEMINI_TIMEOUT_SECS"), "unexpected error: {err}");
        }
    }
}
