//! Engine configuration from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `INVESTIGATOR_LOG` | `investigator_engine=info,investigator_domain=warn` |
//! | `INVESTIGATOR_PRETTY` | `true` |
//! | `INVESTIGATOR_SCRIPT` | unset |
//!
//! `RUST_LOG` still takes precedence over `INVESTIGATOR_LOG` when set.

use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILTER: &str = "investigator_engine=info,investigator_domain=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fallback tracing filter directive.
    pub log_filter: String,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Edit script to replay.
    pub script: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            pretty: true,
            script: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            log_filter: get("INVESTIGATOR_LOG").unwrap_or(defaults.log_filter),
            pretty: get("INVESTIGATOR_PRETTY")
                .map(|value| parse_bool(&value, defaults.pretty))
                .unwrap_or(defaults.pretty),
            script: get("INVESTIGATOR_SCRIPT").map(PathBuf::from),
        }
    }

    /// A script path given on the command line replaces the configured one.
    pub fn with_script_override(mut self, path: Option<&Path>) -> Self {
        if let Some(path) = path {
            self.script = Some(path.to_path_buf());
        }
        self
    }
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => {
            tracing::warn!(value = %other, "Unrecognised boolean, using default");
            default
        }
    }
}

/// Load `.env.local` then `.env` from the workspace root, if present.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
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
    fn defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup(&[]));
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.pretty);
        assert!(config.script.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("INVESTIGATOR_LOG", "debug"),
            ("INVESTIGATOR_PRETTY", "off"),
            ("INVESTIGATOR_SCRIPT", "edits.json"),
        ]));
        assert_eq!(config.log_filter, "debug");
        assert!(!config.pretty);
        assert_eq!(config.script, Some(PathBuf::from("edits.json")));
    }

    #[test]
    fn blank_and_garbage_values_fall_back() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("INVESTIGATOR_LOG", "   "),
            ("INVESTIGATOR_PRETTY", "maybe"),
        ]));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.pretty);
    }

    #[test]
    fn cli_script_overrides_env() {
        let config = EngineConfig::from_lookup(lookup(&[("INVESTIGATOR_SCRIPT", "env.json")]))
            .with_script_override(Some(Path::new("cli.json")));
        assert_eq!(config.script, Some(PathBuf::from("cli.json")));

        let untouched = EngineConfig::default().with_script_override(None);
        assert!(untouched.script.is_none());
    }
}
