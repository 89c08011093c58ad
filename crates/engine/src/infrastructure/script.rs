//! Edit scripts: a JSON file of character edits replayed against a new sheet.
//!
//! ```json
//! {
//!   "name": "Harvey Walters",
//!   "edits": [
//!     { "type": "set_characteristic", "characteristic": "EDU", "value": 84 },
//!     { "type": "select_occupation", "name": "Journalist" }
//!   ]
//! }
//! ```

use std::path::Path;

use investigator_domain::CharacterEdit;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid script {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EditScript {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub edits: Vec<CharacterEdit>,
}

impl EditScript {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub async fn load(path: &Path) -> Result<Self, ScriptError> {
        let path_display = path.display().to_string();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ScriptError::Io {
                path: path_display.clone(),
                source,
            })?;
        let script =
            Self::from_json(&json).map_err(|source| ScriptError::Parse {
                path: path_display.clone(),
                source,
            })?;
        tracing::info!(path = %path_display, edits = script.edits.len(), "Loaded edit script");
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use investigator_domain::Characteristic;
    use std::io::Write;

    #[tokio::test]
    async fn loads_script_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "Harvey Walters",
                "edits": [
                    {{"type": "set_characteristic", "characteristic": "EDU", "value": 84}},
                    {{"type": "select_occupation", "name": "Journalist"}}
                ]
            }}"#
        )
        .unwrap();

        let script = EditScript::load(file.path()).await.unwrap();
        assert_eq!(script.name.as_deref(), Some("Harvey Walters"));
        assert_eq!(script.edits.len(), 2);
        assert_eq!(
            script.edits[0],
            CharacterEdit::SetCharacteristic {
                characteristic: Characteristic::Edu,
                value: 84
            }
        );
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EditScript::load(&dir.path().join("absent.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ScriptError::Io { .. }));
    }

    #[tokio::test]
    async fn unknown_edit_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"edits": [{{"type": "summon_shoggoth"}}]}}"#).unwrap();
        let err = EditScript::load(file.path()).await.unwrap_err();
        assert!(matches!(err, ScriptError::Parse { .. }));
    }

    #[test]
    fn empty_object_is_an_empty_script() {
        assert_eq!(EditScript::from_json("{}").unwrap(), EditScript::default());
    }
}
