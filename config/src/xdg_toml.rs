//! `[env]` table of `config.toml`.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::LoadError;

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// Reads the `[env]` table at `path`. A missing file or section yields an empty map.
pub(crate) fn read_env_table(path: &Path) -> Result<HashMap<String, String>, LoadError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(source) => {
            return Err(LoadError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let file: ConfigFile = toml::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_env_table_and_ignores_other_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[env]\nOPENAI_MODEL = \"gpt-4o-mini\"\n\n[ui]\ntheme = \"dark\"\n",
        )
        .unwrap();
        let map = read_env_table(&path).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["OPENAI_MODEL"], "gpt-4o-mini");
    }

    #[test]
    fn missing_file_or_section_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_env_table(&dir.path().join("none.toml")).unwrap().is_empty());

        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[other]\nx = 1\n").unwrap();
        assert!(read_env_table(&path).unwrap().is_empty());
    }
}
