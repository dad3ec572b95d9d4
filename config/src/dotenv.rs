//! `.env` reader: `KEY=VALUE` lines into a map.

use std::collections::HashMap;
use std::path::Path;

use crate::LoadError;

/// Parses `.env` content.
///
/// Blank lines and lines starting with `#` are skipped, as is an `export ` prefix. Values
/// may be wrapped in double quotes (with `\"` escapes) or single quotes (taken literally).
/// A `#` inside a value is kept.
fn parse(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            (!key.is_empty()).then(|| (key.to_string(), unquote(value.trim())))
        })
        .collect()
}

fn unquote(value: &str) -> String {
    if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return inner.replace("\\\"", "\"");
    }
    if let Some(inner) = value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')) {
        return inner.to_string();
    }
    value.to_string()
}

/// Reads `path`; a missing file yields an empty map.
pub(crate) fn read(path: &Path) -> Result<HashMap<String, String>, LoadError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(parse(&content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
        Err(source) => Err(LoadError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
