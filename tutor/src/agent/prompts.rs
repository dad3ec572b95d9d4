//! Agent system prompts: embedded YAML defaults with an optional directory override.
//!
//! Default text lives in `tutor/prompts/agents.yaml` and is embedded at compile time.
//! When `PROMPTS_DIR/agents.yaml` (or an explicit directory) exists, each entry it sets
//! replaces the embedded one.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::state::AgentId;

const EMBED_AGENTS: &str = include_str!("../../prompts/agents.yaml");
const AGENTS_FILE: &str = "agents.yaml";

#[derive(Debug, thiserror::Error)]
pub enum PromptsError {
    #[error("failed to read prompts file {path}: {message}")]
    ReadFile { path: String, message: String },
    #[error("failed to parse YAML in {path}: {message}")]
    ParseYaml { path: String, message: String },
    #[error("no prompt configured for {0}")]
    Missing(AgentId),
}

#[derive(Debug, Default, Deserialize)]
struct AgentPromptsFile {
    classification_agent: Option<String>,
    teacher_agent: Option<String>,
    feynman_agent: Option<String>,
    quiz_agent: Option<String>,
}

impl AgentPromptsFile {
    fn get(&self, id: AgentId) -> Option<&String> {
        match id {
            AgentId::Classification => self.classification_agent.as_ref(),
            AgentId::Teacher => self.teacher_agent.as_ref(),
            AgentId::Feynman => self.feynman_agent.as_ref(),
            AgentId::Quiz => self.quiz_agent.as_ref(),
        }
    }

    fn parse(content: &str, path: &str) -> Result<Self, PromptsError> {
        serde_yaml::from_str(content).map_err(|e| PromptsError::ParseYaml {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

/// Resolved system prompt for every agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentPrompts {
    prompts: [String; 4],
}

impl AgentPrompts {
    /// Prompts embedded in the binary.
    pub fn embedded() -> Result<Self, PromptsError> {
        let file = AgentPromptsFile::parse(EMBED_AGENTS, "<embedded agents.yaml>")?;
        Self::merge(&file, &AgentPromptsFile::default())
    }

    /// Embedded prompts overridden by `dir/agents.yaml`, where `dir` defaults to the
    /// `PROMPTS_DIR` environment variable. A missing directory or file means no override.
    pub fn load(dir: Option<&Path>) -> Result<Self, PromptsError> {
        let base = dir
            .map(PathBuf::from)
            .or_else(|| std::env::var("PROMPTS_DIR").ok().map(PathBuf::from));
        let overrides = match base {
            Some(base) => read_override(&base.join(AGENTS_FILE))?,
            None => AgentPromptsFile::default(),
        };
        let embedded = AgentPromptsFile::parse(EMBED_AGENTS, "<embedded agents.yaml>")?;
        Self::merge(&embedded, &overrides)
    }

    fn merge(base: &AgentPromptsFile, overrides: &AgentPromptsFile) -> Result<Self, PromptsError> {
        let pick = |id: AgentId| -> Result<String, PromptsError> {
            overrides
                .get(id)
                .or_else(|| base.get(id))
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .ok_or(PromptsError::Missing(id))
        };
        Ok(Self {
            prompts: [
                pick(AgentId::Classification)?,
                pick(AgentId::Teacher)?,
                pick(AgentId::Feynman)?,
                pick(AgentId::Quiz)?,
            ],
        })
    }

    pub fn for_agent(&self, id: AgentId) -> &str {
        let index = match id {
            AgentId::Classification => 0,
            AgentId::Teacher => 1,
            AgentId::Feynman => 2,
            AgentId::Quiz => 3,
        };
        &self.prompts[index]
    }
}

fn read_override(path: &Path) -> Result<AgentPromptsFile, PromptsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loading prompt overrides");
            AgentPromptsFile::parse(&content, &path.display().to_string())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AgentPromptsFile::default()),
        Err(e) => Err(PromptsError::ReadFile {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_prompts_cover_every_agent() {
        let prompts = AgentPrompts::embedded().unwrap();
        for id in AgentId::ALL {
            assert!(!prompts.for_agent(id).is_empty(), "{}", id);
        }
        assert!(prompts
            .for_agent(AgentId::Quiz)
            .contains("generate_quiz"));
        assert!(prompts
            .for_agent(AgentId::Classification)
            .contains("transfer_to_agent"));
    }

    #[test]
    fn load_from_missing_dir_uses_embedded() {
        let prompts = AgentPrompts::load(Some(Path::new("/nonexistent_prompts_dir_12345"))).unwrap();
        assert_eq!(prompts, AgentPrompts::embedded().unwrap());
    }

    #[test]
    fn override_file_replaces_only_its_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("agents.yaml"),
            "teacher_agent: |\n  Explain like a pirate.\n",
        )
        .unwrap();
        let prompts = AgentPrompts::load(Some(dir.path())).unwrap();
        let embedded = AgentPrompts::embedded().unwrap();
        assert_eq!(prompts.for_agent(AgentId::Teacher), "Explain like a pirate.");
        assert_eq!(
            prompts.for_agent(AgentId::Quiz),
            embedded.for_agent(AgentId::Quiz)
        );
    }

    #[test]
    fn invalid_override_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("agents.yaml"), "teacher_agent: [unclosed").unwrap();
        assert!(matches!(
            AgentPrompts::load(Some(dir.path())),
            Err(PromptsError::ParseYaml { .. })
        ));
    }
}
