//! Closed set of tutor agent identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of one of the four tutor agents.
///
/// Serialized with the wire names the prompts and the transfer tool use
/// (`"classification_agent"`, `"teacher_agent"`, ...). Deserializing any other name fails,
/// so a state loaded from JSON can never carry an unknown agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentId {
    /// Profiles the learner and routes to a specialist; the only agent wired to END.
    #[default]
    #[serde(rename = "classification_agent")]
    Classification,
    /// Explains concepts step by step.
    #[serde(rename = "teacher_agent")]
    Teacher,
    /// Has the learner explain a concept back and probes the gaps.
    #[serde(rename = "feynman_agent")]
    Feynman,
    /// Researches a topic, generates a quiz and runs it question by question.
    #[serde(rename = "quiz_agent")]
    Quiz,
}

/// Error for a string that is not a known agent identifier, or not a valid transfer target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentIdError {
    #[error("unknown agent: {0} (expected one of classification_agent, teacher_agent, feynman_agent, quiz_agent)")]
    Unknown(String),
    #[error("cannot transfer to {0}; valid targets are teacher_agent, feynman_agent, quiz_agent")]
    NotTransferTarget(AgentId),
}

impl AgentId {
    /// All agents, classification first.
    pub const ALL: [AgentId; 4] = [
        AgentId::Classification,
        AgentId::Teacher,
        AgentId::Feynman,
        AgentId::Quiz,
    ];

    /// Agents the transfer tool may hand control to.
    pub const TRANSFER_TARGETS: [AgentId; 3] = [AgentId::Teacher, AgentId::Feynman, AgentId::Quiz];

    /// Wire name, also used as the graph node id.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentId::Classification => "classification_agent",
            AgentId::Teacher => "teacher_agent",
            AgentId::Feynman => "feynman_agent",
            AgentId::Quiz => "quiz_agent",
        }
    }

    pub fn is_transfer_target(&self) -> bool {
        Self::TRANSFER_TARGETS.contains(self)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentId {
    type Err = AgentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == name)
            .ok_or_else(|| AgentIdError::Unknown(name.to_string()))
    }
}
