//! Terminal front end for the tutor: one in-memory conversation and how turns are printed.

use serde::Serialize;
use tutor::{AgentError, AgentId, TutorSession, TutorState};

/// What one turn produced, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOutput {
    pub reply: String,
    /// Agent that will handle the next message.
    pub current_agent: AgentId,
}

impl TurnOutput {
    /// Plain reply text, or a single-line JSON object with `--json`.
    pub fn render(&self, json: bool) -> String {
        if json {
            serde_json::to_string(self).unwrap_or_else(|_| self.reply.clone())
        } else {
            self.reply.clone()
        }
    }
}

/// A conversation kept in memory across turns.
pub struct Chat {
    session: TutorSession,
    state: Option<TutorState>,
}

impl Chat {
    pub fn new(session: TutorSession) -> Self {
        Self {
            session,
            state: None,
        }
    }

    /// Sends one learner message. On error the conversation is left as it was.
    pub async fn send(&mut self, input: &str) -> Result<TurnOutput, AgentError> {
        let state = self.session.run_turn(self.state.clone(), input).await?;
        let output = TurnOutput {
            reply: state.last_assistant_reply().unwrap_or_default().to_string(),
            current_agent: tutor::route(&state),
        };
        self.state = Some(state);
        Ok(output)
    }

    pub fn state(&self) -> Option<&TutorState> {
        self.state.as_ref()
    }
}
