//! Session entry point: one learner message in, updated state out.

use std::sync::Arc;

use crate::agent::{build_openai_agents, build_tutor_graph, AgentPrompts, BuildError};
use crate::config::TutorSettings;
use crate::error::AgentError;
use crate::graph::{CompilationError, CompiledStateGraph};
use crate::message::Message;
use crate::state::TutorState;
use crate::traits::Agent;

/// Assistant message appended when a turn fails at run time.
pub const APOLOGY_MESSAGE: &str =
    "Sorry, something went wrong while preparing my answer. Please try again.";

/// A tutoring session: the compiled tutor graph plus the turn entry point.
///
/// The session holds no conversation state itself; callers pass the [`TutorState`] from
/// the previous turn back in. One turn runs at a time per state value.
pub struct TutorSession {
    graph: CompiledStateGraph<TutorState>,
}

impl TutorSession {
    /// Session over the given agents (at least classification must be present).
    pub fn new(agents: &[Arc<dyn Agent>], recursion_limit: usize) -> Result<Self, CompilationError> {
        Ok(Self {
            graph: build_tutor_graph(agents, recursion_limit)?,
        })
    }

    /// Session backed by OpenAI and Firecrawl, with prompts from the embedded defaults
    /// overridden by `settings.prompts_dir` (or `PROMPTS_DIR`).
    pub async fn from_settings(settings: &TutorSettings) -> Result<Self, BuildError> {
        let prompts = AgentPrompts::load(settings.prompts_dir.as_deref())?;
        let agents = build_openai_agents(settings, &prompts).await?;
        Ok(Self::new(&agents, settings.recursion_limit)?)
    }

    pub fn recursion_limit(&self) -> usize {
        self.graph.recursion_limit()
    }

    /// Runs one turn: appends `input` as a User message and invokes the graph until the
    /// active agent replies (following any transfers in between).
    ///
    /// `state == None` starts a new session. A run-time failure (model, tool or step
    /// limit) does not fail the turn: the state from before the graph ran gets the user
    /// message plus [`APOLOGY_MESSAGE`]. Wiring errors such as a route to an unregistered
    /// agent are returned as `Err`.
    pub async fn run_turn(
        &self,
        state: Option<TutorState>,
        input: &str,
    ) -> Result<TutorState, AgentError> {
        let mut state = state.unwrap_or_default();
        state.push_user(input);
        tracing::info!(
            agent = %crate::router::route(&state),
            messages = state.messages.len(),
            "turn start"
        );
        match self.graph.invoke(state.clone()).await {
            Ok(next) => {
                tracing::info!(agent = %crate::router::route(&next), "turn complete");
                Ok(next)
            }
            Err(e) if e.is_configuration() => {
                tracing::error!(error = %e, "tutor graph misconfigured");
                Err(e)
            }
            Err(e) => {
                tracing::warn!(error = %e, "turn failed; replying with an apology");
                state.messages.push(Message::assistant(APOLOGY_MESSAGE));
                Ok(state)
            }
        }
    }
}
