//! # Tutor
//!
//! A multi-agent tutoring service built on a small state graph. Four agents share one
//! conversation and hand it to each other:
//!
//! - **classification_agent**: profiles the learner and transfers to a specialist.
//! - **teacher_agent**: explains concepts step by step, with web search.
//! - **feynman_agent**: has the learner explain a concept back and probes the gaps.
//! - **quiz_agent**: researches a topic, generates a multiple-choice quiz and runs it.
//!
//! ## How a turn runs
//!
//! [`TutorSession::run_turn`] appends the learner's message to [`TutorState`] and invokes
//! the tutor graph. The graph's entry router ([`route`]) picks `current_agent`
//! (classification when unset). The agent runs its own think → act → observe loop over
//! the full history and either replies or calls `transfer_to_agent`. A transfer sets
//! `current_agent` and re-routes within the same turn, so the learner always gets a reply
//! from the agent now in charge.
//!
//! ```rust,ignore
//! use tutor::{TutorSession, TutorSettings};
//!
//! let settings = TutorSettings::from_env()?;
//! let session = TutorSession::from_settings(&settings).await?;
//! let state = session.run_turn(None, "teach me Newton's laws").await?;
//! println!("{}", state.last_assistant_reply().unwrap_or_default());
//! ```
//!
//! ## Main modules
//!
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`Next`].
//! - [`agent`]: [`ReactAgent`], prompts, and [`build_tutor_graph`].
//! - [`tools`]: `transfer_to_agent`, `web_search_tool`, `generate_quiz`.
//! - [`search`]: Firecrawl search collaborator. [`quiz`]: quiz model and generator.
//! - [`llm`]: [`LlmClient`], [`MockLlm`], [`ChatOpenAI`].

pub mod agent;
pub mod config;
pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod quiz;
pub mod router;
pub mod search;
pub mod session;
pub mod state;
pub mod tool_source;
pub mod tools;
pub mod traits;

pub use agent::{
    build_agents, build_openai_agents, build_tutor_graph, AgentPrompts, BuildError,
    PromptsError, ReactAgent, TutorBackends,
};
pub use config::{SettingsError, TutorSettings};
pub use error::AgentError;
pub use graph::{CompilationError, CompiledStateGraph, Next, Node, StateGraph, END, START};
pub use llm::{ChatOpenAI, LlmClient, LlmResponse, MockLlm};
pub use message::Message;
pub use quiz::{Difficulty, LlmQuizGenerator, Question, Quiz, QuizError, QuizGenerator, QuizRequest};
pub use router::route;
pub use search::{FirecrawlSearch, SearchClient, SearchError, SearchResult, SEARCH_ERROR_SENTINEL};
pub use session::{TutorSession, APOLOGY_MESSAGE};
pub use state::{AgentId, AgentIdError, ReActState, TransferRequest, TutorState};
pub use tool_source::{ToolSource, ToolSourceError, ToolSpec};
pub use traits::{Agent, AgentNode, AgentReply};

