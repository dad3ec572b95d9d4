//! Tutor agents: the shared ReAct loop, their prompts, and how they are assembled.
//!
//! - [`react`]: think → act → observe loop and [`ReactAgent`].
//! - [`prompts`]: per-agent system prompts (embedded YAML, optional override directory).
//! - [`build`]: tool sets per agent, agent construction and the tutor graph.

pub mod build;
pub mod prompts;
pub mod react;

pub use build::{
    agent_tools, build_agents, build_openai_agents, build_tutor_graph, BuildError, TutorBackends,
};
pub use prompts::{AgentPrompts, PromptsError};
pub use react::ReactAgent;
