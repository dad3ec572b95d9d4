//! Builds the four tutor agents and the conversation graph that routes between them.

use std::sync::Arc;

use async_openai::config::OpenAIConfig;
use thiserror::Error;

use crate::config::{SettingsError, TutorSettings};
use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, END, START};
use crate::llm::{ChatOpenAI, LlmClient};
use crate::quiz::{LlmQuizGenerator, QuizGenerator};
use crate::router::route;
use crate::search::{FirecrawlSearch, SearchClient};
use crate::state::{AgentId, TutorState};
use crate::tool_source::{ToolSource, ToolSourceError, ToolSpec};
use crate::tools::{AggregateToolSource, GenerateQuizTool, Tool, TransferTool, WebSearchTool};
use crate::traits::{Agent, AgentNode};

use super::prompts::{AgentPrompts, PromptsError};
use super::react::ReactAgent;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Prompts(#[from] PromptsError),
    #[error("failed to list agent tools: {0}")]
    Tools(#[from] ToolSourceError),
    #[error("failed to compile graph: {0}")]
    Compilation(#[from] CompilationError),
}

/// External collaborators the agents' tools call into.
#[derive(Clone)]
pub struct TutorBackends {
    pub search: Arc<dyn SearchClient>,
    pub quiz: Arc<dyn QuizGenerator>,
}

/// Tools an agent may call, by agent.
///
/// classification only transfers; teacher and feynman can also search; quiz can also
/// generate quizzes.
pub fn agent_tools(id: AgentId, backends: &TutorBackends) -> AggregateToolSource {
    let search = || -> Box<dyn Tool> { Box::new(WebSearchTool::new(backends.search.clone())) };
    let tools: Vec<Box<dyn Tool>> = match id {
        AgentId::Classification => vec![Box::new(TransferTool::new())],
        AgentId::Teacher | AgentId::Feynman => vec![Box::new(TransferTool::new()), search()],
        AgentId::Quiz => vec![
            Box::new(GenerateQuizTool::new(backends.quiz.clone())),
            Box::new(TransferTool::new()),
            search(),
        ],
    };
    AggregateToolSource::from_tools(tools)
}

/// Builds all four agents. `llm_for` gets each agent's id and tool specs and returns the
/// chat model that agent thinks with.
pub async fn build_agents<F>(
    prompts: &AgentPrompts,
    backends: &TutorBackends,
    llm_for: F,
) -> Result<Vec<Arc<dyn Agent>>, BuildError>
where
    F: Fn(AgentId, Vec<ToolSpec>) -> Arc<dyn LlmClient>,
{
    let mut agents: Vec<Arc<dyn Agent>> = Vec::with_capacity(AgentId::ALL.len());
    for id in AgentId::ALL {
        let tools = Arc::new(agent_tools(id, backends));
        let specs = tools.list_tools().await?;
        tracing::debug!(agent = %id, tools = specs.len(), "building agent");
        let llm = llm_for(id, specs);
        let agent = ReactAgent::new(id, prompts.for_agent(id), llm, tools)?;
        agents.push(Arc::new(agent));
    }
    Ok(agents)
}

fn openai_config(settings: &TutorSettings) -> Result<OpenAIConfig, SettingsError> {
    let mut config = OpenAIConfig::new().with_api_key(settings.require_api_key()?);
    if let Some(base) = &settings.openai_base_url {
        config = config.with_api_base(base);
    }
    Ok(config)
}

/// Builds the agents against OpenAI and Firecrawl as configured by `settings`.
pub async fn build_openai_agents(
    settings: &TutorSettings,
    prompts: &AgentPrompts,
) -> Result<Vec<Arc<dyn Agent>>, BuildError> {
    let config = openai_config(settings)?;
    let quiz_llm: Arc<dyn LlmClient> =
        Arc::new(ChatOpenAI::with_config(config.clone(), settings.model.clone()));
    let backends = TutorBackends {
        search: Arc::new(FirecrawlSearch::new(
            settings.firecrawl_api_key.clone(),
            settings.firecrawl_api_url.clone(),
        )),
        quiz: Arc::new(LlmQuizGenerator::new(quiz_llm)),
    };
    if settings.firecrawl_api_key.is_none() {
        tracing::warn!("FIRECRAWL_API_KEY is not set; web search will report errors");
    }
    build_agents(prompts, &backends, |_, specs| {
        Arc::new(ChatOpenAI::with_config(config.clone(), settings.model.clone()).with_tools(specs))
    })
    .await
}

/// Wires agents into the conversation graph.
///
/// START routes by `current_agent`; classification has an edge to END; the other agents
/// have no outgoing edge, so their reply ends the turn. A transfer re-routes from START.
/// Routing to an agent that was not passed in fails the run with `AgentError::UnknownNode`.
pub fn build_tutor_graph(
    agents: &[Arc<dyn Agent>],
    recursion_limit: usize,
) -> Result<CompiledStateGraph<TutorState>, CompilationError> {
    let mut graph = StateGraph::<TutorState>::new().with_recursion_limit(recursion_limit);
    for agent in agents {
        graph.add_node(agent.id().as_str(), Arc::new(AgentNode::new(agent.clone())));
    }
    graph
        .add_conditional_edges(
            START,
            Arc::new(|state: &TutorState| route(state).as_str().to_string()),
            None,
        )
        .add_edge(AgentId::Classification.as_str(), END);
    graph.compile()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::error::AgentError;
    use crate::llm::MockLlm;
    use crate::message::Message;
    use crate::quiz::{Quiz, QuizError, QuizRequest};
    use crate::search::{SearchError, SearchResult};
    use crate::traits::AgentReply;

    struct NoSearch;

    #[async_trait]
    impl SearchClient for NoSearch {
        async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, SearchError> {
            Err(SearchError::NotConfigured("test".into()))
        }
    }

    struct NoQuiz;

    #[async_trait]
    impl QuizGenerator for NoQuiz {
        async fn generate(&self, _request: &QuizRequest) -> Result<Quiz, QuizError> {
            Err(QuizError::Backend("test".into()))
        }
    }

    fn backends() -> TutorBackends {
        TutorBackends {
            search: Arc::new(NoSearch),
            quiz: Arc::new(NoQuiz),
        }
    }

    async fn tool_names(id: AgentId) -> Vec<String> {
        let mut names: Vec<String> = agent_tools(id, &backends())
            .list_tools()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn tool_sets_per_agent() {
        assert_eq!(tool_names(AgentId::Classification).await, ["transfer_to_agent"]);
        assert_eq!(
            tool_names(AgentId::Teacher).await,
            ["transfer_to_agent", "web_search_tool"]
        );
        assert_eq!(
            tool_names(AgentId::Feynman).await,
            ["transfer_to_agent", "web_search_tool"]
        );
        assert_eq!(
            tool_names(AgentId::Quiz).await,
            ["generate_quiz", "transfer_to_agent", "web_search_tool"]
        );
    }

    #[tokio::test]
    async fn build_agents_hands_each_llm_its_tool_specs() {
        let prompts = AgentPrompts::embedded().unwrap();
        let seen = std::sync::Mutex::new(Vec::new());
        let agents = build_agents(&prompts, &backends(), |id, specs| {
            seen.lock().unwrap().push((id, specs.len()));
            Arc::new(MockLlm::with_no_tool_calls("ok")) as Arc<dyn LlmClient>
        })
        .await
        .unwrap();
        let ids: Vec<AgentId> = agents.iter().map(|a| a.id()).collect();
        assert_eq!(ids, AgentId::ALL);
        assert_eq!(
            seen.into_inner().unwrap(),
            vec![
                (AgentId::Classification, 1),
                (AgentId::Teacher, 2),
                (AgentId::Feynman, 2),
                (AgentId::Quiz, 3),
            ]
        );
    }

    struct Replier(AgentId);

    #[async_trait]
    impl Agent for Replier {
        fn id(&self) -> AgentId {
            self.0
        }
        async fn respond(&self, _history: &[Message]) -> Result<AgentReply, AgentError> {
            Ok(AgentReply::Reply(vec![Message::assistant(self.0.as_str())]))
        }
    }

    fn repliers() -> Vec<Arc<dyn Agent>> {
        AgentId::ALL
            .into_iter()
            .map(|id| Arc::new(Replier(id)) as Arc<dyn Agent>)
            .collect()
    }

    #[tokio::test]
    async fn graph_runs_the_routed_agent_once() {
        let graph = build_tutor_graph(&repliers(), 25).unwrap();
        for id in AgentId::ALL {
            let mut state = TutorState::new();
            state.current_agent = Some(id);
            state.push_user("hello");
            let out = graph.invoke(state).await.unwrap();
            assert_eq!(out.messages.len(), 2);
            assert_eq!(out.last_assistant_reply(), Some(id.as_str()));
            assert_eq!(out.current_agent, Some(id));
        }
    }

    #[tokio::test]
    async fn graph_without_the_routed_agent_fails_fast() {
        let agents: Vec<Arc<dyn Agent>> = vec![Arc::new(Replier(AgentId::Classification))];
        let graph = build_tutor_graph(&agents, 25).unwrap();
        let mut state = TutorState::new();
        state.current_agent = Some(AgentId::Quiz);
        assert!(matches!(
            graph.invoke(state).await,
            Err(AgentError::UnknownNode(id)) if id == "quiz_agent"
        ));
    }

    #[test]
    fn graph_requires_classification() {
        let agents: Vec<Arc<dyn Agent>> = vec![Arc::new(Replier(AgentId::Teacher))];
        assert!(matches!(
            build_tutor_graph(&agents, 25),
            Err(CompilationError::NodeNotFound(id)) if id == "classification_agent"
        ));
    }

    #[tokio::test]
    async fn openai_agents_need_an_api_key() {
        let prompts = AgentPrompts::embedded().unwrap();
        assert!(matches!(
            build_openai_agents(&TutorSettings::default(), &prompts).await,
            Err(BuildError::Settings(SettingsError::MissingApiKey))
        ));
    }
}
