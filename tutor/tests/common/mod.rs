//! Shared fakes for tutor integration tests: scripted agents, search and quiz backends.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tutor::{
    build_agents, AgentId, AgentPrompts, LlmClient, LlmResponse, MockLlm, Question, Quiz,
    QuizError, QuizGenerator, QuizRequest, SearchClient, SearchError, SearchResult,
    TutorBackends, TutorSession,
};

/// Search backend returning fixed results, or failing when built with `failing()`.
pub struct FakeSearch {
    results: Option<Vec<SearchResult>>,
    queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            results: Some(results),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            results: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchClient for FakeSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.results
            .clone()
            .ok_or_else(|| SearchError::Transport("connection refused".into()))
    }
}

pub fn newton_results() -> Vec<SearchResult> {
    vec![SearchResult {
        title: "Newton's laws of motion".into(),
        url: "https://example.org/newton".into(),
        cleaned_text: "An object stays at rest unless acted on by a force. F = ma.".into(),
    }]
}

/// Quiz backend that builds `num_questions` valid questions and records each request.
#[derive(Default)]
pub struct FakeQuiz {
    requests: Mutex<Vec<QuizRequest>>,
}

impl FakeQuiz {
    pub fn requests(&self) -> Vec<QuizRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuizGenerator for FakeQuiz {
    async fn generate(&self, request: &QuizRequest) -> Result<Quiz, QuizError> {
        self.requests.lock().unwrap().push(request.clone());
        let questions = (1..=request.num_questions())
            .map(|i| {
                Question::new(
                    format!("Question {}?", i),
                    vec!["F = ma".into(), "F = mv".into(), "F = m/a".into(), "F = a/m".into()],
                    "F = ma",
                    "Newton's second law relates force, mass and acceleration.",
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Quiz::new(request.topic.clone(), questions))
    }
}

/// A session whose agents think with the given scripted mocks. Agents without a script
/// get a mock that fails on any call.
pub struct Harness {
    pub session: TutorSession,
    pub llms: HashMap<AgentId, Arc<MockLlm>>,
    pub search: Arc<FakeSearch>,
    pub quiz: Arc<FakeQuiz>,
}

impl Harness {
    pub async fn new(scripts: Vec<(AgentId, Vec<LlmResponse>)>, search: FakeSearch) -> Self {
        let mut llms: HashMap<AgentId, Arc<MockLlm>> = scripts
            .into_iter()
            .map(|(id, script)| (id, Arc::new(MockLlm::scripted(script))))
            .collect();
        for id in AgentId::ALL {
            llms.entry(id)
                .or_insert_with(|| Arc::new(MockLlm::failing("unexpected call")));
        }
        let search = Arc::new(search);
        let quiz = Arc::new(FakeQuiz::default());
        let backends = TutorBackends {
            search: search.clone(),
            quiz: quiz.clone(),
        };
        let prompts = AgentPrompts::embedded().unwrap();
        let agents = build_agents(&prompts, &backends, |id, _specs| {
            llms[&id].clone() as Arc<dyn LlmClient>
        })
        .await
        .unwrap();
        let session = TutorSession::new(&agents, 25).unwrap();
        Self {
            session,
            llms,
            search,
            quiz,
        }
    }

    pub fn calls(&self, id: AgentId) -> usize {
        self.llms[&id].call_count()
    }
}
