//! End-to-end turns through `TutorSession` with scripted models and fake collaborators.

mod common;

use serde_json::json;
use tutor::{AgentId, LlmResponse, Message, Quiz, TutorState, APOLOGY_MESSAGE, SEARCH_ERROR_SENTINEL};

use common::{newton_results, FakeSearch, Harness};

fn at(agent: AgentId, messages: Vec<Message>) -> TutorState {
    TutorState {
        messages,
        current_agent: Some(agent),
    }
}

/// **Scenario**: a fresh session is classified, transferred to the teacher and answered by
/// the teacher in the same turn.
#[tokio::test]
async fn fresh_session_is_classified_and_transferred_to_teacher() {
    let h = Harness::new(
        vec![
            (
                AgentId::Classification,
                vec![LlmResponse::tool_call(
                    "transfer_to_agent",
                    json!({"agent_name": "teacher_agent"}),
                )],
            ),
            (
                AgentId::Teacher,
                vec![LlmResponse::text(
                    "Let's start with the first law: an object keeps its motion unless a force acts on it.",
                )],
            ),
        ],
        FakeSearch::with_results(newton_results()),
    )
    .await;

    let state = h
        .session
        .run_turn(None, "teach me Newton's laws")
        .await
        .unwrap();

    assert_eq!(state.current_agent, Some(AgentId::Teacher));
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0], Message::user("teach me Newton's laws"));
    assert!(state
        .last_assistant_reply()
        .unwrap()
        .starts_with("Let's start with the first law"));
    assert_eq!(h.calls(AgentId::Classification), 1);
    assert_eq!(h.calls(AgentId::Teacher), 1);

    let teacher_saw = &h.llms[&AgentId::Teacher].recorded_calls()[0];
    assert!(matches!(&teacher_saw[0], Message::System(p) if p.contains("teacher")));
    assert_eq!(teacher_saw[1..], [Message::user("teach me Newton's laws")]);
}

/// **Scenario**: the next turn goes straight to the agent in charge with the full history.
#[tokio::test]
async fn follow_up_turn_skips_classification() {
    let h = Harness::new(
        vec![(
            AgentId::Teacher,
            vec![LlmResponse::text("The third law: every action has an equal and opposite reaction.")],
        )],
        FakeSearch::with_results(newton_results()),
    )
    .await;
    let previous = at(
        AgentId::Teacher,
        vec![
            Message::user("teach me Newton's laws"),
            Message::assistant("First law: inertia."),
        ],
    );

    let state = h
        .session
        .run_turn(Some(previous), "what about the third law?")
        .await
        .unwrap();

    assert_eq!(h.calls(AgentId::Classification), 0);
    assert_eq!(state.messages.len(), 4);
    assert_eq!(state.current_agent, Some(AgentId::Teacher));
    let teacher_saw = &h.llms[&AgentId::Teacher].recorded_calls()[0];
    assert_eq!(teacher_saw.len(), 4);
    assert_eq!(teacher_saw[3], Message::user("what about the third law?"));
}

/// **Scenario**: the quiz agent researches, generates a five-question medium quiz and asks
/// the first question; the quiz stays in the history for later turns.
#[tokio::test]
async fn quiz_agent_researches_and_generates_requested_quiz() {
    let h = Harness::new(
        vec![(
            AgentId::Quiz,
            vec![
                LlmResponse::tool_call("web_search_tool", json!({"query": "Newton's laws of motion"})),
                LlmResponse::tool_call(
                    "generate_quiz",
                    json!({
                        "research_text": "An object stays at rest unless acted on by a force. F = ma.",
                        "topic": "Newton's laws",
                        "difficulty": "medium",
                        "num_questions": 5
                    }),
                ),
                LlmResponse::text("Question 1 of 5: What is Newton's second law?\nA) F = ma\nB) F = mv\nC) F = m/a\nD) F = a/m"),
                LlmResponse::text("Correct! Question 2 of 5 (score so far: 1/1) ..."),
            ],
        )],
        FakeSearch::with_results(newton_results()),
    )
    .await;
    let previous = at(
        AgentId::Quiz,
        vec![
            Message::user("quiz me on Newton's laws"),
            Message::assistant("How many questions would you like?"),
        ],
    );

    let state = h
        .session
        .run_turn(Some(previous), "make it 5 questions, medium difficulty")
        .await
        .unwrap();

    assert_eq!(h.calls(AgentId::Classification), 0);
    assert_eq!(h.search.queries(), ["Newton's laws of motion"]);
    let requests = h.quiz.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].num_questions(), 5);
    assert_eq!(requests[0].difficulty, tutor::Difficulty::Medium);

    let quiz_json = state
        .messages
        .iter()
        .find_map(|m| match m {
            Message::User(s) => s.strip_prefix("Tool generate_quiz returned: "),
            _ => None,
        })
        .expect("quiz observation in history");
    let quiz: Quiz = serde_json::from_str(quiz_json).unwrap();
    assert_eq!(quiz.len(), 5);
    for q in quiz.questions() {
        assert_eq!(q.options().len(), 4);
        assert!(q.options().iter().any(|o| o == q.correct_answer()));
    }
    assert!(state
        .last_assistant_reply()
        .unwrap()
        .starts_with("Question 1 of 5"));
    assert_eq!(state.current_agent, Some(AgentId::Quiz));

    let state = h.session.run_turn(Some(state), "A").await.unwrap();
    let second_call = h.llms[&AgentId::Quiz].recorded_calls().pop().unwrap();
    assert!(second_call
        .iter()
        .any(|m| m.content().starts_with("Tool generate_quiz returned: ")));
    assert!(state.last_assistant_reply().unwrap().starts_with("Correct!"));
}

/// **Scenario**: a failed search reaches the model as the sentinel and the turn still ends
/// with a visible reply.
#[tokio::test]
async fn search_failure_does_not_break_the_turn() {
    let h = Harness::new(
        vec![(
            AgentId::Teacher,
            vec![
                LlmResponse::tool_call("web_search_tool", json!({"query": "photosynthesis"})),
                LlmResponse::text("I couldn't look that up right now, but here is the basic idea."),
            ],
        )],
        FakeSearch::failing(),
    )
    .await;

    let state = h
        .session
        .run_turn(Some(at(AgentId::Teacher, vec![])), "explain photosynthesis")
        .await
        .unwrap();

    let observation = format!("Tool web_search_tool returned: {}", SEARCH_ERROR_SENTINEL);
    assert!(state.messages.contains(&Message::user(observation.clone())));
    let second_call = &h.llms[&AgentId::Teacher].recorded_calls()[1];
    assert_eq!(second_call.last(), Some(&Message::user(observation)));
    assert!(state
        .last_assistant_reply()
        .unwrap()
        .starts_with("I couldn't look that up"));
}

/// **Scenario**: agents handing the conversation back and forth hit the step limit; the
/// learner gets an apology and the state keeps its previous agent.
#[tokio::test]
async fn transfer_ping_pong_ends_with_apology() {
    let to = |name: &str| LlmResponse::tool_call("transfer_to_agent", json!({"agent_name": name}));
    let h = Harness::new(
        vec![
            (AgentId::Teacher, vec![to("quiz_agent"); 20]),
            (AgentId::Quiz, vec![to("teacher_agent"); 20]),
        ],
        FakeSearch::with_results(vec![]),
    )
    .await;

    let state = h
        .session
        .run_turn(Some(at(AgentId::Teacher, vec![])), "hello")
        .await
        .unwrap();

    assert_eq!(state.current_agent, Some(AgentId::Teacher));
    assert_eq!(
        state.messages,
        vec![Message::user("hello"), Message::assistant(APOLOGY_MESSAGE)]
    );
    assert_eq!(h.calls(AgentId::Teacher) + h.calls(AgentId::Quiz), 25);
}

/// **Scenario**: a model failure degrades to an apology instead of an error.
#[tokio::test]
async fn model_failure_ends_with_apology() {
    let h = Harness::new(vec![], FakeSearch::with_results(vec![])).await;
    let state = h.session.run_turn(None, "hi").await.unwrap();
    assert_eq!(state.last_assistant_reply(), Some(APOLOGY_MESSAGE));
    assert_eq!(state.current_agent, None);
}
