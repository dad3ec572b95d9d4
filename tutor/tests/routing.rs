//! Routing and transfer: who handles the next step, and how a transfer changes it.

mod common;

use serde_json::json;
use tutor::tools::{Tool, TransferTool};
use tutor::{route, AgentId, LlmResponse, Message, ToolSourceError, TransferRequest, TutorState};

use common::{FakeSearch, Harness};

#[test]
fn unset_current_agent_routes_to_classification() {
    assert_eq!(route(&TutorState::new()), AgentId::Classification);
}

#[test]
fn set_current_agent_routes_to_exactly_that_agent() {
    for id in [AgentId::Teacher, AgentId::Feynman, AgentId::Quiz] {
        let state = TutorState {
            messages: vec![Message::user("hi")],
            current_agent: Some(id),
        };
        assert_eq!(route(&state), id);
    }
}

#[tokio::test]
async fn transfer_then_route_yields_the_target() {
    for target in AgentId::TRANSFER_TARGETS {
        let content = TransferTool::new()
            .call(json!({"agent_name": target.as_str()}))
            .await
            .unwrap();
        let mut state = TutorState::new();
        content.transfer.unwrap().apply(&mut state);
        assert_eq!(route(&state), target);
    }
}

#[tokio::test]
async fn transfer_to_unknown_target_is_a_tool_error() {
    let err = TransferTool::new()
        .call(json!({"agent_name": "history_agent"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolSourceError::InvalidInput(ref m) if m.contains("history_agent")));
    assert!(TransferRequest::parse("history_agent").is_err());
}

/// **Scenario**: an invalid transfer reaches the agent as a failed tool result; the agent
/// recovers, replies, and `current_agent` is unchanged.
#[tokio::test]
async fn invalid_transfer_is_recovered_inside_the_agent() {
    let h = Harness::new(
        vec![(
            AgentId::Classification,
            vec![
                LlmResponse::tool_call("transfer_to_agent", json!({"agent_name": "history_agent"})),
                LlmResponse::text("Would you like explanations, to explain it yourself, or a quiz?"),
            ],
        )],
        FakeSearch::with_results(vec![]),
    )
    .await;

    let state = h.session.run_turn(None, "I want to learn history").await.unwrap();

    assert_eq!(state.current_agent, None);
    assert_eq!(route(&state), AgentId::Classification);
    assert!(state.messages.iter().any(|m| matches!(
        m,
        Message::User(s) if s.starts_with("Tool transfer_to_agent failed:") && s.contains("history_agent")
    )));
    assert!(state
        .last_assistant_reply()
        .unwrap()
        .starts_with("Would you like"));
    assert_eq!(h.calls(AgentId::Classification), 2);
}

#[test]
fn unknown_agent_in_saved_state_is_rejected() {
    let saved = r#"{"messages": [{"role": "user", "content": "hi"}], "current_agent": "history_agent"}"#;
    assert!(serde_json::from_str::<TutorState>(saved).is_err());

    let saved = r#"{"messages": [{"role": "user", "content": "hi"}], "current_agent": "quiz_agent"}"#;
    let state: TutorState = serde_json::from_str(saved).unwrap();
    assert_eq!(route(&state), AgentId::Quiz);
}
