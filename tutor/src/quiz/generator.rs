//! Quiz generation backed by a chat model.

use std::sync::Arc;

use async_trait::async_trait;

use crate::llm::LlmClient;
use crate::message::Message;

use super::{Quiz, QuizError, QuizRequest, RawQuiz};

/// Quiz-generation collaborator: validated request in, validated quiz out.
///
/// Implementations must return exactly `request.num_questions()` questions; a quiz that
/// fails validation is an error, never a partial result.
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, request: &QuizRequest) -> Result<Quiz, QuizError>;
}

const SYSTEM_PROMPT: &str = "You write multiple-choice quizzes. Reply with a single JSON object \
and nothing else, shaped as {\"topic\": string, \"questions\": [{\"question\": string, \
\"options\": [string, string, string, string], \"correct_answer\": string, \
\"explanation\": string}]}. Every question has exactly four options (A, B, C, D) and \
correct_answer repeats one option verbatim. The explanation says why the answer is right \
and why the other options are wrong.";

/// [`QuizGenerator`] that prompts an [`LlmClient`] for JSON and validates the result.
pub struct LlmQuizGenerator {
    llm: Arc<dyn LlmClient>,
}

impl LlmQuizGenerator {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    fn prompt(request: &QuizRequest) -> String {
        format!(
            "Using the research below, create a multiple-choice quiz.\n\
             Topic: \"{}\"\n\
             Difficulty: \"{}\"\n\
             Number of questions: {}\n\n\
             <research>\n{}\n</research>\n\n\
             Build the most accurate and reliable questions you can from the research. \
             Every question must have exactly four options (A, B, C, D).",
            request.topic,
            request.difficulty,
            request.num_questions(),
            request.research_text
        )
    }
}

/// Extracts the JSON object from a model reply that may wrap it in a code fence or prose.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

#[async_trait]
impl QuizGenerator for LlmQuizGenerator {
    async fn generate(&self, request: &QuizRequest) -> Result<Quiz, QuizError> {
        let messages = [
            Message::system(SYSTEM_PROMPT),
            Message::user(Self::prompt(request)),
        ];
        tracing::debug!(
            topic = %request.topic,
            difficulty = %request.difficulty,
            num_questions = request.num_questions(),
            "generating quiz"
        );
        let response = self
            .llm
            .invoke(&messages)
            .await
            .map_err(|e| QuizError::Backend(e.to_string()))?;
        let json = extract_json_object(&response.content)
            .ok_or_else(|| QuizError::Parse("no JSON object in model reply".to_string()))?;
        let raw: RawQuiz =
            serde_json::from_str(json).map_err(|e| QuizError::Parse(e.to_string()))?;
        let quiz = Quiz::try_from(raw)?;
        request.check(&quiz)?;
        Ok(quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlm;
    use crate::quiz::Difficulty;

    fn quiz_json(n: usize) -> String {
        let questions: Vec<_> = (0..n)
            .map(|i| {
                serde_json::json!({
                    "question": format!("Q{}", i),
                    "options": ["a", "b", "c", "d"],
                    "correct_answer": "b",
                    "explanation": "because"
                })
            })
            .collect();
        serde_json::json!({"topic": "Physics", "questions": questions}).to_string()
    }

    #[test]
    fn extract_json_object_handles_fences() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_object(text), Some("{\"a\": 1}"));
        assert_eq!(extract_json_object("no json"), None);
    }

    #[tokio::test]
    async fn generate_parses_and_validates() {
        let llm = Arc::new(MockLlm::with_no_tool_calls(format!(
            "Here you go:\n```json\n{}\n```",
            quiz_json(3)
        )));
        let generator = LlmQuizGenerator::new(llm.clone());
        let request = QuizRequest::new("research", "Physics", Difficulty::Hard, 3).unwrap();
        let quiz = generator.generate(&request).await.unwrap();
        assert_eq!(quiz.len(), 3);
        assert_eq!(quiz.topic(), "Physics");

        let prompt = llm.recorded_calls()[0][1].content().to_string();
        assert!(prompt.contains("Difficulty: \"hard\""), "{}", prompt);
        assert!(prompt.contains("Number of questions: 3"), "{}", prompt);
        assert!(prompt.contains("research"), "{}", prompt);
    }

    #[tokio::test]
    async fn generate_rejects_wrong_count_and_bad_shape() {
        let request = QuizRequest::new("", "Physics", Difficulty::Easy, 5).unwrap();
        let generator =
            LlmQuizGenerator::new(Arc::new(MockLlm::with_no_tool_calls(quiz_json(4))));
        assert!(matches!(
            generator.generate(&request).await,
            Err(QuizError::QuestionCountMismatch {
                requested: 5,
                returned: 4
            })
        ));

        let bad = r#"{"topic":"x","questions":[{"question":"q","options":["a","b"],"correct_answer":"a","explanation":""}]}"#;
        let generator = LlmQuizGenerator::new(Arc::new(MockLlm::with_no_tool_calls(bad)));
        let request = QuizRequest::new("", "x", Difficulty::Easy, 1).unwrap();
        assert_eq!(
            generator.generate(&request).await.unwrap_err(),
            QuizError::OptionCount {
                index: Some(0),
                count: 2
            }
        );

        let missing_fields = r#"{"topic":"x","questions":[{"question":"q"}]}"#;
        let generator =
            LlmQuizGenerator::new(Arc::new(MockLlm::with_no_tool_calls(missing_fields)));
        assert!(matches!(
            generator.generate(&request).await,
            Err(QuizError::Parse(m)) if m.starts_with("question 0")
        ));
    }

    #[tokio::test]
    async fn generate_maps_llm_failure_to_backend_error() {
        let generator = LlmQuizGenerator::new(Arc::new(MockLlm::failing("down")));
        let request = QuizRequest::new("", "x", Difficulty::Easy, 1).unwrap();
        assert!(matches!(
            generator.generate(&request).await,
            Err(QuizError::Backend(m)) if m.contains("down")
        ));
    }
}
