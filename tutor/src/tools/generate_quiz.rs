//! `generate_quiz`: structured multiple-choice quiz from research text.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::quiz::{Difficulty, QuizError, QuizGenerator, QuizRequest, MAX_QUESTIONS, MIN_QUESTIONS};
use crate::search::SEARCH_ERROR_SENTINEL;
use crate::tool_source::{ToolCallContent, ToolSourceError, ToolSpec};
use crate::tools::Tool;

/// Tool name for quiz generation.
pub const TOOL_GENERATE_QUIZ: &str = "generate_quiz";

/// Validates arguments into a [`QuizRequest`], calls the [`QuizGenerator`] and returns
/// the quiz as JSON.
///
/// Argument problems are `InvalidInput`; a generator failure or an invalid quiz is
/// `Failed`. Either way the model sees the message as an error observation. The search
/// error sentinel is not research, so passing it as `research_text` is `InvalidInput`.
pub struct GenerateQuizTool {
    generator: Arc<dyn QuizGenerator>,
}

impl GenerateQuizTool {
    pub fn new(generator: Arc<dyn QuizGenerator>) -> Self {
        Self { generator }
    }

    fn parse_request(args: &serde_json::Value) -> Result<QuizRequest, ToolSourceError> {
        let str_arg = |key: &str| -> Result<String, ToolSourceError> {
            args.get(key)
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or_else(|| ToolSourceError::InvalidInput(format!("missing {}", key)))
        };
        let research_text = str_arg("research_text")?;
        if research_text.trim() == SEARCH_ERROR_SENTINEL {
            return Err(ToolSourceError::InvalidInput(
                "research_text is a failed search result; search again or continue without a quiz"
                    .to_string(),
            ));
        }
        let topic = str_arg("topic")?;
        let difficulty: Difficulty = str_arg("difficulty")?
            .parse()
            .map_err(|e: QuizError| ToolSourceError::InvalidInput(e.to_string()))?;
        let num_questions = args
            .get("num_questions")
            .and_then(|v| v.as_i64())
            .ok_or_else(|| {
                ToolSourceError::InvalidInput("num_questions must be an integer".to_string())
            })?;
        QuizRequest::new(research_text, topic, difficulty, num_questions)
            .map_err(|e| ToolSourceError::InvalidInput(e.to_string()))
    }
}

#[async_trait]
impl Tool for GenerateQuizTool {
    fn name(&self) -> &str {
        TOOL_GENERATE_QUIZ
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: TOOL_GENERATE_QUIZ.to_string(),
            description: Some(
                "Generate a structured multiple-choice quiz from research text. Each question \
                 has four options, the correct answer and an explanation. Typical lengths: \
                 short 3-5, medium 6-10, long 11-15 questions."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "research_text": {
                        "type": "string",
                        "description": "Research or reference text about the topic (e.g. web search results)."
                    },
                    "topic": { "type": "string", "description": "Quiz topic." },
                    "difficulty": {
                        "type": "string",
                        "enum": ["easy", "medium", "hard"],
                        "description": "easy: definitions and facts; medium: relationships and application; hard: analysis and synthesis."
                    },
                    "num_questions": {
                        "type": "integer",
                        "minimum": MIN_QUESTIONS,
                        "maximum": MAX_QUESTIONS,
                        "description": "Number of questions to generate."
                    }
                },
                "required": ["research_text", "topic", "difficulty", "num_questions"]
            }),
        }
    }

    async fn call(&self, args: serde_json::Value) -> Result<ToolCallContent, ToolSourceError> {
        let request = Self::parse_request(&args)?;
        let quiz = self.generator.generate(&request).await.map_err(|e| {
            tracing::warn!(error = %e, topic = %request.topic, "quiz generation failed");
            ToolSourceError::Failed(e.to_string())
        })?;
        tracing::info!(topic = %quiz.topic(), questions = quiz.len(), "quiz generated");
        let text = serde_json::to_string_pretty(&quiz)
            .map_err(|e| ToolSourceError::Failed(e.to_string()))?;
        Ok(ToolCallContent::new(text))
    }
}
