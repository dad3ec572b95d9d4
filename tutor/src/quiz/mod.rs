//! Quiz data model and the quiz-generation collaborator.
//!
//! [`Question`] and [`Quiz`] validate on construction and on deserialization, so a value
//! of either type always satisfies: four options per question and a correct answer that
//! is one of them. [`QuizRequest`] bounds the question count to 1..=30.

mod generator;

pub use generator::{LlmQuizGenerator, QuizGenerator};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options every question must have.
pub const OPTIONS_PER_QUESTION: usize = 4;
/// Smallest question count a quiz may be generated with.
pub const MIN_QUESTIONS: u32 = 1;
/// Largest question count a quiz may be generated with.
pub const MAX_QUESTIONS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// `index` is the question's position when it was validated as part of a quiz.
    #[error("{}expected 4 options, got {count}", position(.index))]
    OptionCount { index: Option<usize>, count: usize },
    #[error("{}correct answer {answer:?} is not one of the options", position(.index))]
    AnswerNotAnOption { index: Option<usize>, answer: String },
    #[error("num_questions must be between 1 and 30, got {0}")]
    QuestionCountOutOfRange(i64),
    #[error("requested {requested} questions, generator returned {returned}")]
    QuestionCountMismatch { requested: u32, returned: usize },
    #[error("unknown difficulty: {0} (use easy, medium, or hard)")]
    UnknownDifficulty(String),
    #[error("could not parse generated quiz: {0}")]
    Parse(String),
    #[error("quiz generation failed: {0}")]
    Backend(String),
}

fn position(index: &Option<usize>) -> String {
    index.map(|i| format!("question {}: ", i)).unwrap_or_default()
}

/// Quiz difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Basic concepts, definitions, simple facts.
    Easy,
    /// Relationships between concepts, application.
    Medium,
    /// Analysis and synthesis.
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(QuizError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: String,
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    question: String,
    options: [String; OPTIONS_PER_QUESTION],
    correct_answer: String,
    explanation: String,
}

impl Question {
    /// Builds a question; fails unless there are exactly four options and the answer
    /// matches one of them exactly.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, QuizError> {
        Self::validated(
            None,
            RawQuestion {
                question: question.into(),
                options,
                correct_answer: correct_answer.into(),
                explanation: explanation.into(),
            },
        )
    }

    fn validated(index: Option<usize>, raw: RawQuestion) -> Result<Self, QuizError> {
        let count = raw.options.len();
        let options: [String; OPTIONS_PER_QUESTION] = raw
            .options
            .try_into()
            .map_err(|_| QuizError::OptionCount { index, count })?;
        if !options.contains(&raw.correct_answer) {
            return Err(QuizError::AnswerNotAnOption {
                index,
                answer: raw.correct_answer,
            });
        }
        Ok(Self {
            question: raw.question,
            options,
            correct_answer: raw.correct_answer,
            explanation: raw.explanation,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String; OPTIONS_PER_QUESTION] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuizError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Self::validated(None, raw)
    }
}

#[derive(Deserialize)]
pub(crate) struct RawQuiz {
    topic: String,
    questions: Vec<serde_json::Value>,
}

/// A generated quiz: topic plus ordered questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuiz")]
pub struct Quiz {
    topic: String,
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(topic: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            topic: topic.into(),
            questions,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl TryFrom<RawQuiz> for Quiz {
    type Error = QuizError;

    /// Validates each question in order so errors name the offending question's index.
    fn try_from(raw: RawQuiz) -> Result<Self, Self::Error> {
        let questions = raw
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let q: RawQuestion = serde_json::from_value(value)
                    .map_err(|e| QuizError::Parse(format!("question {}: {}", index, e)))?;
                Question::validated(Some(index), q)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            topic: raw.topic,
            questions,
        })
    }
}

/// Validated input to the quiz-generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizRequest {
    pub research_text: String,
    pub topic: String,
    pub difficulty: Difficulty,
    num_questions: u32,
}

impl QuizRequest {
    /// Fails when `num_questions` is outside 1..=30.
    pub fn new(
        research_text: impl Into<String>,
        topic: impl Into<String>,
        difficulty: Difficulty,
        num_questions: i64,
    ) -> Result<Self, QuizError> {
        if !(i64::from(MIN_QUESTIONS)..=i64::from(MAX_QUESTIONS)).contains(&num_questions) {
            return Err(QuizError::QuestionCountOutOfRange(num_questions));
        }
        Ok(Self {
            research_text: research_text.into(),
            topic: topic.into(),
            difficulty,
            num_questions: num_questions as u32,
        })
    }

    pub fn num_questions(&self) -> u32 {
        self.num_questions
    }

    /// Checks a generated quiz against this request's question count.
    pub fn check(&self, quiz: &Quiz) -> Result<(), QuizError> {
        if quiz.len() != self.num_questions as usize {
            return Err(QuizError::QuestionCountMismatch {
                requested: self.num_questions,
                returned: quiz.len(),
            });
        }
        Ok(())
    }
}
