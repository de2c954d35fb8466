//! # web-quiz
//!
//! A small web quiz: two multiple-choice topics (Math and Python), graded on the server
//! against answer keys kept in the user's session, with a combined result page.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use web_quiz::{Quiz, QuizError, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Use the built-in question banks
//!     let quiz = Quiz::builtin()?;
//!
//!     // Serve it on 127.0.0.1:8712
//!     quiz.serve(ServerConfig::default()).await?;
//!
//!     Ok(())
//! }
//! ```

mod data;
mod models;
pub mod quiz;
pub mod server;
pub mod session;
mod ui;

use std::io;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

pub use data::{
    LoadError, builtin_question_banks, load_question_banks_from_json, parse_question_banks,
};
pub use models::{InvalidQuestion, Question, QuestionBank, QuestionBanks, Topic};
pub use server::ServerConfig;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading the question banks.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    /// IO error while serving.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz with its question banks, ready to be served.
pub struct Quiz {
    banks: Arc<QuestionBanks>,
}

impl Quiz {
    /// Create a new quiz. `QuestionBanks` can only be built through its validating
    /// constructor, so broken banks never reach this point.
    pub fn new(banks: QuestionBanks) -> Self {
        Self {
            banks: Arc::new(banks),
        }
    }

    /// The Math and Python banks compiled into the binary.
    pub fn builtin() -> Result<Self, QuizError> {
        Ok(Self::new(builtin_question_banks()?))
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use web_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let banks = load_question_banks_from_json(path)?;
        Ok(Self::new(banks))
    }

    pub fn banks(&self) -> &QuestionBanks {
        &self.banks
    }

    /// Serve the quiz over HTTP until the process is interrupted.
    pub async fn serve(self, config: ServerConfig) -> Result<(), QuizError> {
        server::run(config, self.banks).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], correct_answer: usize) -> Question {
        Question {
            text: "Pick one".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer,
        }
    }

    #[test]
    fn test_quiz_rejects_invalid_banks() {
        let result = QuestionBanks::new(
            QuestionBank::new(vec![question(&["a", "b"], 9)]),
            QuestionBank::new(Vec::new()),
        )
        .map(Quiz::new);

        let err = result.err().expect("invalid banks must be rejected");
        assert_eq!(err.topic, Topic::Math);
        assert_eq!(err.reason, "correct_answer is out of range");
    }

    #[test]
    fn test_quiz_rejects_empty_bank() {
        let result = QuestionBanks::new(
            QuestionBank::new(vec![question(&["a", "b"], 0)]),
            QuestionBank::new(Vec::new()),
        )
        .map(Quiz::new);

        assert!(matches!(result, Err(InvalidQuestion { topic: Topic::Python, .. })));
    }

    #[test]
    fn test_builtin_quiz() {
        let quiz = Quiz::builtin().unwrap();
        assert_eq!(quiz.banks().total_questions(), 10);
    }
}
