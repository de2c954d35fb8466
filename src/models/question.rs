use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use super::Topic;

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 4;

/// A multiple-choice question as written in the bank file.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options` in their original, unshuffled order.
    pub correct_answer: usize,
}

impl Question {
    /// Literal text of the correct option.
    pub fn correct_text(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.text.trim().is_empty() {
            return Err("question text is empty");
        }

        if self.options.len() < MIN_OPTIONS || self.options.len() > MAX_OPTIONS {
            return Err("a question needs between 2 and 4 options");
        }

        let mut seen = HashSet::new();
        if !self.options.iter().all(|option| seen.insert(option.as_str())) {
            return Err("options must be distinct");
        }

        if self.correct_answer >= self.options.len() {
            return Err("correct_answer is out of range");
        }

        Ok(())
    }
}

/// Ordered questions of a single topic. Position defines the question ids.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank(Vec<Question>);

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A question that cannot be served. `position` is 1-based, 0 for an empty bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {topic} question {position}: {reason}")]
pub struct InvalidQuestion {
    pub topic: Topic,
    pub position: usize,
    pub reason: &'static str,
}

/// All question banks, fixed for the lifetime of the process.
///
/// Only constructed through [`QuestionBanks::new`], so every instance has passed
/// validation.
#[derive(Debug, Clone)]
pub struct QuestionBanks {
    math: QuestionBank,
    python: QuestionBank,
}

impl QuestionBanks {
    pub fn new(math: QuestionBank, python: QuestionBank) -> Result<Self, InvalidQuestion> {
        let banks = Self { math, python };
        banks.validate()?;
        Ok(banks)
    }

    pub fn get(&self, topic: Topic) -> &QuestionBank {
        match topic {
            Topic::Math => &self.math,
            Topic::Python => &self.python,
        }
    }

    pub fn total_questions(&self) -> usize {
        Topic::ALL.iter().map(|topic| self.get(*topic).len()).sum()
    }

    fn validate(&self) -> Result<(), InvalidQuestion> {
        for topic in Topic::ALL {
            let bank = self.get(topic);
            if bank.is_empty() {
                return Err(InvalidQuestion {
                    topic,
                    position: 0,
                    reason: "bank has no questions",
                });
            }
            for (index, question) in bank.questions().iter().enumerate() {
                question.validate().map_err(|reason| InvalidQuestion {
                    topic,
                    position: index + 1,
                    reason,
                })?;
            }
        }
        Ok(())
    }
}
