use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{QuestionBank, Topic};
use crate::session::{Session, SessionError};

use super::progress::{self, TopicStage};

#[derive(Debug, Error)]
pub enum RenderError {
    /// The question's `correct_answer` does not point at one of its options.
    #[error("question {question_id} has no correct option")]
    NoCorrectOption { question_id: String },

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Correct option text per question id, held server-side between render and submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey(BTreeMap<String, String>);

impl AnswerKey {
    pub fn insert(&mut self, question_id: String, correct: String) {
        self.0.insert(question_id, correct);
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, text)| (id.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A question as shown to the user, options in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderPayload {
    pub topic: Topic,
    /// Bank order; only the options inside each question are shuffled.
    pub questions: Vec<RenderedQuestion>,
}

/// Prepare a topic for display and issue its answer key into `session`.
///
/// Any earlier key or score for the topic is discarded, so a re-render always starts
/// the topic over. A question without a correct option fails the whole render and
/// leaves the session untouched.
pub fn render_quiz<R: Rng + ?Sized>(
    bank: &QuestionBank,
    topic: Topic,
    rng: &mut R,
    session: &mut Session,
) -> Result<RenderPayload, RenderError> {
    let mut answer_key = AnswerKey::default();
    let mut questions = Vec::with_capacity(bank.len());

    for (index, question) in bank.questions().iter().enumerate() {
        let id = topic.question_id(index + 1);

        let Some(correct) = question.correct_text() else {
            return Err(RenderError::NoCorrectOption { question_id: id });
        };
        answer_key.insert(id.clone(), correct.to_string());

        let mut options = question.options.clone();
        options.shuffle(rng);

        questions.push(RenderedQuestion {
            id,
            text: question.text.clone(),
            options,
        });
    }

    session.transaction(|session| {
        session.set(topic.answers_key(), &answer_key)?;
        session.remove(&topic.score_key());
        progress::advance(session, topic, TopicStage::AnswerKeyIssued)
    })?;

    Ok(RenderPayload { topic, questions })
}
