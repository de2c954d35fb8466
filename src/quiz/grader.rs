use std::collections::HashMap;
use std::collections::hash_map::Entry;

use thiserror::Error;

use crate::models::Topic;
use crate::session::{Session, SessionError};

use super::encoder::AnswerKey;
use super::progress::{self, TopicStage};

#[derive(Debug, Error)]
pub enum GradeError {
    /// No live answer key: the topic was never rendered in this session, the session
    /// expired, or the submission was already graded.
    #[error("no answer key for the {topic} quiz in this session")]
    MissingAnswerKey { topic: Topic },

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// A submitted value for one question id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmittedAnswer {
    Text(String),
    /// The field was sent more than once. Never counts as correct.
    Malformed,
}

impl SubmittedAnswer {
    fn matches(&self, correct: &str) -> bool {
        match self {
            SubmittedAnswer::Text(text) => text == correct,
            SubmittedAnswer::Malformed => false,
        }
    }
}

/// Form fields of a quiz submission, keyed by question id.
#[derive(Debug, Clone, Default)]
pub struct Submission(HashMap<String, SubmittedAnswer>);

impl Submission {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut answers = HashMap::new();
        for (name, value) in pairs {
            match answers.entry(name) {
                Entry::Vacant(entry) => {
                    entry.insert(SubmittedAnswer::Text(value));
                }
                Entry::Occupied(mut entry) => {
                    entry.insert(SubmittedAnswer::Malformed);
                }
            }
        }
        Self(answers)
    }

    pub fn answer(&self, question_id: &str) -> Option<&SubmittedAnswer> {
        self.0.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Submission {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl AnswerKey {
    /// Number of questions whose submitted text equals the stored answer. Ids only on
    /// one side are ignored.
    pub fn score(&self, submission: &Submission) -> usize {
        self.iter()
            .filter(|(id, correct)| {
                submission
                    .answer(id)
                    .is_some_and(|answer| answer.matches(correct))
            })
            .count()
    }
}

/// Consume the topic's answer key, score `submission` against it and record the score.
///
/// On error the session is left exactly as it was.
pub fn grade(
    session: &mut Session,
    topic: Topic,
    submission: &Submission,
) -> Result<usize, GradeError> {
    session.transaction(|session| {
        let answer_key: AnswerKey = session
            .pop(&topic.answers_key())
            .ok_or(GradeError::MissingAnswerKey { topic })?;

        let score = answer_key.score(submission);

        session.set(topic.score_key(), &score)?;
        progress::advance(session, topic, TopicStage::Graded)?;

        Ok(score)
    })
}
