use serde::{Deserialize, Serialize};

use crate::models::Topic;
use crate::session::{Session, SessionError};

/// How far a session has come with one topic.
///
/// `NotStarted -> AnswerKeyIssued -> Graded -> Reported`. A render may jump back to
/// `AnswerKeyIssued` from any stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicStage {
    #[default]
    NotStarted,
    AnswerKeyIssued,
    Graded,
    Reported,
}

impl TopicStage {
    pub fn label(self) -> &'static str {
        match self {
            TopicStage::NotStarted => "not started",
            TopicStage::AnswerKeyIssued => "in progress",
            TopicStage::Graded => "submitted",
            TopicStage::Reported => "reported",
        }
    }
}

pub fn stage(session: &Session, topic: Topic) -> TopicStage {
    session.get(&topic.stage_key(), TopicStage::NotStarted)
}

pub(crate) fn advance(
    session: &mut Session,
    topic: Topic,
    stage: TopicStage,
) -> Result<(), SessionError> {
    session.set(topic.stage_key(), &stage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stage() {
        let session = Session::new();
        assert_eq!(stage(&session, Topic::Math), TopicStage::NotStarted);
    }

    #[test]
    fn test_stages_are_per_topic() {
        let mut session = Session::new();
        advance(&mut session, Topic::Python, TopicStage::Graded).unwrap();
        assert_eq!(stage(&session, Topic::Python), TopicStage::Graded);
        assert_eq!(stage(&session, Topic::Math), TopicStage::NotStarted);
    }
}
