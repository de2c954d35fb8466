use serde::Serialize;

use crate::models::{QuestionBanks, Topic};
use crate::session::{Session, SessionError};

use super::progress::{self, TopicStage};

/// Final scores of a completed quiz. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    pub math_score: usize,
    pub python_score: usize,
    pub total_score: usize,
    pub total_questions: usize,
    pub percentage_score: f64,
    /// Topics without a recorded score.
    pub skipped: Vec<Topic>,
}

impl QuizResult {
    pub fn score(&self, topic: Topic) -> usize {
        match topic {
            Topic::Math => self.math_score,
            Topic::Python => self.python_score,
        }
    }
}

/// Consume both topic scores from `session` and combine them.
///
/// Scores are read once: a second call in the same session sees zeros.
pub fn aggregate(session: &mut Session, banks: &QuestionBanks) -> Result<QuizResult, SessionError> {
    let mut skipped = Vec::new();
    let (math_score, python_score) = session.transaction(|session| {
        let math_score = take_score(session, Topic::Math, &mut skipped)?;
        let python_score = take_score(session, Topic::Python, &mut skipped)?;
        Ok::<_, SessionError>((math_score, python_score))
    })?;

    let total_score = math_score + python_score;
    let total_questions = banks.total_questions();
    let percentage_score = if total_questions > 0 {
        total_score as f64 * 100.0 / total_questions as f64
    } else {
        0.0
    };

    Ok(QuizResult {
        math_score,
        python_score,
        total_score,
        total_questions,
        percentage_score,
        skipped,
    })
}

fn take_score(
    session: &mut Session,
    topic: Topic,
    skipped: &mut Vec<Topic>,
) -> Result<usize, SessionError> {
    match session.pop::<usize>(&topic.score_key()) {
        Some(score) => {
            progress::advance(session, topic, TopicStage::Reported)?;
            Ok(score)
        }
        None => {
            skipped.push(topic);
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_question_banks;
    use crate::quiz::stage;

    #[test]
    fn test_full_marks() {
        let banks = builtin_question_banks().unwrap();
        let mut session = Session::new();
        session.set(Topic::Math.score_key(), &5usize).unwrap();
        session.set(Topic::Python.score_key(), &5usize).unwrap();

        let result = aggregate(&mut session, &banks).unwrap();
        assert_eq!(result.math_score, 5);
        assert_eq!(result.python_score, 5);
        assert_eq!(result.total_score, 10);
        assert_eq!(result.percentage_score, 100.0);
        assert!(result.skipped.is_empty());
        assert_eq!(stage(&session, Topic::Math), TopicStage::Reported);
    }

    #[test]
    fn test_partial_score() {
        let banks = builtin_question_banks().unwrap();
        let mut session = Session::new();
        session.set(Topic::Math.score_key(), &3usize).unwrap();
        session.set(Topic::Python.score_key(), &4usize).unwrap();

        let result = aggregate(&mut session, &banks).unwrap();
        assert_eq!(result.total_score, 7);
        assert!((result.percentage_score - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_skipped_topic_counts_as_zero() {
        let banks = builtin_question_banks().unwrap();
        let mut session = Session::new();
        session.set(Topic::Python.score_key(), &2usize).unwrap();

        let result = aggregate(&mut session, &banks).unwrap();
        assert_eq!(result.math_score, 0);
        assert_eq!(result.total_score, 2);
        assert_eq!(result.skipped, vec![Topic::Math]);
        assert_eq!(stage(&session, Topic::Math), TopicStage::NotStarted);
    }

    #[test]
    fn test_second_view_reads_zeros() {
        let banks = builtin_question_banks().unwrap();
        let mut session = Session::new();
        session.set(Topic::Math.score_key(), &5usize).unwrap();
        session.set(Topic::Python.score_key(), &1usize).unwrap();

        let first = aggregate(&mut session, &banks).unwrap();
        assert_eq!(first.total_score, 6);

        let second = aggregate(&mut session, &banks).unwrap();
        assert_eq!(second.total_score, 0);
        assert_eq!(second.percentage_score, 0.0);
        assert_eq!(second.skipped, Topic::ALL.to_vec());
    }

    #[test]
    fn test_answer_keys_are_left_alone() {
        let banks = builtin_question_banks().unwrap();
        let mut session = Session::new();
        session.set(Topic::Math.answers_key(), &crate::quiz::AnswerKey::default()).unwrap();

        aggregate(&mut session, &banks).unwrap();
        assert!(session.contains(&Topic::Math.answers_key()));
    }
}
