use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the independent quiz subjects.
///
/// Each topic owns its own question bank and its own session keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Math,
    Python,
}

impl Topic {
    /// Topics in the order a user walks through them.
    pub const ALL: [Topic; 2] = [Topic::Math, Topic::Python];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Math => "math",
            Topic::Python => "python",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Topic::Math => "Math Quiz",
            Topic::Python => "Python Quiz",
        }
    }

    /// Route serving this topic's quiz form.
    pub fn path(self) -> &'static str {
        match self {
            Topic::Math => "/quiz/math/",
            Topic::Python => "/quiz/python/",
        }
    }

    /// Where the browser goes after this topic has been graded.
    pub fn next_path(self) -> &'static str {
        match self {
            Topic::Math => Topic::Python.path(),
            Topic::Python => "/quiz/result/",
        }
    }

    /// Identifier of the question at `position` (1-based), e.g. `math_3`.
    pub fn question_id(self, position: usize) -> String {
        format!("{}_{}", self.as_str(), position)
    }

    pub(crate) fn answers_key(self) -> String {
        format!("{}_answers", self.as_str())
    }

    pub(crate) fn score_key(self) -> String {
        format!("{}_score", self.as_str())
    }

    pub(crate) fn stage_key(self) -> String {
        format!("{}_stage", self.as_str())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_ids_are_one_based() {
        assert_eq!(Topic::Math.question_id(1), "math_1");
        assert_eq!(Topic::Python.question_id(5), "python_5");
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(Topic::Math.answers_key(), "math_answers");
        assert_eq!(Topic::Python.score_key(), "python_score");
        assert_eq!(Topic::Math.stage_key(), "math_stage");
    }

    #[test]
    fn test_flow_order() {
        assert_eq!(Topic::Math.next_path(), "/quiz/python/");
        assert_eq!(Topic::Python.next_path(), "/quiz/result/");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Topic::Python).unwrap();
        assert_eq!(json, "\"python\"");
    }
}
