use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{InvalidQuestion, QuestionBank, QuestionBanks};

const BUILTIN_QUESTIONS: &str = include_str!("../../questions.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse question banks: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] InvalidQuestion),
}

/// Shape of a bank file before validation.
#[derive(Deserialize)]
struct BankFile {
    math: QuestionBank,
    python: QuestionBank,
}

/// The Math and Python banks shipped with the binary.
pub fn builtin_question_banks() -> Result<QuestionBanks, LoadError> {
    parse_question_banks(BUILTIN_QUESTIONS)
}

pub fn load_question_banks_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionBanks, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_question_banks(&json_content)
}

pub fn parse_question_banks(json: &str) -> Result<QuestionBanks, LoadError> {
    let BankFile { math, python } = serde_json::from_str(json)?;
    Ok(QuestionBanks::new(math, python)?)
}
