mod loader;

pub use loader::{
    LoadError, builtin_question_banks, load_question_banks_from_json, parse_question_banks,
};
