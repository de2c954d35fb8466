mod question;
mod topic;

pub use question::{InvalidQuestion, Question, QuestionBank, QuestionBanks};
pub use topic::Topic;
