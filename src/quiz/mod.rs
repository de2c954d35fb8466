//! The question/answer/session correlation protocol.
//!
//! Rendering a topic issues an [`AnswerKey`] into the session, grading consumes it and
//! records a score, and the result view consumes the scores.

mod encoder;
mod grader;
mod progress;
mod result;

pub use encoder::{AnswerKey, RenderError, RenderPayload, RenderedQuestion, render_quiz};
pub use grader::{GradeError, Submission, SubmittedAnswer, grade};
pub use progress::{TopicStage, stage};
pub use result::{QuizResult, aggregate};
