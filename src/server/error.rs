use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::quiz::{GradeError, RenderError};
use crate::session::SessionError;
use crate::ui;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Grade(#[from] GradeError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Grade(GradeError::MissingAnswerKey { topic }) => {
                tracing::warn!(%topic, "submission without a live answer key");
                let page = ui::render_error(
                    "This quiz was already submitted or your session has expired. \
                     Please load the questions again before answering.",
                    topic.path(),
                );
                (StatusCode::BAD_REQUEST, Html(page.into_string())).into_response()
            }
            error => {
                tracing::error!(%error, "request failed");
                let page = ui::render_error("The server could not process your request.", "/");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
            }
        }
    }
}
