//! Request handlers.

use axum::Router;
use axum::extract::{Form, State};
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::models::Topic;
use crate::quiz::{self, GradeError, Submission};
use crate::session::Session;
use crate::ui;

use super::error::AppError;
use super::state::AppState;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "quiz_session";

type FormPairs = Vec<(String, String)>;

pub fn router(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new()
        .route("/", get(index))
        .route("/quiz/result/", get(show_result));

    for topic in Topic::ALL {
        router = router.route(
            topic.path(),
            get(move |state: State<AppState>, jar: CookieJar| show_quiz(topic, state, jar)).post(
                move |state: State<AppState>, jar: CookieJar, form: Form<FormPairs>| {
                    submit_quiz(topic, state, jar, form)
                },
            ),
        );
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

fn session_id(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

fn with_session_cookie(jar: CookieJar, id: Uuid) -> CookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

async fn index(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (id, stages) = {
        let mut sessions = state.sessions.lock().await;
        let (id, session) = sessions.get_or_create(session_id(&jar));
        let session: &Session = session;
        let stages = Topic::ALL.map(|topic| (topic, quiz::stage(session, topic)));
        (id, stages)
    };

    let page = ui::render_welcome(&stages, state.banks.total_questions());
    (with_session_cookie(jar, id), Html(page.into_string()))
}

async fn show_quiz(
    topic: Topic,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let (id, payload) = {
        let mut sessions = state.sessions.lock().await;
        let (id, session) = sessions.get_or_create(session_id(&jar));
        let payload = quiz::render_quiz(state.banks.get(topic), topic, &mut rand::rng(), session)?;
        (id, payload)
    };

    tracing::info!(%topic, session = %id, questions = payload.questions.len(), "answer key issued");

    let page = ui::render_quiz(&payload);
    Ok((with_session_cookie(jar, id), Html(page.into_string())))
}

async fn submit_quiz(
    topic: Topic,
    State(state): State<AppState>,
    jar: CookieJar,
    Form(pairs): Form<FormPairs>,
) -> Result<Redirect, AppError> {
    let submission = Submission::from_pairs(pairs);

    let (id, score) = {
        let mut sessions = state.sessions.lock().await;
        let id = session_id(&jar).ok_or(GradeError::MissingAnswerKey { topic })?;
        let session = sessions
            .get_mut(&id)
            .ok_or(GradeError::MissingAnswerKey { topic })?;
        let score = quiz::grade(session, topic, &submission)?;
        (id, score)
    };

    tracing::info!(%topic, session = %id, score, answered = submission.len(), "quiz graded");

    Ok(Redirect::to(topic.next_path()))
}

async fn show_result(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let (id, result) = {
        let mut sessions = state.sessions.lock().await;
        let (id, session) = sessions.get_or_create(session_id(&jar));
        let result = quiz::aggregate(session, &state.banks)?;
        (id, result)
    };

    tracing::info!(
        session = %id,
        total = result.total_score,
        percentage = result.percentage_score,
        "result reported"
    );

    let page = ui::render_result(&result, &state.banks);
    Ok((with_session_cookie(jar, id), Html(page.into_string())))
}
