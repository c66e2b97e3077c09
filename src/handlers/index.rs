use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;

/// Root page
///
/// Serves the HTML template loaded at startup. The template is a static
/// asset supplied at deploy time; nothing is interpolated into it, and
/// the shared `Bytes` buffer is reused across requests.
pub async fn index_handler(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.index_html.clone())
}
