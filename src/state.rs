use crate::config::Config;
use axum::body::Bytes;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Configuration and the root page template are read once at startup and
/// never mutated, so handlers only ever see read-only state. The template
/// is held as `Bytes` so responses share the buffer instead of copying it
/// per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub index_html: Bytes,
}

impl AppState {
    pub fn new(config: Arc<Config>, index_html: String) -> Self {
        Self {
            config,
            index_html: Bytes::from(index_html),
        }
    }
}
