use crate::fetcher::Fetcher;

/// Shared application state passed to all handlers.
/// Holds only the outbound HTTP client, built once at startup; requests
/// share its connection pool and nothing else.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Fetcher,
}
