use crate::config::Config;
use crate::profiles::service::ProfileService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileService,
    pub config: Config,
}
