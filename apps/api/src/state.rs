use std::sync::Arc;
use std::time::Duration;

use crate::analysis::{ResumeAnalyzer, StaticAnalyzer};
use crate::config::Config;
use crate::editor::SessionTable;
use crate::persistence::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Live editor sessions, evicted after `session_idle_ttl_secs` of inactivity.
    pub sessions: SessionTable,
    /// Saved résumés. Default: in-memory; Postgres when DATABASE_URL is set.
    pub store: Arc<dyn ResumeStore>,
    /// Pluggable analyzer. Default: StaticAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn ResumeStore>) -> Self {
        let sessions = SessionTable::new(Duration::from_secs(config.session_idle_ttl_secs));
        Self {
            config,
            sessions,
            store,
            analyzer: Arc::new(StaticAnalyzer),
        }
    }

    /// In-memory state with default config, used by tests.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Config::default(), Arc::new(crate::persistence::InMemoryResumeStore::new()))
    }
}
