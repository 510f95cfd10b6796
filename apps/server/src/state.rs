//! Shared application state.

use crate::config::Config;
use concord_concepts::{ConcordancesClient, SearchClient};
use std::sync::Arc;
use std::time::Duration;

/// Per-process state shared by all requests: the configuration and the two
/// upstream clients. The underlying `reqwest::Client` is built once and
/// reused; it carries no request-specific state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub concordances: Arc<ConcordancesClient>,
    pub search: Arc<SearchClient>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream.timeout_seconds))
            .build()?;

        let concordances = ConcordancesClient::new(
            client.clone(),
            config.upstream.public_concordances_url.trim_end_matches('/'),
        );
        let search = SearchClient::new(
            client,
            config.upstream.concept_search_url.trim_end_matches('/'),
        );

        Ok(Self {
            config: Arc::new(config),
            concordances: Arc::new(concordances),
            search: Arc::new(search),
        })
    }
}
