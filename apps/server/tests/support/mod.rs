use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use concord_server::{api::create_router, AppState, Config};
use tower::ServiceExt as _;
use wiremock::MockServer;

/// A full router wired against two stub upstreams.
pub struct TestApp {
    pub router: Router,
    pub concordances: MockServer,
    pub search: MockServer,
}

impl TestApp {
    pub async fn new() -> anyhow::Result<Self> {
        init_tracing();

        let concordances = MockServer::start().await;
        let search = MockServer::start().await;

        let mut config = Config::default();
        config.upstream.public_concordances_url = concordances.uri();
        config.upstream.concept_search_url = search.uri();
        config.upstream.timeout_seconds = 2;

        let state = AppState::new(config)?;
        let router = create_router(state);

        Ok(Self {
            router,
            concordances,
            search,
        })
    }

    /// Issue a GET against the app, returning status and raw body.
    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, String)> {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("x-request-id", "tid_test")
                    .body(Body::empty())?,
            )
            .await?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, String::from_utf8(bytes.to_vec())?))
    }

    /// Issue a GET and decode the JSON body.
    pub async fn get_json(&self, uri: &str) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let (status, body) = self.get(uri).await?;
        Ok((status, serde_json::from_str(&body)?))
    }
}

fn init_tracing() {
    use std::sync::OnceLock;
    use tracing_subscriber::prelude::*;
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "concord_server=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .try_init();
    });
}
