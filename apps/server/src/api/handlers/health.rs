//! Service health endpoints.
//!
//! `/__health` reports the outcome of each upstream's good-to-go probe;
//! the endpoint itself always answers 200. `/__gtg` collapses the same
//! probes into a single good-to-go status for load balancers.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use concord_concepts::HealthCheck as _;
use serde_json::json;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let (concordances, search) = tokio::join!(
        state.concordances.health_check(),
        state.search.health_check(),
    );

    let checks = vec![
        check_result(
            "public-concordances-api",
            "Public Concordances API Healthcheck",
            "Concorded concepts can not be returned to clients",
            concordances,
        ),
        check_result(
            "concept-search-api",
            "Concept Search API Healthcheck",
            "Concept information can not be returned to clients",
            search,
        ),
    ];
    let ok = checks
        .iter()
        .all(|check| check["ok"].as_bool().unwrap_or(false));

    Json(json!({
        "schemaVersion": 1,
        "systemCode": state.config.app.system_code,
        "name": state.config.app.name,
        "description": state.config.app.description,
        "ok": ok,
        "checks": checks,
    }))
}

fn check_result(
    id: &str,
    name: &str,
    business_impact: &str,
    outcome: concord_concepts::Result<String>,
) -> serde_json::Value {
    let (ok, output) = match outcome {
        Ok(message) => (true, message),
        Err(err) => (false, err.to_string()),
    };

    json!({
        "id": id,
        "name": name,
        "businessImpact": business_impact,
        "ok": ok,
        "checkOutput": output,
    })
}

pub async fn gtg(State(state): State<AppState>) -> impl IntoResponse {
    let (concordances, search) = tokio::join!(
        state.concordances.health_check(),
        state.search.health_check(),
    );

    if concordances.is_ok() && search.is_ok() {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Unavailable")
    }
}
