//! Health and good-to-go endpoints.

#[allow(unused)]
mod support;

use axum::http::StatusCode;
use support::TestApp;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mount_gtg(server: &wiremock::MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/__gtg"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

#[tokio::test]
async fn health_reports_both_upstream_checks() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    mount_gtg(&app.concordances, 200).await;
    mount_gtg(&app.search, 200).await;

    let (status, body) = app.get_json("/__health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["systemCode"], "internal-concordances");

    let checks = body["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 2);
    assert!(checks.iter().all(|check| check["ok"] == true));
    Ok(())
}

#[tokio::test]
async fn health_stays_200_when_an_upstream_is_down() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    mount_gtg(&app.concordances, 503).await;
    mount_gtg(&app.search, 200).await;

    let (status, body) = app.get_json("/__health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], false);

    let checks = body["checks"].as_array().unwrap();
    let concordances = checks
        .iter()
        .find(|check| check["id"] == "public-concordances-api")
        .unwrap();
    assert_eq!(concordances["ok"], false);
    Ok(())
}

#[tokio::test]
async fn gtg_reflects_upstream_availability() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    mount_gtg(&app.concordances, 200).await;
    mount_gtg(&app.search, 200).await;

    let (status, body) = app.get("/__gtg").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
    Ok(())
}

#[tokio::test]
async fn gtg_fails_when_any_upstream_is_down() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    mount_gtg(&app.concordances, 200).await;
    mount_gtg(&app.search, 500).await;

    let (status, body) = app.get("/__gtg").await?;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, "Unavailable");
    Ok(())
}

#[tokio::test]
async fn request_id_is_echoed_on_the_response() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt as _;

    let app = TestApp::new().await?;
    mount_gtg(&app.concordances, 200).await;
    mount_gtg(&app.search, 200).await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/__gtg")
                .header("x-request-id", "tid_known")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.headers()["x-request-id"], "tid_known");

    // A request id is generated when the caller does not supply one.
    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/__gtg").body(Body::empty())?)
        .await?;
    let generated = response.headers()["x-request-id"].to_str()?;
    assert!(generated.starts_with("tid_"));
    Ok(())
}
