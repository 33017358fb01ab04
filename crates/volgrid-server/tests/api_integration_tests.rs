//! Integration tests for the Volgrid server API endpoints.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use volgrid_server::routes::create_router;
use volgrid_server::ServerConfig;

fn dataset_csv(pairs: &[&str]) -> String {
    let deltas = ["10P", "25P", "ATM", "25C", "10C"];
    let metrics = ["Carry", "Pctl 6m", "Pctl 1y", "Pctl 2y", "Pctl 5y", "Pctl all"];

    let mut header0 = vec!["CCY"];
    let mut header1 = vec![""];
    for cat in ["Vol", "Vol 4wk-chg", "Vol Pctl all"] {
        for delta in deltas {
            header0.push(cat);
            header1.push(delta);
        }
    }
    for metric in metrics {
        header0.push("Carry");
        header1.push(metric);
    }

    let mut out = format!("{}\n{}\n", header0.join(","), header1.join(","));
    for (p, pair) in pairs.iter().enumerate() {
        for t in 0..5 {
            let mut cells = vec![(*pair).to_string()];
            for c in 0..21 {
                cells.push(format!("{:.2}", (p * 13 + t * 7 + c) as f64 / 5.0));
            }
            out.push_str(&cells.join(","));
            out.push('\n');
        }
    }
    out
}

/// Router backed by temp directories; the tempdir guard must outlive the
/// router.
fn test_router(dir: &tempfile::TempDir) -> Router {
    let config = ServerConfig {
        data_path: dir
            .path()
            .join("vol_data.csv")
            .to_string_lossy()
            .into_owned(),
        output_dir: dir.path().join("images").to_string_lossy().into_owned(),
        ..ServerConfig::default()
    };
    create_router(&config)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn upload(router: &Router, csv: String) -> StatusCode {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/dataset")
                .body(Body::from(csv))
                .unwrap(),
        )
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
async fn health_reports_ok() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(&dir);

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn listing_without_dataset_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(&dir);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/currencies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_then_list_currencies() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(&dir);

    let status = upload(&router, dataset_csv(&["EUR/USD", "EUR/TRY", "JPY/NOK"])).await;
    assert_eq!(status, StatusCode::OK);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/currencies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["pairs"].as_array().unwrap().len(), 3);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/currencies/g10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    let g10: Vec<&str> = json["pairs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(g10, vec!["EUR/USD", "JPY/NOK"]);
}

#[tokio::test]
async fn upload_invalid_csv_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(&dir);

    let status = upload(&router, "definitely,not\na,dataset\n".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn grid_generated_on_demand_and_cached() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(&dir);
    upload(&router, dataset_csv(&["EUR/USD"])).await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/grids/EUR%7CUSD")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "image/png"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let image = volgrid_render::png::decode(&bytes).unwrap();
    assert!(image.width() > 0 && image.height() > 0);

    // The file is cached for the next request.
    assert!(dir.path().join("images").join("EUR|USD.png").exists());
}

#[tokio::test]
async fn carry_accepts_dash_separated_token() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(&dir);
    upload(&router, dataset_csv(&["EUR/USD"])).await;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/carry/EUR-USD")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(dir.path().join("images").join("EUR|USD_carry.png").exists());
}

#[tokio::test]
async fn unknown_pair_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(&dir);
    upload(&router, dataset_csv(&["EUR/USD"])).await;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/grids/AUD-NZD")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_pair_token_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(&dir);
    upload(&router, dataset_csv(&["EUR/USD"])).await;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/grids/notapair")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reupload_clears_cached_images() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(&dir);
    upload(&router, dataset_csv(&["EUR/USD"])).await;

    router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/grids/EUR-USD")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let cached = dir.path().join("images").join("EUR|USD.png");
    assert!(cached.exists());

    upload(&router, dataset_csv(&["EUR/USD", "GBP/JPY"])).await;
    assert!(!cached.exists());
}
