use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use image::{DynamicImage, ImageFormat, RgbImage};
use pdf_compose_server::{AppState, Config, build_router};
use std::io::Cursor;
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "XTESTBOUNDARYX";

async fn test_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(Config::with_output_dir(dir.path()))
        .await
        .unwrap();
    (build_router(state), dir)
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut encoded = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .unwrap();
    encoded
}

/// Build a multipart body from text fields and (file name, bytes) files
fn multipart_body(fields: &[(&str, &str)], files: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (file_name, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"images\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn convert_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/convert")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

fn stored_name(response: &Response) -> String {
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    location
        .strip_prefix("/result.html?file=")
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_health() {
    let (app, _dir) = test_app().await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_pages_served() {
    let (app, _dir) = test_app().await;

    let index = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(index.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(index).await).unwrap();
    assert!(html.contains("action=\"/convert\""));

    let result = app.oneshot(get("/result.html?file=x")).await.unwrap();
    assert_eq!(result.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_convert_then_download_once() {
    let (app, dir) = test_app().await;

    let body = multipart_body(
        &[("layout", "double"), ("borderSize", "5"), ("borderColor", "red")],
        &[
            ("a.png", png_bytes(40, 40)),
            ("b.png", png_bytes(40, 40)),
            ("c.png", png_bytes(40, 40)),
        ],
    );
    let response = app.clone().oneshot(convert_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let name = stored_name(&response);
    assert!(dir.path().join(&name).exists());

    let download = app
        .clone()
        .oneshot(get(&format!("/download?file={name}")))
        .await
        .unwrap();
    assert_eq!(download.status(), StatusCode::OK);
    assert_eq!(
        download.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    assert_eq!(
        download
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap(),
        format!("attachment; filename=\"{name}\"")
    );

    let pdf = body_bytes(download).await;
    let doc = lopdf::Document::load_mem(&pdf).unwrap();
    assert_eq!(doc.get_pages().len(), 2);

    assert!(!dir.path().join(&name).exists());
    let again = app
        .oneshot(get(&format!("/download?file={name}")))
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_convert_skips_empty_file_inputs() {
    let (app, _dir) = test_app().await;

    let body = multipart_body(&[], &[("", Vec::new()), ("a.png", png_bytes(10, 20))]);
    let response = app.oneshot(convert_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_convert_unknown_layout_falls_back_to_single() {
    let (app, _dir) = test_app().await;

    let body = multipart_body(
        &[("layout", "triple"), ("borderColor", "purple")],
        &[("a.png", png_bytes(10, 10)), ("b.png", png_bytes(10, 10))],
    );
    let response = app.clone().oneshot(convert_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let name = stored_name(&response);
    let download = app
        .oneshot(get(&format!("/download?file={name}")))
        .await
        .unwrap();
    let doc = lopdf::Document::load_mem(&body_bytes(download).await).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[tokio::test]
async fn test_convert_without_images() {
    let (app, dir) = test_app().await;

    let body = multipart_body(&[("layout", "single")], &[("", Vec::new())]);
    let response = app.oneshot(convert_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["error"]["message"], "No images uploaded");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_convert_rejects_bad_border_size() {
    let (app, _dir) = test_app().await;

    let body = multipart_body(&[("borderSize", "-2")], &[("a.png", png_bytes(10, 10))]);
    let response = app.oneshot(convert_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_convert_undecodable_image_stores_nothing() {
    let (app, dir) = test_app().await;

    let body = multipart_body(
        &[],
        &[("a.png", png_bytes(10, 10)), ("b.png", b"not a png".to_vec())],
    );
    let response = app.oneshot(convert_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_download_missing_parameter() {
    let (app, _dir) = test_app().await;
    let response = app.oneshot(get("/download")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_download_rejects_traversal() {
    let (app, _dir) = test_app().await;
    for uri in [
        "/download?file=..%2Fsecret.pdf",
        "/download?file=a%5Cb.pdf",
        "/download?file=notes.pdf",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[tokio::test]
async fn test_download_unknown_artifact() {
    let (app, _dir) = test_app().await;
    let name = pdf_compose_server::store::generate_name();
    let response = app
        .oneshot(get(&format!("/download?file={name}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
