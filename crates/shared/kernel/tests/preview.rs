use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use orrery_domain::settings::{PreviewMiddleware, PreviewOptions};
use orrery_kernel::server::{PreviewError, preview_router};
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};
use tower::ServiceExt;

const FALLBACK: &[u8] = b"<!doctype html>\n<h1>Nothing here</h1>\n\xE2\x9C\xA8\n";

fn site() -> Result<TempDir, std::io::Error> {
    let dir = tempdir()?;
    fs::write(dir.path().join("index.html"), "<h1>Home</h1>")?;
    fs::write(dir.path().join("404.html"), FALLBACK)?;
    fs::create_dir_all(dir.path().join("css"))?;
    fs::write(dir.path().join("css/site.css"), "body{}")?;
    Ok(dir)
}

fn options(document: &Path) -> PreviewOptions {
    PreviewOptions {
        open: false,
        middleware: vec![PreviewMiddleware::NotFound { document: document.to_path_buf() }],
    }
}

async fn fetch(
    router: axum::Router,
    method: Method,
    uri: &str,
) -> Result<(StatusCode, Option<String>, Vec<u8>), Box<dyn std::error::Error>> {
    let request = Request::builder().method(method).uri(uri).body(Body::empty())?;
    let response = router.oneshot(request).await?;
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, content_type, body.to_vec()))
}

#[tokio::test]
async fn unmatched_path_gets_the_fallback_document() -> Result<(), Box<dyn std::error::Error>> {
    let dir = site()?;
    let router = preview_router(dir.path(), &options(&dir.path().join("404.html")))?;

    let (status, content_type, body) = fetch(router, Method::GET, "/does/not/exist").await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=UTF-8"));
    assert_eq!(body, FALLBACK);
    Ok(())
}

#[tokio::test]
async fn fallback_ignores_the_method() -> Result<(), Box<dyn std::error::Error>> {
    let dir = site()?;
    let router = preview_router(dir.path(), &options(&dir.path().join("404.html")))?;

    let (status, _, body) = fetch(router, Method::POST, "/missing.html").await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, FALLBACK);
    Ok(())
}

#[tokio::test]
async fn existing_files_are_served_normally() -> Result<(), Box<dyn std::error::Error>> {
    let dir = site()?;
    let options = options(&dir.path().join("404.html"));

    let (status, content_type, body) =
        fetch(preview_router(dir.path(), &options)?, Method::GET, "/css/site.css").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/css"));
    assert_eq!(body, b"body{}");

    let (status, _, body) = fetch(preview_router(dir.path(), &options)?, Method::GET, "/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Home</h1>");
    Ok(())
}

#[tokio::test]
async fn document_is_read_once_at_startup() -> Result<(), Box<dyn std::error::Error>> {
    let dir = site()?;
    let document = dir.path().join("404.html");
    let router = preview_router(dir.path(), &options(&document))?;

    fs::write(&document, "edited")?;
    let (_, _, body) = fetch(router, Method::GET, "/gone").await?;

    assert_eq!(body, FALLBACK);
    Ok(())
}

#[tokio::test]
async fn without_middleware_the_default_404_applies() -> Result<(), Box<dyn std::error::Error>> {
    let dir = site()?;
    let router = preview_router(dir.path(), &PreviewOptions::default())?;

    let (status, _, body) = fetch(router, Method::GET, "/does/not/exist").await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body, FALLBACK);
    Ok(())
}

#[test]
fn missing_document_fails_router_construction() {
    let dir = tempdir().expect("temp dir");
    let result = preview_router(dir.path(), &options(&dir.path().join("404.html")));
    assert!(matches!(result, Err(PreviewError::NotFoundPage { .. })));
}
