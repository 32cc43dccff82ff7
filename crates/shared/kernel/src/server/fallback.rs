use super::{PreviewError, PreviewErrorExt};
use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The fallback document, read once and shared by every not-found response.
#[derive(Debug, Clone)]
pub struct NotFoundPage {
    path: PathBuf,
    body: Bytes,
}

impl NotFoundPage {
    /// Reads the document as raw bytes.
    ///
    /// Later edits to the file are not picked up until the server restarts.
    ///
    /// # Errors
    /// [`PreviewError::NotFoundPage`] if the file is missing or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PreviewError> {
        let path = path.as_ref();
        let body = std::fs::read(path)
            .context(format!("Reading fallback document {}", path.display()))?;
        debug!(path = %path.display(), bytes = body.len(), "Loaded not-found page");
        Ok(Self { path: path.to_path_buf(), body: Bytes::from(body) })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// 404 with the document verbatim; the request is never inspected.
    #[must_use]
    pub fn respond(&self) -> Response {
        let content_type = HeaderValue::from_static("text/html; charset=UTF-8");
        (StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, content_type)], self.body.clone())
            .into_response()
    }
}
