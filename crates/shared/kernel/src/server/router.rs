use super::{NotFoundPage, PreviewError};
use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use orrery_domain::settings::PreviewOptions;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Static preview of `output_dir`.
///
/// Existing files are served as-is. With a not-found middleware configured, every other
/// request (any method, any path) gets the fallback document with status 404; without
/// one, the static server's own 404 applies.
///
/// # Errors
/// [`PreviewError::NotFoundPage`] when the configured fallback document cannot be read.
pub fn preview_router(output_dir: &Path, options: &PreviewOptions) -> Result<Router, PreviewError> {
    let static_files = ServeDir::new(output_dir).append_index_html_on_directories(true);

    let router = match options.not_found_document() {
        Some(document) => {
            let page = NotFoundPage::load(document)?;
            info!(document = %page.path().display(), "Preview fallback installed");
            let fallback = move || {
                let page = page.clone();
                async move { page.respond() }
            };
            Router::new().fallback_service(
                static_files
                    .call_fallback_on_method_not_allowed(true)
                    .not_found_service(fallback.into_service()),
            )
        },
        None => Router::new().fallback_service(static_files),
    };

    Ok(router.layer(TraceLayer::new_for_http()))
}
