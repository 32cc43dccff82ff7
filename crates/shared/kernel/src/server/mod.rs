//! Preview-server pieces: static file serving with the not-found fallback.

mod error;
mod fallback;
mod router;

pub use crate::server::error::{PreviewError, PreviewErrorExt};
pub use crate::server::fallback::NotFoundPage;
pub use crate::server::router::preview_router;
