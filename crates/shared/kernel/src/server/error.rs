use std::borrow::Cow;

/// Preview-server failures; independent from composition errors.
#[orrery_derive::orrery_error]
pub enum PreviewError {
    #[error("Not-found page unavailable{}: {source}", format_context(.context))]
    NotFoundPage { source: std::io::Error, context: Option<Cow<'static, str>> },
}
