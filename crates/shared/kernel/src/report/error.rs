use std::borrow::Cow;

#[orrery_derive::orrery_error]
pub enum ReportError {
    #[error("Output walk failed{}: {source}", format_context(.context))]
    Walk { source: walkdir::Error, context: Option<Cow<'static, str>> },
}
