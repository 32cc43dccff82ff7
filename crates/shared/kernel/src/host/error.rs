use crate::unit::UnitError;
use std::borrow::Cow;

/// Errors raised by [`super::SiteBuilder`] when templates call into registered units.
#[orrery_derive::orrery_error]
pub enum HostError {
    #[error("Unknown filter{}: {message}", format_context(.context))]
    UnknownFilter { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown shortcode{}: {message}", format_context(.context))]
    UnknownShortcode { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown template extension{}: {message}", format_context(.context))]
    UnknownExtension { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unit call failed{}: {source}", format_context(.context))]
    Unit { source: UnitError, context: Option<Cow<'static, str>> },
}
