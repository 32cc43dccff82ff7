use crate::unit::UnitError;
use orrery_domain::category::UnitCategory;
use std::borrow::Cow;

/// Fatal composition failures. Any of these aborts the whole pass.
#[orrery_derive::orrery_error]
pub enum ComposeError {
    /// A producer failed while being registered.
    #[error("{category} unit '{name}' failed{}: {source}", format_context(.context))]
    Unit {
        category: UnitCategory,
        name: String,
        source: UnitError,
        context: Option<Cow<'static, str>>,
    },

    /// A unit that can never be registered (e.g., a blank name).
    #[error("Invalid unit{}: {message}", format_context(.context))]
    InvalidUnit { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
