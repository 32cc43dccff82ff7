use orrery_derive::orrery_error;
use std::borrow::Cow;

#[orrery_error]
pub enum LoadError {
    #[error("Unit '{name}' failed{}: {source}", format_context(.context))]
    Unit { name: String, source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid unit{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn load(name: &str) -> Result<(), LoadError> {
    std::fs::metadata(name)
        .map(|_| ())
        .map_err(|source| LoadError::Unit { name: name.to_owned(), source, context: None })
}

fn main() {
    let err = load("missing").context("Loading units");
    assert!(err.is_err());
}
