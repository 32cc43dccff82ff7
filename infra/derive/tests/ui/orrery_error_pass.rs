use orrery_derive::orrery_error;
use std::borrow::Cow;

#[orrery_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, DemoError> {
    let text = std::fs::read_to_string("missing.txt").context("Reading demo file")?;
    if text.is_empty() {
        return Err("empty".into());
    }
    Ok(text)
}

fn main() {
    let _ = read();
}
