//! Positional template arguments.

use orrery_kernel::unit::UnitError;
use serde_json::Value;

pub(crate) fn str_arg<'a>(args: &'a [Value], index: usize, what: &str) -> Result<&'a str, UnitError> {
    args.get(index).and_then(Value::as_str).ok_or_else(|| UnitError::InvalidArgument {
        message: format!("{what} (argument {index}) must be a string").into(),
        context: None,
    })
}

pub(crate) fn opt_str_arg(args: &[Value], index: usize) -> Option<&str> {
    args.get(index).and_then(Value::as_str).filter(|s| !s.is_empty())
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
