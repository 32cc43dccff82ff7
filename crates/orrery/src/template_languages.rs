//! Template languages: extra formats the host compiles itself.

use orrery_kernel::registry::Units;
use orrery_kernel::unit::{self, Render, TemplateFactory, TemplateHandler, UnitError};
use serde_json::Value;
use std::iter::Peekable;
use std::str::Chars;
use tracing::trace;

#[must_use]
pub fn units() -> Units<TemplateFactory> {
    Units::new().with("css", unit::template(|| Ok(css())))
}

/// Stylesheets are read, minified once at compile time and emitted as `.css`.
#[must_use]
pub fn css() -> TemplateHandler {
    TemplateHandler::new("css", |source, path| {
        let minified = minify_css(source);
        trace!(
            path = %path.display(),
            before = source.len(),
            after = minified.len(),
            "Minified stylesheet"
        );
        let render: Render =
            Box::new(move |_: &Value| -> Result<String, UnitError> { Ok(minified.clone()) });
        Ok(render)
    })
}

/// Strips `/* */` comments and collapses whitespace, including around `{ } : ; ,`.
///
/// String literals are copied untouched. A `:` inside a selector keeps the whitespace
/// before it, since `nav :hover` and `nav:hover` select different elements.
#[must_use]
pub fn minify_css(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut pending_space = false;

    while let Some(c) = chars.next() {
        match c {
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
                pending_space = true;
            },
            '"' | '\'' => {
                flush_space(&mut out, &mut pending_space);
                out.push(c);
                let mut escaped = false;
                for s in chars.by_ref() {
                    out.push(s);
                    if escaped {
                        escaped = false;
                    } else if s == '\\' {
                        escaped = true;
                    } else if s == c {
                        break;
                    }
                }
            },
            c if c.is_whitespace() => pending_space = true,
            ':' if in_selector(&chars) => {
                flush_space(&mut out, &mut pending_space);
                out.push(':');
            },
            '{' | '}' | ':' | ';' | ',' => {
                pending_space = false;
                if c == '}' && out.ends_with(';') {
                    out.pop();
                }
                out.push(c);
                skip_whitespace(&mut chars);
            },
            c => {
                flush_space(&mut out, &mut pending_space);
                out.push(c);
            },
        }
    }
    out
}

/// Whether the `:` just read belongs to a selector: a `{` follows before any `;` or `}`.
fn in_selector(rest: &Peekable<Chars<'_>>) -> bool {
    rest.clone().find(|c| matches!(c, '{' | ';' | '}')) == Some('{')
}

fn flush_space(out: &mut String, pending: &mut bool) {
    if *pending && !out.is_empty() && !out.ends_with(['{', '}', ':', ';', ',']) {
        out.push(' ');
    }
    *pending = false;
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}
