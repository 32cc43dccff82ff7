//! Plugins: installers that register further units on the host.
//!
//! Installers run in the order listed here.

use crate::args::{escape_html, opt_str_arg, str_arg};
use orrery_kernel::host::ConfigHost;
use orrery_kernel::registry::Units;
use orrery_kernel::unit::{self, PluginInstaller, UnitError};
use serde_json::Value;

pub const WORDS_PER_MINUTE: usize = 200;

#[must_use]
pub fn units() -> Units<PluginInstaller> {
    Units::new()
        .with("reading_time", unit::plugin(reading_time))
        .with("external_links", unit::plugin(external_links))
}

/// Installs the `readingTime` filter.
///
/// # Errors
/// Never fails.
pub fn reading_time(host: &mut dyn ConfigHost) -> Result<(), UnitError> {
    host.add_filter(
        "readingTime",
        unit::filter(|value, _| {
            let text = value.as_str().ok_or_else(|| UnitError::InvalidArgument {
                message: "readingTime expects a string".into(),
                context: None,
            })?;
            Ok(Value::String(format!("{} min read", reading_minutes(text))))
        }),
    );
    Ok(())
}

/// Minutes at [`WORDS_PER_MINUTE`], rounded up, never below one. Markup tags are not words.
#[must_use]
pub fn reading_minutes(text: &str) -> usize {
    let words = strip_tags(text).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            },
            c if !in_tag => out.push(c),
            _ => {},
        }
    }
    out
}

/// Installs the `externalLink` shortcode: `{% externalLink url, label %}`.
///
/// # Errors
/// Never fails.
pub fn external_links(host: &mut dyn ConfigHost) -> Result<(), UnitError> {
    host.add_shortcode(
        "externalLink",
        unit::shortcode(|args| {
            let url = escape_html(str_arg(args, 0, "link url")?);
            let label = opt_str_arg(args, 1).map_or_else(|| url.clone(), escape_html);
            Ok(format!(r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{label}</a>"#))
        }),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_minutes_rounds_up_with_a_floor_of_one() {
        assert_eq!(reading_minutes(""), 1);
        assert_eq!(reading_minutes(&"word ".repeat(200)), 1);
        assert_eq!(reading_minutes(&"word ".repeat(201)), 2);
        assert_eq!(reading_minutes(&"word ".repeat(450)), 3);
    }

    #[test]
    fn tags_are_not_counted() {
        let html = format!("<p class=\"lead\">{}</p>", "word ".repeat(200));
        assert_eq!(reading_minutes(&html), 1);
        assert_eq!(strip_tags("<b>bold</b>text").split_whitespace().count(), 2);
    }
}
