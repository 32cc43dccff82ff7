//! Shortcodes: template callables that return markup.

use crate::args::{escape_html, opt_str_arg, str_arg};
use chrono::{Datelike, Local};
use orrery_kernel::registry::Units;
use orrery_kernel::unit::{self, Shortcode, UnitError};
use serde_json::Value;

#[must_use]
pub fn units() -> Units<Shortcode> {
    Units::new().with("year", unit::shortcode(year)).with("icon", unit::shortcode(icon))
}

/// The current year, for copyright lines.
///
/// # Errors
/// Never fails.
pub fn year(_args: &[Value]) -> Result<String, UnitError> {
    Ok(Local::now().year().to_string())
}

/// `{% icon "star", "large" %}` references a symbol of the inline SVG sprite.
///
/// # Errors
/// [`UnitError::InvalidArgument`] without an icon name.
pub fn icon(args: &[Value]) -> Result<String, UnitError> {
    let name = escape_html(str_arg(args, 0, "icon name")?);
    let class = match opt_str_arg(args, 1) {
        Some(extra) => format!("icon icon-{name} {}", escape_html(extra)),
        None => format!("icon icon-{name}"),
    };

    Ok(format!(
        r##"<svg class="{class}" aria-hidden="true" focusable="false"><use href="#icon-{name}"></use></svg>"##
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn icon_references_the_sprite() -> Result<(), UnitError> {
        assert_eq!(
            icon(&[json!("star")])?,
            r##"<svg class="icon icon-star" aria-hidden="true" focusable="false"><use href="#icon-star"></use></svg>"##
        );
        assert!(icon(&[json!("rss"), json!("large")])?.contains(r#"class="icon icon-rss large""#));
        assert!(icon(&[]).is_err());
        Ok(())
    }

    #[test]
    fn year_is_four_digits() -> Result<(), UnitError> {
        let year = year(&[])?;
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
        Ok(())
    }
}
