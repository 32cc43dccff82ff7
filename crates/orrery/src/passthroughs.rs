//! Passthrough copies: copied verbatim to the output directory.

use orrery_kernel::registry::Units;
use orrery_kernel::unit::{self, PathFactory, PathPattern};
use std::path::Path;

#[must_use]
pub fn units(input: &Path) -> Units<PathFactory> {
    let fonts = PathPattern::from(input.join("assets").join("fonts"));
    let images = PathPattern::from(input.join("assets").join("images"));
    let favicon = PathPattern::from(input.join("favicon.ico"));

    Units::new()
        .with("fonts", unit::path(move || Ok(fonts.clone())))
        .with("images", unit::path(move || Ok(images.clone())))
        .with("favicon", unit::path(move || Ok(favicon.clone())))
}
