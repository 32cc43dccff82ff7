//! Watch targets: changes under these paths trigger a rebuild.

use orrery_kernel::registry::Units;
use orrery_kernel::unit::{self, PathFactory, PathPattern};
use std::path::Path;

#[must_use]
pub fn units(input: &Path) -> Units<PathFactory> {
    let styles = PathPattern::from(input.join("assets").join("styles"));
    let scripts = PathPattern::from(input.join("assets").join("scripts"));

    Units::new()
        .with("styles", unit::path(move || Ok(styles.clone())))
        .with("scripts", unit::path(move || Ok(scripts.clone())))
}
