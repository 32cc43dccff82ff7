//! Composition driver.
//!
//! Registers every unit of a [`UnitRegistry`] with a [`ConfigHost`] in the fixed
//! category order, applies the reporting and preview settings, and returns the
//! [`Settings`] record. Within a category, units are registered in insertion order.
//! The first failing producer aborts the pass; nothing after it is registered.

mod error;

pub use crate::compose::error::{ComposeError, ComposeErrorExt};

use crate::host::ConfigHost;
use crate::registry::{NamedUnit, UnitRegistry, Units};
use crate::trace::StartupTrace;
use crate::unit::UnitError;
use orrery_domain::category::UnitCategory;
use orrery_domain::config::SiteConfig;
use orrery_domain::settings::Settings;
use tracing::{debug, info};

/// Label of the outermost startup trace group.
pub const ROOT_GROUP: &str = "orrery";

/// Runs one composition pass.
///
/// The registry is consumed: producers are invoked or handed to the host exactly once.
///
/// # Errors
/// * [`ComposeError::InvalidUnit`] for a unit with a blank name.
/// * [`ComposeError::Unit`] when a plugin installer, path factory or template factory
///   fails. The error names the category and unit.
pub fn compose<H: ConfigHost>(
    registry: UnitRegistry,
    host: &mut H,
    config: &SiteConfig,
    trace: &mut dyn StartupTrace,
) -> Result<Settings, ComposeError> {
    info!(
        collections = registry.collections.len(),
        plugins = registry.plugins.len(),
        template_languages = registry.template_languages.len(),
        "Composing site configuration"
    );

    trace.enter_group(ROOT_GROUP);
    let registered = register_units(registry, host, trace);
    trace.exit_group();
    let languages = registered?;

    host.set_quiet_mode(config.quiet);
    host.add_reporter(config.reporting);
    host.set_preview_server(config.preview.options());

    let mut template_formats: Vec<String> = Vec::new();
    for format in config.template_formats.iter().chain(&languages) {
        if !template_formats.contains(format) {
            template_formats.push(format.clone());
        }
    }

    info!(formats = ?template_formats, "Site configuration composed");
    Ok(Settings { dir: config.dir.clone(), template_formats })
}

/// Registers all seven categories and returns the template-language names.
fn register_units<H: ConfigHost>(
    registry: UnitRegistry,
    host: &mut H,
    trace: &mut dyn StartupTrace,
) -> Result<Vec<String>, ComposeError> {
    let UnitRegistry {
        collections,
        plugins,
        shortcodes,
        filters,
        passthroughs,
        watch_targets,
        template_languages,
    } = registry;

    grouped(trace, UnitCategory::Collections, |trace| {
        for entry in announce(UnitCategory::Collections, collections) {
            let NamedUnit { name, unit } = validated(UnitCategory::Collections, entry)?;
            trace.log(&name);
            host.add_collection(&name, unit);
        }
        Ok(())
    })?;

    grouped(trace, UnitCategory::Plugins, |trace| {
        for entry in announce(UnitCategory::Plugins, plugins) {
            let NamedUnit { name, unit } = validated(UnitCategory::Plugins, entry)?;
            trace.log(&name);
            unit(&mut *host as &mut dyn ConfigHost)
                .map_err(|e| unit_failure(UnitCategory::Plugins, &name, e))?;
        }
        Ok(())
    })?;

    for entry in announce(UnitCategory::Shortcodes, shortcodes) {
        let NamedUnit { name, unit } = validated(UnitCategory::Shortcodes, entry)?;
        host.add_shortcode(&name, unit);
    }

    for entry in announce(UnitCategory::Filters, filters) {
        let NamedUnit { name, unit } = validated(UnitCategory::Filters, entry)?;
        host.add_filter(&name, unit);
    }

    for entry in announce(UnitCategory::Passthroughs, passthroughs) {
        let NamedUnit { name, unit } = validated(UnitCategory::Passthroughs, entry)?;
        let source = unit().map_err(|e| unit_failure(UnitCategory::Passthroughs, &name, e))?;
        host.add_passthrough_copy(source);
    }

    for entry in announce(UnitCategory::WatchTargets, watch_targets) {
        let NamedUnit { name, unit } = validated(UnitCategory::WatchTargets, entry)?;
        let target = unit().map_err(|e| unit_failure(UnitCategory::WatchTargets, &name, e))?;
        host.add_watch_target(target);
    }

    let mut languages = Vec::with_capacity(template_languages.len());
    for entry in announce(UnitCategory::TemplateLanguages, template_languages) {
        let NamedUnit { name, unit } = validated(UnitCategory::TemplateLanguages, entry)?;
        // The factory runs first so a failure leaves no format without a handler.
        let handler =
            unit().map_err(|e| unit_failure(UnitCategory::TemplateLanguages, &name, e))?;
        host.add_template_format(&name);
        host.add_extension(&name, handler);
        languages.push(name);
    }

    Ok(languages)
}

/// Runs `body` inside a trace group that is closed on both exit paths.
fn grouped<F>(
    trace: &mut dyn StartupTrace,
    category: UnitCategory,
    body: F,
) -> Result<(), ComposeError>
where
    F: FnOnce(&mut dyn StartupTrace) -> Result<(), ComposeError>,
{
    trace.enter_group(category.label());
    let result = body(trace);
    trace.exit_group();
    result
}

fn announce<T>(category: UnitCategory, units: Units<T>) -> Units<T> {
    debug!(%category, count = units.len(), "Registering units");
    units
}

/// Rejects a blank name before the unit reaches the host.
fn validated<T>(category: UnitCategory, unit: NamedUnit<T>) -> Result<NamedUnit<T>, ComposeError> {
    if unit.name.trim().is_empty() {
        return Err(ComposeError::InvalidUnit {
            message: format!("{category} unit with a blank name").into(),
            context: None,
        });
    }
    Ok(unit)
}

fn unit_failure(category: UnitCategory, name: &str, source: UnitError) -> ComposeError {
    ComposeError::Unit { category, name: name.to_owned(), source, context: None }
}
