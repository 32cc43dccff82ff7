use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default base name of the site configuration file (`orrery.toml`, `orrery.json`, ...).
pub const DEFAULT_CONFIG: &str = "orrery";

/// Prefix of environment overrides (`ORRERY__PREVIEW__PORT=9000`).
pub const ENV_PREFIX: &str = "ORRERY";

#[orrery_derive::orrery_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration: a base file overlaid with environment variables.
///
/// 1. **Base File**: `path` is required to exist. Without a path, [`DEFAULT_CONFIG`] in the
///    working directory is used when present and defaults apply otherwise. The extension
///    may be omitted; the format is detected from the file found.
/// 2. **Environment Overrides**: variables prefixed `ORRERY__`, nested with double
///    underscores (`ORRERY__DIR__OUTPUT` maps to `dir.output`). Numbers and booleans are
///    parsed (`ORRERY__PREVIEW__PORT=9000`, `ORRERY__QUIET=false`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing or the merged content
/// does not deserialize into `T`.
///
/// # Example
/// ```rust
/// use orrery_kernel::config::load_config;
/// use orrery_domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(Some("site/orrery")).unwrap_or_default();
/// assert_eq!(cfg.preview.port, 8080);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    load_layered(&file, required, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .convert_case(config::Case::Snake)
}

fn load_layered<T>(file: &Path, required: bool, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    info!(required, "Loading config from {}", file.display());

    let config = Config::builder()
        .add_source(File::from(file).required(required))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
