use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod benchmarks;
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use benchmarks::builtin_benchmarks;
#[cfg(feature = "clap")]
pub use cli::ConfigArgs;
pub use settings::{DEFAULT_CURRENCY_SYMBOL, Display, Settings};

/// File looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

/// Prefix for environment overrides, e.g. `KPI_INDUSTRY=saas` or
/// `KPI_DISPLAY__CURRENCY_SYMBOL=$`.
pub const ENV_PREFIX: &str = "KPI";

/// Loads the dashboard settings.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file, and
/// `KPI_*` environment variables. An explicit `path` must exist; the default
/// `dashboard.toml` is optional.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_from(path, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

fn load_from(path: Option<&Path>, env: config::Environment) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(p) => config::File::from(p).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    tracing::debug!(
        industry = %settings.industry,
        overrides = settings.benchmarks.len(),
        "Loaded dashboard settings"
    );

    Ok(settings)
}
