use crate::error::ConfigError;
use config::{Environment, File, FileFormat, Source};
use std::env;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{DatabaseSettings, Dialect, LoggingSettings, ServerSettings, Settings};

/// The file looked up when no explicit path is given. Optional.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
/// Prefix for environment overrides, e.g. `GUESTBOOK__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "GUESTBOOK";
/// The connection string variable. Overrides `database.url`.
pub const DSN_VAR: &str = "DSN";

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file,
/// `GUESTBOOK__*` environment variables, and finally `DSN`. A `.env` file in
/// the working directory is loaded first if present.
///
/// The result is not validated; callers apply their own overrides and then
/// call `Settings::validate`.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();

    let file = match path {
        Some(path) => File::from(path).format(FileFormat::Toml).required(true),
        None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
    };
    let environment = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true);

    from_sources(file, environment, env::var(DSN_VAR).ok())
}

/// Builds `Settings` from explicit sources. Does not validate.
pub fn from_sources<F>(
    file: F,
    environment: Environment,
    dsn: Option<String>,
) -> Result<Settings, ConfigError>
where
    F: Source + Send + Sync + 'static,
{
    let builder = config::Config::builder()
        .add_source(file)
        .add_source(environment)
        .set_override_option("database.url", dsn.filter(|d| !d.is_empty()))?
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    Ok(settings)
}
