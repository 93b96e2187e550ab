use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use configuration::{Dialect, Settings};
use std::path::PathBuf;

/// The main entry point for the guestbook service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    cli.overrides.apply(&mut settings);
    settings.validate().context("Invalid configuration")?;

    let _log_guard = configuration::init_tracing(&settings.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve => web_server::run_server(settings).await,
        Commands::InitDb => handle_init_db(settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small guestbook: post a name and a comment, read the latest ones back.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve,
    /// Create the comments table if it does not exist, then exit.
    InitDb,
}

/// Command-line values that take precedence over every configuration source.
#[derive(Args)]
struct Overrides {
    /// The SQL dialect of the database behind the connection string.
    #[arg(long, global = true, value_enum)]
    dialect: Option<Dialect>,

    /// The port the HTTP listener binds to.
    #[arg(long, global = true)]
    port: Option<u16>,
}

impl Overrides {
    fn apply(&self, settings: &mut Settings) {
        if let Some(dialect) = self.dialect {
            settings.database.dialect = dialect;
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
    }
}

// ==============================================================================
// Init-DB Command Logic
// ==============================================================================

async fn handle_init_db(settings: Settings) -> anyhow::Result<()> {
    let pool = database::connect(&settings.database)
        .await
        .context("Failed to connect to the database")?;
    database::ensure_schema(&pool)
        .await
        .context("Failed to create the comments table")?;
    tracing::info!(dialect = ?settings.database.dialect, "Comments table is ready.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use configuration::DatabaseSettings;

    #[test]
    fn overrides_are_applied_before_validation() {
        let mut settings = Settings::default();
        settings.database = DatabaseSettings::sqlite_in_memory();
        settings.server.host = "not a host".to_string();
        assert!(settings.validate().is_err());

        let cli = Cli::parse_from(["guestbook", "--dialect", "postgres", "--port", "9000", "serve"]);
        cli.overrides.apply(&mut settings);
        assert_eq!(settings.database.dialect, Dialect::Postgres);
        assert_eq!(settings.server.port, 9000);

        settings.server.host = "127.0.0.1".to_string();
        assert!(settings.validate().is_ok());
    }
}
