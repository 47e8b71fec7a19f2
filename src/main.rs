use anyhow::Context;
use console::{Menu, schema};
use database::{DbRepository, connect};
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_DIRECTORY: &str = "logs";
const LOG_FILE_PREFIX: &str = "mercado.log";

/// The main entry point for the market management console.
///
/// Startup order: settings, logging, connection, schema, menu. The connection
/// is opened once here and closed once when the menu returns, whichever way
/// it returns.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Settings first: loading them also reads `.env`, which may set RUST_LOG.
    let configuration::LoadedConfig { settings, env_file } =
        configuration::load_config().context("Failed to load the database settings")?;
    let _log_guard = init_tracing()?;
    match &env_file {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded .env file."),
        None => tracing::debug!("No .env file found, using the process environment."),
    }
    tracing::info!(?settings, "Configuration loaded.");

    let conn = connect(&settings)
        .await
        .inspect_err(|e| {
            tracing::error!(error = ?e, "Startup aborted, no database connection.");
        })
        .context("Failed to connect to MySQL")?;
    println!("MySQL connection established successfully.");

    let (repo, session) = run_session(DbRepository::new(conn), &settings.name).await;
    if let Err(e) = repo.close().await {
        tracing::warn!(error = ?e, "Failed to close the database connection cleanly.");
    }

    session.context("Console I/O failed")?;
    tracing::info!("Session ended.");
    Ok(())
}

/// Initializes the schema and runs the menu. The repository is always handed
/// back so the caller can close it, even when the console fails.
async fn run_session(
    mut repo: DbRepository,
    database_name: &str,
) -> (DbRepository, io::Result<()>) {
    let mut stdout = io::stdout();
    if let Err(e) = schema::initialize(&mut repo, &mut stdout, database_name).await {
        return (repo, Err(e));
    }

    let mut menu = Menu::new(repo, io::stdin().lock(), stdout);
    let result = menu.run().await;
    let (repo, _) = menu.into_parts();
    (repo, result)
}

/// Sends `tracing` output to a daily rolling file under `logs/`. The returned
/// guard flushes the background writer when dropped at the end of `main`.
/// An unwritable log directory is a startup error.
fn init_tracing() -> anyhow::Result<WorkerGuard> {
    let file_appender = log_file_appender(Path::new(LOG_DIRECTORY))?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}

fn log_file_appender(directory: &Path) -> anyhow::Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(directory)
        .with_context(|| format!("Failed to open the log directory '{}'", directory.display()))
}
