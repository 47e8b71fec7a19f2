use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::ConnectOptions;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};

/// Opens the single connection used for the whole interactive session.
///
/// No default schema is selected: the configured database may not exist yet.
/// `ensure_schema` creates it and makes it the active one. A failure here is
/// fatal for the caller; there is no retry.
pub async fn connect(settings: &DatabaseSettings) -> Result<MySqlConnection, DbError> {
    let options = MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password);

    let conn = options.connect().await.map_err(DbError::ConnectionError)?;

    tracing::info!(
        host = %settings.host,
        port = settings.port,
        user = %settings.user,
        "Connected to MySQL."
    );
    Ok(conn)
}
