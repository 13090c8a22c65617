use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

/// Idempotent schema creation. Runs at every open (server start and seed),
/// so it only ever adds tables that are missing.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY,
            username    TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL,
            role        TEXT NOT NULL DEFAULT 'user'
        );

        CREATE TABLE IF NOT EXISTS reports (
            id          INTEGER PRIMARY KEY,
            title       TEXT NOT NULL,
            description TEXT NOT NULL,
            latitude    REAL NOT NULL,
            longitude   REAL NOT NULL,
            severity    TEXT NOT NULL,
            reporter    TEXT NOT NULL
        );
        ",
    )?;

    info!("Database schema ensured");
    Ok(())
}
