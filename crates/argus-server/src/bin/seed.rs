//! Standalone demo-data seeder. Safe to rerun: tables are only populated
//! when empty.

use std::path::PathBuf;

use tracing::info;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "argus=info".into()),
        )
        .init();

    let db_path = std::env::var("ARGUS_DB_PATH").unwrap_or_else(|_| "argus.db".into());
    let db = argus_db::Database::open(&PathBuf::from(&db_path))?;

    argus_db::seed::run(&db)?;

    info!("Seed complete");
    Ok(())
}
