//! Migrate command - applies the database schema and exits

use tracing::info;

use crate::infrastructure::database::StorageType;
use crate::infrastructure::logging;

pub async fn run() -> anyhow::Result<()> {
    let config = super::load_config()?;
    logging::init_logging(&config.logging);

    let backend: StorageType = config.storage.backend.parse()?;

    if backend == StorageType::InMemory {
        info!("In-memory storage has no schema, nothing to migrate");
        return Ok(());
    }

    let mut database = crate::open_database(&config.storage).await?;
    database.close().await;

    info!("Migrations applied");

    Ok(())
}
