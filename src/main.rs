use anyhow::Result;

use taskpile::config::{Config, StorageBackend};
use taskpile::storage::{MemoryStore, SnapshotStore};
use taskpile::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::default_config_path()?;
        Config::generate_default_config(&path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = Config::load()?;
    logger::init(&config)?;

    match config.storage.backend {
        StorageBackend::Memory => ui::run_app(MemoryStore::new(), &config).await,
        StorageBackend::File => {
            let store = SnapshotStore::open(config.data_file()?)?;
            ui::run_app(store, &config).await
        }
    }
}
