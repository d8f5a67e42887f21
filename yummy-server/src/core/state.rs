use shared::error::{AppError, AppResult};

use crate::catalog::Catalog;
use crate::core::Config;
use crate::db::Store;

/// Server state - shared handles for all services
///
/// Cloning is cheap: the store holds its database behind an `Arc` and the
/// catalog holds a store handle. The state is injected into every handler
/// through axum's `State` extractor; nothing reaches the database through
/// ambient globals.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration (immutable)
    pub config: Config,
    /// Embedded record store
    pub store: Store,
    /// Catalog service over the store
    pub catalog: Catalog,
}

impl ServerState {
    /// Build state from an already-opened store
    pub fn new(config: Config, store: Store) -> Self {
        let catalog = Catalog::new(store.clone());
        Self {
            config,
            store,
            catalog,
        }
    }

    /// Initialize state for the configured working directory
    ///
    /// Creates the directory structure and opens (or creates) the
    /// database file.
    pub fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.db_path();
        let store = Store::open(&db_path)
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        tracing::info!(path = %db_path.display(), "Database opened");

        Ok(Self::new(config.clone(), store))
    }

    /// Initialize state with an in-memory store (tests, ephemeral runs)
    pub fn in_memory(config: Config) -> AppResult<Self> {
        let store = Store::open_in_memory()
            .map_err(|e| AppError::database(format!("Failed to open in-memory store: {e}")))?;
        Ok(Self::new(config, store))
    }
}
