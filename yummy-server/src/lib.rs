//! Yummy Server - restaurant ordering and reservation backend
//!
//! # Architecture overview
//!
//! Client-submitted intent (cart lines, reservation fields, ratings) is
//! validated against authoritative state, persisted as immutable-at-creation
//! records, and governed afterwards by explicit status lifecycles.
//!
//! # Module structure
//!
//! ```text
//! yummy-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── auth/          # Identity extraction (gateway-forwarded claims)
//! ├── api/           # HTTP routes and handlers
//! ├── catalog/       # Authoritative menu catalog
//! ├── orders/        # Order assembly, lifecycle, money arithmetic
//! ├── reservations/  # Reservation validation and lifecycle
//! ├── reviews/       # Review validation and aggregation
//! ├── db/            # Embedded record store (redb)
//! └── utils/         # Logging, text validation
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod core;
pub mod db;
pub mod orders;
pub mod reservations;
pub mod reviews;
pub mod utils;

// Re-export public types
pub use auth::CurrentUser;
pub use catalog::Catalog;
pub use core::{Config, Server, ServerState, build_app};
pub use db::{Store, StoreError};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
 __  __
 \ \/ /_  ______ ___  ____ ___  __  __
  \  / / / / __ `__ \/ __ `__ \/ / / /
  / / /_/ / / / / / / / / / / / /_/ /
 /_/\__,_/_/ /_/ /_/_/ /_/ /_/\__, /
                             /____/
    "#
    );
}
