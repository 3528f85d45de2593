//! Voyagen backend: validated CRUD over users, persisted in PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, StoreError};
pub use migration::{ensure_database_exists, ensure_tables};
pub use model::{IdScheme, UserId};
pub use routes::{app_router, common_routes, user_routes};
pub use service::UserService;
pub use state::AppState;
pub use store::{open_store, MemoryUserStore, PgUserStore, UserStore};
