pub mod api;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod model;
pub mod routes;

pub use config::Config;
pub use db::Store;
pub use error::{ApiError, ConstraintKind, StoreError};
