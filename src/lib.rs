//! UserAPI - A minimal user CRUD service
//!
//! Maps five HTTP endpoints onto Redis hash operations, persisting each user
//! as a hash at `user:<id>`.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
