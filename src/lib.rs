//! # Tallyman
//!
//! A bookkeeping API server, usable both as a standalone binary and as a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! tallyman = { version = "0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::path::PathBuf;
//! use tallyman::server::{AppState, create_router};
//! use tallyman::store::SqliteStore;
//!
//! let store = SqliteStore::new(&PathBuf::from("./data/tallyman.db")).unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState {
//!     store: Arc::new(store),
//! });
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes the CLI entry point. Disable with `default-features = false`.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod server;
pub mod store;
pub mod types;
