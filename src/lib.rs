//! # Scriptshelf
//!
//! A catalog of small code snippets with search, favorites, a mock sign-in
//! and an owner dashboard, usable both as a standalone binary and as a
//! library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! scriptshelf = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use scriptshelf::app::Shelf;
//! use scriptshelf::config::AppConfig;
//! use scriptshelf::store::SqliteStore;
//! use scriptshelf::types::CategoryFilter;
//!
//! let config = AppConfig::load("./data").unwrap();
//! let store = SqliteStore::new(config.db_path()).unwrap();
//! let mut shelf = Shelf::open(store, config).unwrap();
//!
//! shelf.set_filter(CategoryFilter::Category("Developer".to_string()));
//! for script in shelf.visible_scripts() {
//!     println!("{}", script.title);
//! }
//! let html = shelf.render_page();
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes the CLI module and the system clipboard.
//!   Disable with `default-features = false`.

pub mod app;
pub mod auth;
pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod render;
pub mod store;
pub mod types;
