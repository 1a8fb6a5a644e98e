//! Wordcast - post dictionary words, one at a time
//!
//! This library provides the core functionality for posting a
//! previously-unused (term, definition) pair from a plain-text dictionary to a
//! social-media account, cycling through the whole dictionary before any entry
//! repeats.

pub mod config;
pub mod db;
pub mod error;
pub mod lexicon;
pub mod logging;
pub mod platforms;
pub mod poster;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use db::UsageStore;
pub use error::{Result, WordcastError};
pub use poster::WordPoster;
pub use types::{Entry, GeoTag, StatusUpdate};
