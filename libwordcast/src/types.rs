//! Core types for Wordcast

use serde::{Deserialize, Serialize};

/// One dictionary entry with its used/unused flag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub term: String,
    pub definition: String,
    pub used: bool,
}

impl Entry {
    /// Create a fresh (not yet used) entry
    pub fn new(term: String, definition: String) -> Self {
        Self {
            term,
            definition,
            used: false,
        }
    }
}

/// Fixed geolocation attached to every outgoing status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoTag {
    pub latitude: f64,
    pub longitude: f64,
}

/// A status ready for transmission to a platform
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    pub text: String,
    pub geotag: Option<GeoTag>,
}

impl StatusUpdate {
    pub fn new(text: String) -> Self {
        Self { text, geotag: None }
    }

    pub fn with_geotag(text: String, geotag: GeoTag) -> Self {
        Self {
            text,
            geotag: Some(geotag),
        }
    }
}
