//! Platform abstraction and implementations
//!
//! A platform authenticates against a social-media service and transmits
//! finished status updates. The posting flow only ever sees this trait, so
//! tests run against [`mock::MockPlatform`] without touching the network.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::StatusUpdate;

pub mod twitter;

// Mock platform is available for all builds (not just tests) to support
// integration tests.
pub mod mock;

/// Unified interface over a social-media posting service
#[async_trait]
pub trait Platform: Send + Sync {
    /// Authenticate with the platform.
    ///
    /// Must be called before posting. Returns
    /// `PlatformError::Authentication` when the credentials are rejected.
    async fn authenticate(&mut self) -> Result<()>;

    /// Transmit a status update and return the platform-specific post id.
    async fn post(&self, status: &StatusUpdate) -> Result<String>;

    /// Check content against platform rules (emptiness, character limit)
    fn validate_content(&self, content: &str) -> Result<()>;

    /// Lowercase platform identifier (e.g. "twitter")
    fn name(&self) -> &str;

    /// Maximum characters per status, or `None` when the platform has no
    /// hard limit
    fn character_limit(&self) -> Option<usize>;

    /// Whether the platform has all the configuration it needs to
    /// authenticate
    fn is_configured(&self) -> bool;
}
