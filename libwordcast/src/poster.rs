//! Posting a selected entry
//!
//! `WordPoster` turns a (term, definition) pair into a status update: the two
//! are joined with a space, cut down to the platform's character limit, tagged
//! with the configured geolocation and handed to the platform. No retry; a
//! failed post surfaces as-is.

use tracing::info;

use crate::error::Result;
use crate::platforms::Platform;
use crate::types::{GeoTag, StatusUpdate};

/// Fallback status length when the platform reports no hard limit
pub const DEFAULT_CHARACTER_LIMIT: usize = 140;

/// Truncate to at most `max_chars` characters, never splitting a code point
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub struct WordPoster {
    platform: Box<dyn Platform>,
    geotag: GeoTag,
}

impl WordPoster {
    pub fn new(platform: Box<dyn Platform>, geotag: GeoTag) -> Self {
        Self { platform, geotag }
    }

    /// Render `"<term> <definition>"`, truncated to the platform limit
    pub fn compose(&self, term: &str, definition: &str) -> String {
        let full = format!("{} {}", term, definition);
        let limit = self
            .platform
            .character_limit()
            .unwrap_or(DEFAULT_CHARACTER_LIMIT);
        truncate_chars(&full, limit).to_string()
    }

    /// Post one entry; returns the platform's post id
    pub async fn post_entry(&self, term: &str, definition: &str) -> Result<String> {
        let text = self.compose(term, definition);
        let status = StatusUpdate::with_geotag(text, self.geotag);

        info!(platform = self.platform.name(), term, "posting entry");
        let post_id = self.platform.post(&status).await?;
        info!(post_id = %post_id, "entry posted");

        Ok(post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platforms::mock::{MockConfig, MockPlatform};

    const LONDON: GeoTag = GeoTag {
        latitude: 51.5171,
        longitude: -0.1062,
    };

    async fn authenticated_mock(name: &str) -> MockPlatform {
        let mut platform = MockPlatform::success(name);
        platform.authenticate().await.unwrap();
        platform
    }

    /// Mock plus a handle onto the statuses it records
    async fn recording_mock(
        name: &str,
    ) -> (MockPlatform, std::sync::Arc<std::sync::Mutex<Vec<StatusUpdate>>>) {
        let config = MockConfig {
            name: name.to_string(),
            ..Default::default()
        };
        let statuses = config.posted_statuses.clone();
        let mut platform = MockPlatform::new(config);
        platform.authenticate().await.unwrap();
        (platform, statuses)
    }

    #[test]
    fn test_truncate_chars_short_text_unchanged() {
        assert_eq!(truncate_chars("hello", 140), "hello");
    }

    #[test]
    fn test_truncate_chars_cuts_to_limit() {
        let text = "x".repeat(200);
        assert_eq!(truncate_chars(&text, 140).chars().count(), 140);
    }

    #[test]
    fn test_truncate_chars_counts_characters_not_bytes() {
        // Each 'é' is two bytes; the cut must land on a character boundary.
        let text = "é".repeat(150);
        let cut = truncate_chars(&text, 140);
        assert_eq!(cut.chars().count(), 140);
        assert_eq!(cut.len(), 280);
    }

    #[tokio::test]
    async fn test_compose_short_pairing_unmodified() {
        let platform = authenticated_mock("twitter").await;
        let poster = WordPoster::new(Box::new(platform), LONDON);

        let text = poster.compose("Foo.", "A silly word.");
        assert_eq!(text, "Foo. A silly word.");
    }

    #[tokio::test]
    async fn test_compose_long_pairing_truncated_to_140() {
        let platform = authenticated_mock("twitter").await;
        let poster = WordPoster::new(Box::new(platform), LONDON);

        let definition = "A word with an extremely long-winded definition. ".repeat(5);
        let text = poster.compose("Foo.", &definition);

        assert_eq!(text.chars().count(), 140);
        let full = format!("Foo. {}", definition);
        assert!(full.starts_with(&text));
    }

    #[tokio::test]
    async fn test_compose_honors_platform_limit() {
        let mut platform = MockPlatform::with_limit("twitter", 20);
        platform.authenticate().await.unwrap();
        let poster = WordPoster::new(Box::new(platform), LONDON);

        let text = poster.compose("Foo.", "A definition that runs well past twenty characters.");
        assert_eq!(text.chars().count(), 20);
    }

    #[tokio::test]
    async fn test_post_entry_sends_truncated_text_with_geotag() {
        let (platform, statuses) = recording_mock("twitter").await;
        let poster = WordPoster::new(Box::new(platform), LONDON);

        let definition = "Definitely too long for a single status update. ".repeat(4);
        poster.post_entry("Foo.", &definition).await.unwrap();

        let posted = statuses.lock().unwrap();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].text.chars().count(), 140);
        assert_eq!(posted[0].geotag, Some(LONDON));
    }

    #[tokio::test]
    async fn test_post_entry_short_text_posted_unmodified() {
        let (platform, statuses) = recording_mock("twitter").await;
        let poster = WordPoster::new(Box::new(platform), LONDON);

        poster.post_entry("Foo.", "A silly word.").await.unwrap();

        let posted = statuses.lock().unwrap();
        assert_eq!(posted[0].text, "Foo. A silly word.");
    }

    #[tokio::test]
    async fn test_post_entry_propagates_platform_failure() {
        let mut platform = MockPlatform::post_failure("twitter", "Request rejected");
        platform.authenticate().await.unwrap();
        let poster = WordPoster::new(Box::new(platform), LONDON);

        let result = poster.post_entry("Foo.", "A silly word.").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Request rejected"));
    }
}
