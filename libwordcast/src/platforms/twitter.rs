//! Twitter platform implementation
//!
//! Wraps the egg-mode client: OAuth 1.0a credentials in, status updates out.
//! Authentication verifies the token against the account endpoint and, when an
//! expected account name is configured, checks the verified display name
//! against it.

use async_trait::async_trait;
use egg_mode::tweet::DraftTweet;
use egg_mode::{KeyPair, Token};
use tracing::{debug, info};

use crate::error::{PlatformError, Result};
use crate::platforms::Platform;
use crate::types::StatusUpdate;

/// Twitter's classic status character limit
pub const TWITTER_CHARACTER_LIMIT: usize = 140;

/// The four OAuth 1.0a credential strings
#[derive(Debug, Clone)]
pub struct TwitterCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

impl TwitterCredentials {
    fn is_complete(&self) -> bool {
        !self.consumer_key.is_empty()
            && !self.consumer_secret.is_empty()
            && !self.access_token.is_empty()
            && !self.access_secret.is_empty()
    }

    fn into_token(self) -> Token {
        Token::Access {
            consumer: KeyPair::new(self.consumer_key, self.consumer_secret),
            access: KeyPair::new(self.access_token, self.access_secret),
        }
    }
}

/// Twitter platform client
pub struct TwitterPlatform {
    credentials: TwitterCredentials,
    /// Display name the authenticated account must carry, when configured
    expected_account_name: Option<String>,
    /// Set by a successful `authenticate`
    token: Option<Token>,
}

impl TwitterPlatform {
    pub fn new(credentials: TwitterCredentials, expected_account_name: Option<String>) -> Self {
        Self {
            credentials,
            expected_account_name,
            token: None,
        }
    }
}

#[async_trait]
impl Platform for TwitterPlatform {
    async fn authenticate(&mut self) -> Result<()> {
        if !self.is_configured() {
            return Err(PlatformError::Authentication(
                "Twitter credentials are incomplete".to_string(),
            )
            .into());
        }

        let token = self.credentials.clone().into_token();

        let user = egg_mode::auth::verify_tokens(&token)
            .await
            .map_err(|e| map_twitter_error(e, "verify credentials"))?;

        if let Some(expected) = &self.expected_account_name {
            if &user.name != expected {
                return Err(PlatformError::Authentication(format!(
                    "Authenticated account is '{}', expected '{}'",
                    user.name, expected
                ))
                .into());
            }
        }

        info!("authenticated as @{}", user.screen_name);
        self.token = Some(token);
        Ok(())
    }

    async fn post(&self, status: &StatusUpdate) -> Result<String> {
        let token = self.token.as_ref().ok_or_else(|| {
            PlatformError::Authentication("Not authenticated".to_string())
        })?;

        self.validate_content(&status.text)?;

        let mut draft = DraftTweet::new(status.text.clone());
        if let Some(geotag) = status.geotag {
            draft = draft.coordinates(geotag.latitude, geotag.longitude, true);
        }

        debug!("sending status update ({} chars)", status.text.chars().count());
        let tweet = draft
            .send(token)
            .await
            .map_err(|e| map_twitter_error(e, "post status"))?;

        Ok(tweet.id.to_string())
    }

    fn validate_content(&self, content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(PlatformError::Validation("Content cannot be empty".to_string()).into());
        }

        let char_count = content.chars().count();
        if char_count > TWITTER_CHARACTER_LIMIT {
            return Err(PlatformError::Validation(format!(
                "Content exceeds Twitter's {} character limit (current: {} characters)",
                TWITTER_CHARACTER_LIMIT, char_count
            ))
            .into());
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "twitter"
    }

    fn character_limit(&self) -> Option<usize> {
        Some(TWITTER_CHARACTER_LIMIT)
    }

    fn is_configured(&self) -> bool {
        self.credentials.is_complete()
    }
}

/// Map egg-mode errors to PlatformError
///
/// Twitter's credential-related error codes (32, 89, 99, 135, 215, 226) and
/// 401/403 responses become authentication errors; rate limiting and
/// connection failures become network errors; everything else is a posting
/// failure.
fn map_twitter_error(error: egg_mode::error::Error, context: &str) -> PlatformError {
    use egg_mode::error::Error;

    const AUTH_CODES: [i32; 6] = [32, 89, 99, 135, 215, 226];

    match &error {
        Error::TwitterError(_, errors)
            if errors.errors.iter().any(|e| AUTH_CODES.contains(&e.code)) =>
        {
            PlatformError::Authentication(format!(
                "Twitter {} failed: {}",
                context, error
            ))
        }
        Error::BadStatus(code) if code.as_u16() == 401 || code.as_u16() == 403 => {
            PlatformError::Authentication(format!(
                "Twitter {} failed: HTTP {}",
                context, code
            ))
        }
        Error::RateLimit(reset) => PlatformError::Network(format!(
            "Twitter rate limit hit during {} (resets at {})",
            context, reset
        )),
        Error::TwitterError(_, _) | Error::BadStatus(_) => {
            PlatformError::Posting(format!("Twitter {} failed: {}", context, error))
        }
        _ => PlatformError::Network(format!("Twitter {} failed: {}", context, error)),
    }
}
