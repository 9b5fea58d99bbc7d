//! Error taxonomy for the three stages that can fail: input resolution,
//! the fun-fact fetch, and the webhook POST.

use std::path::PathBuf;
use thiserror::Error;

/// Underlying HTTP client failure (connect error, timeout, bad URL).
#[derive(Error, Debug)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Problems with user-supplied inputs, caught before any network call.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Webhook URL is required")]
    MissingWebhook,

    #[error("Attachment not found: {}", .0.display())]
    AttachmentNotFound(PathBuf),

    #[error("Failed to read attachment {}: {source}", .path.display())]
    AttachmentUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    Prompt(#[from] std::io::Error),
}

/// The fun-fact API call failed. No retries; the hint tells the user how
/// to proceed without the API.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch a fun fact ({0}). Try again or pass --message.")]
    Transport(TransportError),

    #[error("Fact API returned status {0}. Try again or pass --message.")]
    Status(u16),

    #[error("Fact API response was not valid JSON. Try again or pass --message.")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Fact API response missing 'text' field. Try again or pass --message.")]
    MissingText,
}

/// The webhook POST failed, either below HTTP or with a rejecting status.
#[derive(Error, Debug)]
pub enum PostError {
    #[error("Sending webhook request failed: {0}")]
    Transport(TransportError),

    #[error("Discord webhook returned {0}")]
    Status(u16),
}
