use log::debug;

use crate::error::PostError;
use crate::payload::Payload;
use crate::transport::{Request, Transport};

/// POST the payload to the webhook. Discord answers 204 for plain JSON
/// posts and 200 for multipart posts; anything else is a failure.
pub async fn post_message(
    transport: &dyn Transport,
    webhook_url: &str,
    payload: Payload,
) -> Result<(), PostError> {
    debug!(
        "Posting {} bytes ({}) to webhook",
        payload.body.len(),
        payload.content_type
    );
    let response = transport
        .send(Request::post(webhook_url, payload.content_type, payload.body))
        .await
        .map_err(PostError::Transport)?;

    match response.status {
        200 | 204 => Ok(()),
        status => Err(PostError::Status(status)),
    }
}
