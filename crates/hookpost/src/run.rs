//! Linear pipeline: resolved inputs in, one webhook POST out.

use anyhow::Result;
use log::info;

use crate::fact::fetch_fact;
use crate::input::ResolvedInputs;
use crate::payload::build_payload;
use crate::sink::post_message;
use crate::transport::Transport;

#[derive(Debug)]
pub struct Outcome {
    pub attached: bool,
}

/// Fetch a fact if no message was supplied, build the payload, post it.
/// The first failure at any stage aborts; nothing is retried.
pub async fn run(inputs: ResolvedInputs, transport: &dyn Transport) -> Result<Outcome> {
    let message = match inputs.message {
        Some(m) => m,
        None => {
            let fact = fetch_fact(transport).await?;
            info!("Using fetched fact as message");
            fact
        }
    };

    let payload = build_payload(&message, inputs.attachment.as_ref());
    post_message(transport, &inputs.webhook_url, payload).await?;

    Ok(Outcome {
        attached: inputs.attachment.is_some(),
    })
}
