//! Resolves the three inputs (webhook URL, message, attachment) from flags,
//! environment, and interactive prompts, in that priority order. Everything
//! is validated and loaded here, before any network activity.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::cli::Cli;
use crate::error::InputError;

pub const WEBHOOK_ENV_VAR: &str = "DISCORD_WEBHOOK_URL";

/// Console seam so resolution can be driven by scripted answers in tests.
pub trait Prompter {
    fn prompt(&mut self, label: &str) -> io::Result<String>;
}

/// Reads one trimmed line from stdin per prompt.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        print!("{label}");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// An attachment fully loaded into memory, with its declared content type
/// guessed from the filename extension.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn load(path: &Path) -> Result<Self, InputError> {
        if !path.is_file() {
            return Err(InputError::AttachmentNotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path).map_err(|source| InputError::AttachmentUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("attachment")
            .to_string();
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        debug!(
            "Loaded attachment {} ({} bytes, {})",
            file_name,
            bytes.len(),
            content_type
        );
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

#[derive(Debug)]
pub struct ResolvedInputs {
    pub webhook_url: String,
    /// `None` means no explicit message anywhere; the caller fetches a fact.
    pub message: Option<String>,
    pub attachment: Option<Attachment>,
}

/// Resolve all inputs. `env_webhook` is the value of [`WEBHOOK_ENV_VAR`],
/// passed in so tests do not touch the process environment.
pub fn resolve(
    cli: &Cli,
    env_webhook: Option<String>,
    prompter: &mut dyn Prompter,
) -> Result<ResolvedInputs, InputError> {
    let webhook_url = match non_empty(cli.webhook.clone()).or_else(|| non_empty(env_webhook)) {
        Some(url) => url,
        None => {
            let answer = prompter.prompt("Enter webhook URL: ")?;
            non_empty(Some(answer)).ok_or(InputError::MissingWebhook)?
        }
    };

    // An explicit --message (even "") passes through unchanged; only a blank
    // interactive answer defers to the fact fetch.
    let message = match &cli.message {
        Some(m) => Some(m.clone()),
        None => {
            let answer = prompter.prompt("Enter message (leave blank to fetch a fun fact): ")?;
            non_empty(Some(answer))
        }
    };

    let attachment_path: Option<PathBuf> = match &cli.attachment {
        Some(p) => Some(p.clone()),
        None => {
            let answer =
                prompter.prompt("Attachment file path (optional, press Enter to skip): ")?;
            non_empty(Some(answer)).map(PathBuf::from)
        }
    };

    let attachment = attachment_path
        .map(|path| Attachment::load(&path))
        .transpose()?;

    Ok(ResolvedInputs {
        webhook_url,
        message,
        attachment,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
