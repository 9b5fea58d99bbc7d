use clap::Parser;
use std::path::PathBuf;

/// Hookpost – post a message to a Discord webhook
///
/// If no message is given, a random fun fact is fetched and posted instead.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Message to post. If omitted, you are prompted; a blank prompt fetches a fun fact.
    #[arg(short, long)]
    pub message: Option<String>,

    /// Discord webhook URL. Falls back to DISCORD_WEBHOOK_URL, then a prompt.
    #[arg(short, long, value_name = "URL")]
    pub webhook: Option<String>,

    /// Optional file to attach
    #[arg(short, long, value_name = "FILE")]
    pub attachment: Option<PathBuf>,
}
