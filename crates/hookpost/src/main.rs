use clap::Parser;
use tokio::runtime::Runtime;

use hookpost::cli::Cli;
use hookpost::input::{self, StdinPrompter, WEBHOOK_ENV_VAR};
use hookpost::run::run;
use hookpost::transport::HttpTransport;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Resolve and validate everything up front; input problems exit 1
    // before a single request goes out.
    let env_webhook = std::env::var(WEBHOOK_ENV_VAR).ok();
    let mut prompter = StdinPrompter;
    let inputs = match input::resolve(&cli, env_webhook, &mut prompter) {
        Ok(inputs) => inputs,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let transport = HttpTransport::new()?;

    let rt = Runtime::new()?;
    let outcome = rt.block_on(run(inputs, &transport))?;

    println!(
        "{}",
        if outcome.attached {
            "Posted to Discord with attachment."
        } else {
            "Posted to Discord."
        }
    );
    Ok(())
}
