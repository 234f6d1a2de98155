//! ori - account CLI
//!
//! Sign up, sign in, and inspect the current session against the hosted
//! identity toolkit and document store. Results are JSON on stdout; logs and
//! errors go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Register
//! ori signup --email ada@example.com --password 'correct horse' \
//!     --confirm-password 'correct horse' --first-name Ada --last-name Lovelace \
//!     --company Analytical --role Founder --user-type startup
//!
//! # Who am I?
//! ori whoami
//! ```

use ori_cli::{App, Cli, CliResult, logger};
use ori_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let compact = cli.compact;

    match run(cli).await {
        Ok(value) => match render(&value, compact) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing response: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("{e}");
            match render(&e.report(), compact) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("Error: {e}"),
            }
            ExitCode::from(e.exit_status())
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    // Reject bad form input before reading config or touching the network
    cli.command.validate()?;

    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting ori v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let session_path = if config.session.persist {
        Some(config.session_path()?)
    } else {
        None
    };
    let federated = cli
        .command
        .federated_credential(&config.identity.federated_provider_id);

    let app = App::build(&config, session_path, federated)?;
    app.run(cli.command).await
}

fn render(value: &Value, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}
