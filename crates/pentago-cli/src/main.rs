//! Pentago hot-seat game for the terminal.

use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod session;

use commands::Command;
use config::CliConfig;
use session::{Reply, Session};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so the board owns stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = CliConfig::from_env()?;
    info!(
        black = %config.black_name,
        white = %config.white_name,
        "Starting Pentago..."
    );

    let mut session = Session::new(&config);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", session.intro())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line
            .parse::<Command>()
            .and_then(|command| session.handle(command))
        {
            Ok(Reply::Text(text)) => writeln!(stdout, "{}", text)?,
            Ok(Reply::Quit) => break,
            Err(e) => {
                warn!(input = %line.trim(), "rejected: {}", e);
                writeln!(stdout, "Error: {}", e)?;
            }
        }
    }

    info!(result = %session.status(), "Session ended");
    Ok(())
}
