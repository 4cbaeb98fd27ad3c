use std::{fs::File, io, sync::Mutex};
use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Cli;

fn level(verbose: u8) -> &'static str {
  match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace"
  }
}

/// Installs the global subscriber. `RUST_LOG` overrides `-v`.
///
/// The interactive UI owns the terminal, so there it only logs to `--log-file`.
pub fn init(cli: &Cli) -> Result<()> {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(format!("sandwich_club={}", level(cli.verbose))));

  let installed = match (&cli.log_file, cli.is_interactive()) {
    (Some(path), _) => {
      let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
    },
    (None, false) => tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(io::stderr)
      .try_init(),
    (None, true) => return Ok(())
  };

  installed.map_err(|e| anyhow!("failed to install logger: {}", e))
}
