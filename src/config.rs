use std::path::PathBuf;
use clap::{ArgAction, Parser, Subcommand};

use crate::{catalog::{Catalog, CatalogError}, ui::present::Policy};

#[derive(Debug, Parser)]
#[command(name = "sandwich-club")]
#[command(about = "Browse a club of sandwiches from your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Command>,

  /// Catalog file to read instead of the bundled sandwiches
  #[arg(long, env = "SANDWICH_CLUB_DATA", value_name = "PATH", global = true)]
  pub data: Option<PathBuf>,

  /// Write logs to this file
  #[arg(long, env = "SANDWICH_CLUB_LOG", value_name = "PATH", global = true)]
  pub log_file: Option<PathBuf>,

  /// Verbosity level (can be repeated)
  #[arg(short, long, action = ArgAction::Count, global = true)]
  pub verbose: u8,

  /// Show "Not available" for missing fields instead of hiding them
  #[arg(long, global = true)]
  pub show_absent: bool
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
  /// Print every sandwich name with its index
  List,

  /// Print the details of one sandwich
  Show {
    #[arg(value_name = "INDEX")]
    index: usize
  }
}

impl Cli {
  /// Without a subcommand we take over the terminal
  pub fn is_interactive(&self) -> bool { self.command.is_none() }

  pub fn catalog(&self) -> Result<Catalog, CatalogError> {
    match &self.data {
      Some(path) => Catalog::load(path),
      None => Catalog::bundled()
    }
  }

  pub fn policy(&self) -> Policy {
    if self.show_absent { Policy::show_absent() } else { Policy::default() }
  }
}
