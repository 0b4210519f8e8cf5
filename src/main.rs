mod cli_messages;
mod config;
mod consts;
mod data;
mod events;
mod logging;
mod session;
mod simulation;
mod ui;

use crate::cli_messages::print_error;
use crate::data::Dataset;
use crate::session::{run_headless_mode, run_tui_mode, setup::rng_from_seed, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Launch the research dashboard
    Start {
        /// Seed for the mock-data generator; random when omitted
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Log events to the console instead of opening the TUI
        #[arg(long)]
        headless: bool,

        /// Disable the dashboard background color
        #[arg(long)]
        no_background_color: bool,
    },
    /// Print a freshly generated dataset as JSON
    Sample {
        /// Seed for the mock-data generator; random when omitted
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            seed,
            headless,
            no_background_color,
        } => {
            let session = match setup_session(seed) {
                Ok(session) => session,
                Err(error) => {
                    print_error("Não foi possível preparar a sessão", Some(&error.to_string()));
                    return Err(error.into());
                }
            };
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background_color).await
            }
        }
        Command::Sample { seed, pretty } => {
            let dataset = Dataset::generate(&mut rng_from_seed(seed));
            let json = if pretty {
                serde_json::to_string_pretty(&dataset)?
            } else {
                serde_json::to_string(&dataset)?
            };
            println!("{}", json);
            Ok(())
        }
    }
}
