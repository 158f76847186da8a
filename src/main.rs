//! Swatchbook - palette colors and number formatting from the command line.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use swatchbook::app::{self, Command};
use swatchbook::util::Config;
use swatchbook::{clipboard, ui};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "swatchbook")]
#[command(about = "Deterministic palette colors and number formatting", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Copy the result to the clipboard
    #[arg(long)]
    copy: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = File::create(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Swatchbook");
    }

    let config = Config::default();
    let outcome = match app::run(&args.command, &config) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!("Command failed: {}", err);
            eprintln!("Error: {}", err);
            std::process::exit(1);
        },
    };

    if outcome.swatches.is_empty() {
        println!("{}", outcome.text);
    } else {
        ui::write_swatches(&mut io::stdout().lock(), &outcome.swatches)?;
    }

    if args.copy {
        clipboard::copy_to_clipboard(&outcome.text)?;
    }

    if args.log.is_some() {
        tracing::info!("Swatchbook exited");
    }

    Ok(())
}
