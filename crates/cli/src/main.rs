//! usb-status CLI: decode libusb result codes and transfer statuses.

use anyhow::Result;
use clap::{Parser, Subcommand};
use usb_status_core::lookup::{self, CodeEntry, Domain};
use usb_status_core::ErrorCode;

#[derive(Parser)]
#[command(
    name = "usb-status",
    version,
    about = "Decode libusb result codes and transfer statuses"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a libusb function return value.
    Describe {
        /// Numeric value (e.g. -9) or name (e.g. LIBUSB_ERROR_PIPE, pipe).
        #[arg(allow_hyphen_values = true)]
        code: String,
    },
    /// Translate a transfer completion status.
    Status {
        /// Numeric value (0-255) or name (e.g. LIBUSB_TRANSFER_STALL, stall).
        #[arg(allow_hyphen_values = true)]
        code: String,
    },
    /// List all known codes.
    List {
        /// List transfer statuses instead of result codes.
        #[arg(long)]
        transfer: bool,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn print_table(entries: &[CodeEntry]) {
    let name_width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in entries {
        println!(
            "{:>4}  {:<name_width$}  {}",
            entry.value, entry.name, entry.description
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Describe { code } => {
            let parsed = lookup::parse_error_code(&code)?;
            match ErrorCode::check(parsed.raw()) {
                Ok(()) => println!("{}: success", parsed.name()),
                Err(err) => {
                    if err.description().is_empty() {
                        tracing::warn!(code = err.raw(), "Unrecognized libusb error code");
                    }
                    println!("{}: {err}", err.name());
                }
            }
        }
        Commands::Status { code } => {
            let status = lookup::parse_transfer_status(&code)?;
            if status.description().is_empty() {
                tracing::warn!(status = status.raw(), "Unrecognized transfer status");
            }
            println!("{} ({}): {status}", status.name(), status.raw());
        }
        Commands::List { transfer, json } => {
            let domain = if transfer {
                Domain::Transfer
            } else {
                Domain::Error
            };
            let entries = lookup::catalog(domain);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_table(&entries);
            }
        }
    }

    Ok(())
}
