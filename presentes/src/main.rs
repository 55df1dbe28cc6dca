use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use presentes::{commands, config};

#[derive(Parser)]
#[command(name = "presentes")]
#[command(about = "PIX contribution codes for the Chá de Casa Nova gift registry", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH_SHORT"), ")"))]
struct Cli {
    /// Path to config file (default: ~/.presentes/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the PIX account that receives contributions
    Init {
        /// PIX key (e-mail, phone, CPF/CNPJ or random key)
        #[arg(long)]
        key: String,

        /// Name shown to the payer (codes carry at most 25 characters)
        #[arg(long)]
        name: String,

        /// City shown to the payer (codes carry at most 15 characters)
        #[arg(long)]
        city: String,

        /// Default message shown to the payer
        #[arg(long)]
        message: Option<String>,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Print a PIX Copia e Cola code
    Pix {
        /// Amount in reais, e.g. 150 or 150,00 (omit to let the guest choose)
        amount: Option<String>,

        /// Reference label for the payment
        #[arg(long)]
        txid: Option<String>,

        /// Message shown to the payer (overrides the configured one)
        #[arg(long)]
        message: Option<String>,
    },

    /// Verify a PIX Copia e Cola code and show its contents
    Decode {
        /// The code to inspect
        payload: String,

        /// Print the fields as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = || match &cli.config {
        Some(path) => Ok(path.clone()),
        None => config::default_config_path(),
    };

    match cli.command {
        Commands::Init { key, name, city, message, force } => {
            commands::init::run(&config_path()?, &key, &name, &city, message.as_deref(), force)
        }
        Commands::Pix { amount, txid, message } => {
            commands::pix::run(&config_path()?, amount.as_deref(), txid.as_deref(), message.as_deref())
        }
        Commands::Decode { payload, json } => {
            commands::decode::run(&payload, json)
        }
    }
}
