//! Operator CLI for inspecting host-qualified configuration files.
//!
//! Lets admin personnel verify a config file without writing code: resolve
//! the machine-qualified filename, probe for its existence, or print a
//! password-redacted listing of its contents.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use hostconf::{config_name, does_config_exist, read_settings};

#[derive(Parser)]
#[command(name = "confcheck")]
#[command(about = "Inspect host-qualified key=value configuration files", long_about = None)]
struct Cli {
    /// Override the per-process part of the filename (default <process>.ini)
    #[arg(short = 'n', long, global = true)]
    override_name: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved config filename for this machine and process
    Name,
    /// Check whether the config file exists in the given folder
    Exists {
        /// Folder the configuration files live in
        folder: PathBuf,
    },
    /// Load the config file and print a password-redacted listing
    Show {
        /// Folder the configuration files live in
        folder: PathBuf,

        /// Emit JSON instead of key=value lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hostconf=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let override_name = cli.override_name.as_deref();

    match &cli.command {
        Commands::Name => {
            println!("{}", config_name(override_name));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Exists { folder } => {
            let name = config_name(override_name);
            if does_config_exist(folder, override_name)? {
                println!("{} exists in {}", name, folder.display());
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{} not found in {}", name, folder.display());
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Show { folder, json } => {
            // Parse-level load: duplicate keys warn but never block the
            // listing, which is exactly the file an operator wants to see.
            let loaded = read_settings(folder, override_name)?;
            for warning in loaded.warnings() {
                eprintln!("warning: {warning}");
            }

            if *json {
                let rendered = serde_json::to_string_pretty(&loaded.redacted_settings())?;
                println!("{rendered}");
            } else {
                for (key, value) in loaded.redacted_settings() {
                    println!("{key}={value}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
