use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

use cmd::transform::Direction;

#[derive(Parser, Debug)]
#[command(author, version, about = "Caesar cipher toolkit with frequency-analysis attacks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with attack parameters (explicit flags still win)
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt text with a shift
    Encrypt(cmd::transform::TransformArgs),
    /// Decrypt text with a known shift
    Decrypt(cmd::transform::TransformArgs),
    /// Recover plaintext without the key
    Crack(cmd::crack::CrackArgs),
    /// Clean, encrypt and optionally attack a file, writing a report
    Demo(cmd::demo::DemoArgs),
    /// Uppercase a file and strip punctuation
    Clean(cmd::clean::CleanArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing ShiftBreak...");

    let result = match cli.command {
        Commands::Encrypt(args) => cmd::transform::run(args, Direction::Encrypt),
        Commands::Decrypt(args) => cmd::transform::run(args, Direction::Decrypt),
        Commands::Crack(args) => {
            // Explicit flags are detected on the subcommand's own matches.
            let sub_matches = matches
                .subcommand_matches("crack")
                .unwrap_or(&matches);
            cmd::crack::run(args, cli.config.as_deref(), sub_matches)
        }
        Commands::Demo(args) => cmd::demo::run(args),
        Commands::Clean(args) => cmd::clean::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
