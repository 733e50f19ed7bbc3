//! dv: command-line client for Drive-style remote object stores

mod commands;
mod exit_code;
mod output;

use clap::{Parser, Subcommand};

use crate::output::OutputConfig;

#[derive(Parser, Debug)]
#[command(
    name = "dv",
    version,
    about = "A CLI client for Drive-style remote object stores"
)]
struct Cli {
    /// Emit machine-readable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create folders on the remote
    Mkdir(commands::mkdir::MkdirArgs),

    /// Manage named remotes
    #[command(subcommand)]
    Remote(commands::remote::RemoteCommands),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("DV_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_config = OutputConfig {
        json: cli.json,
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    let code = match cli.command {
        Commands::Mkdir(args) => commands::mkdir::execute(args, output_config).await,
        Commands::Remote(cmd) => commands::remote::execute(cmd, output_config).await,
    };

    std::process::exit(code as i32);
}
