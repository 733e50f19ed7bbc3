//! Remote management commands
//!
//! Remotes are named references to Drive-style endpoints, including the
//! access token used to authenticate against them.

use clap::Subcommand;
use serde::Serialize;

use dv_core::config::DEFAULT_ENDPOINT;
use dv_core::{Remote, RemoteManager};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Remote subcommands for managing store connections
#[derive(Subcommand, Debug)]
pub enum RemoteCommands {
    /// Add or update a remote
    Set(SetArgs),

    /// List all configured remotes
    List(ListArgs),

    /// Remove a remote
    Remove(RemoveArgs),
}

/// Arguments for the `remote set` command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Remote name (e.g., "default", "work")
    pub name: String,

    /// OAuth access token used as the bearer credential
    pub access_token: String,

    /// API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

/// Arguments for the `remote list` command
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show endpoints as well as names
    #[arg(short, long)]
    pub long: bool,
}

/// Arguments for the `remote remove` command
#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Name of the remote to remove
    pub name: String,
}

/// JSON output for remote list
#[derive(Serialize)]
struct RemoteListOutput {
    remotes: Vec<RemoteInfo>,
}

/// Remote information for JSON output (without the token)
#[derive(Serialize)]
struct RemoteInfo {
    name: String,
    endpoint: String,
}

impl From<&Remote> for RemoteInfo {
    fn from(remote: &Remote) -> Self {
        Self {
            name: remote.name.clone(),
            endpoint: remote.endpoint.clone(),
        }
    }
}

/// JSON output for remote set/remove operations
#[derive(Serialize)]
struct RemoteOperationOutput {
    success: bool,
    remote: String,
    message: String,
}

/// Execute a remote subcommand
pub async fn execute(cmd: RemoteCommands, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);
    let manager = match RemoteManager::new() {
        Ok(m) => m,
        Err(e) => {
            formatter.error(&format!("Failed to load remotes: {e}"));
            return ExitCode::GeneralError;
        }
    };

    match cmd {
        RemoteCommands::Set(args) => execute_set(args, &manager, &formatter).await,
        RemoteCommands::List(args) => execute_list(args, &manager, &formatter).await,
        RemoteCommands::Remove(args) => execute_remove(args, &manager, &formatter).await,
    }
}

async fn execute_set(args: SetArgs, manager: &RemoteManager, formatter: &Formatter) -> ExitCode {
    if args.name.is_empty() {
        formatter.error("Remote name cannot be empty");
        return ExitCode::UsageError;
    }

    if args.access_token.is_empty() {
        formatter.error("Access token cannot be empty");
        return ExitCode::UsageError;
    }

    let remote = Remote::new(&args.name, &args.endpoint, &args.access_token);

    match manager.set(remote) {
        Ok(()) => {
            if formatter.is_json() {
                let output = RemoteOperationOutput {
                    success: true,
                    remote: args.name.clone(),
                    message: format!("Remote '{}' configured successfully", args.name),
                };
                formatter.json(&output);
            } else {
                let styled_name = formatter.style_name(&args.name);
                formatter.success(&format!("Remote '{styled_name}' configured successfully."));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::GeneralError
        }
    }
}

async fn execute_list(args: ListArgs, manager: &RemoteManager, formatter: &Formatter) -> ExitCode {
    match manager.list() {
        Ok(remotes) => {
            if formatter.is_json() {
                let output = RemoteListOutput {
                    remotes: remotes.iter().map(RemoteInfo::from).collect(),
                };
                formatter.json(&output);
            } else if remotes.is_empty() {
                formatter.println("No remotes configured.");
            } else if args.long {
                for remote in &remotes {
                    let styled_name = formatter.style_name(&format!("{:<12}", remote.name));
                    let styled_url = formatter.style_url(&remote.endpoint);
                    formatter.println(&format!("{styled_name} {styled_url}"));
                }
            } else {
                for remote in &remotes {
                    formatter.println(&formatter.style_name(&remote.name));
                }
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::GeneralError
        }
    }
}

async fn execute_remove(
    args: RemoveArgs,
    manager: &RemoteManager,
    formatter: &Formatter,
) -> ExitCode {
    match manager.remove(&args.name) {
        Ok(()) => {
            if formatter.is_json() {
                let output = RemoteOperationOutput {
                    success: true,
                    remote: args.name.clone(),
                    message: format!("Remote '{}' removed successfully", args.name),
                };
                formatter.json(&output);
            } else {
                let styled_name = formatter.style_name(&args.name);
                formatter.success(&format!("Remote '{styled_name}' removed successfully."));
            }
            ExitCode::Success
        }
        Err(dv_core::Error::RemoteNotFound(_)) => {
            formatter.error(&format!("Remote '{}' not found", args.name));
            ExitCode::NotFound
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::GeneralError
        }
    }
}
