//! mkdir command - Create folders on the remote
//!
//! Walks each drive path segment by segment against the remote store,
//! creating the terminal folder (and, with -p, every missing ancestor).
//! Paths are processed independently; the exit code reflects whether any
//! of them failed.

use clap::Args;
use serde::Serialize;

use dv_core::{DEFAULT_REMOTE, Materializer, RemoteManager};
use dv_drive::DriveClient;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Create folders on the remote
#[derive(Args, Debug)]
pub struct MkdirArgs {
    /// Create missing intermediate folders as needed
    #[arg(short = 'p', long = "parents")]
    pub parents: bool,

    /// Remote to talk to
    #[arg(long, default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Drive paths to create
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// JSON output for mkdir
#[derive(Serialize)]
struct MkdirOutput {
    failure_count: usize,
    failures: Vec<FailureInfo>,
}

#[derive(Serialize)]
struct FailureInfo {
    path: String,
    error: String,
}

/// Execute the mkdir command
pub async fn execute(args: MkdirArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let manager = match RemoteManager::new() {
        Ok(m) => m,
        Err(e) => {
            formatter.error(&format!("Failed to load remotes: {e}"));
            return ExitCode::GeneralError;
        }
    };

    let remote = match manager.get(&args.remote) {
        Ok(r) => r,
        Err(dv_core::Error::RemoteNotFound(_)) => {
            formatter.error(&format!("Remote '{}' not found", args.remote));
            return ExitCode::NotFound;
        }
        Err(e) => {
            formatter.error(&format!("Failed to get remote: {e}"));
            return ExitCode::GeneralError;
        }
    };

    let client = match DriveClient::new(remote) {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to create Drive client: {e}"));
            return ExitCode::NetworkError;
        }
    };

    let materializer = Materializer::new(&client, args.parents);
    let summary = materializer.materialize(&args.paths).await;

    if formatter.is_json() {
        let output = MkdirOutput {
            failure_count: summary.failure_count(),
            failures: summary
                .failures
                .iter()
                .map(|f| FailureInfo {
                    path: f.path.clone(),
                    error: f.error.to_string(),
                })
                .collect(),
        };
        formatter.json(&output);
    } else {
        for failure in &summary.failures {
            formatter.error(&failure.error.to_string());
        }
    }

    if summary.ok() {
        ExitCode::Success
    } else {
        ExitCode::GeneralError
    }
}
