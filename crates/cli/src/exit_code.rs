//! Process exit codes
//!
//! Stable mapping from command outcomes to exit status, shared by every
//! subcommand. clap exits with 2 on its own parse errors, matching
//! `UsageError`.

/// Exit codes returned by dv commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// One or more operations failed
    GeneralError = 1,
    /// Bad or missing arguments
    UsageError = 2,
    /// Could not reach or use the remote endpoint
    NetworkError = 3,
    /// Named resource does not exist
    NotFound = 5,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::GeneralError as i32, 1);
        assert_eq!(ExitCode::UsageError as i32, 2);
        assert_eq!(ExitCode::NetworkError as i32, 3);
        assert_eq!(ExitCode::NotFound as i32, 5);
    }
}
