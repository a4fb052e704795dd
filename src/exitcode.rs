//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error (clap uses the same code for bad options)
pub const USAGE: i32 = 2;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Credential or remote-call failure.
///
/// Historical convention carried over from the original tool; POSIX shells
/// observe this truncated to 244.
pub const FAILURE: i32 = 500;
