//! Exit code constants for the cliutil binary.
//!
//! - 0: Success (also used when interrupted)
//! - 1: Usage error or help request
//! - 2: Runtime failure (output could not be written, platform query failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Bad arguments, or the full help text was requested.
pub const USAGE_ERROR: i32 = 1;

/// An action could not finish after its arguments validated.
pub const RUNTIME_FAILURE: i32 = 2;

/// Interrupted by SIGINT. Deliberately the same as success.
pub const INTERRUPTED: i32 = SUCCESS;
