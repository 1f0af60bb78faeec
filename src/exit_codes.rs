//! Exit code constants for the gitrig CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid state, bad config)
//! - 3: Git failure (non-zero git exit, or git could not be spawned)
//! - 4: Session already destroyed
//! - 5: Filesystem failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed options, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Git failure: the tool exited non-zero or could not be started.
pub const GIT_FAILURE: i32 = 3;

/// The session directory was already torn down.
pub const SESSION_DESTROYED: i32 = 4;

/// Filesystem failure: credentials write or directory removal.
pub const IO_FAILURE: i32 = 5;
