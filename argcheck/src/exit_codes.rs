//! Stable exit codes for the `argcheck` binary.

/// The check passed; the actual value was printed to stdout.
pub const OK: i32 = 0;
/// The check failed; the failure message was printed to stderr.
pub const FAILED: i32 = 1;
/// Bad invocation or unreadable/invalid config. Matches clap's usage error code.
pub const INVALID: i32 = 2;
