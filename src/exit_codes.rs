//! Process exit codes for the `shquote` binary.
//!
//! A plain rewrite only ever reports success or failure. `--check` adds a
//! third outcome so a CI step can fail when a Jenkinsfile still carries
//! `sh '''` blocks, without confusing that with a missing file or bad config.

/// The file was rewritten, or `--check`/`--diff` found nothing to report
pub const SUCCESS: i32 = 0;

/// `--check` found at least one block that would be rewritten
pub const CHANGES_NEEDED: i32 = 1;

/// Unreadable or unwritable file, invalid config, or rejected rewrite options
pub const TOOL_ERROR: i32 = 2;

pub mod exit {
    use super::{CHANGES_NEEDED, SUCCESS, TOOL_ERROR};

    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    pub fn changes_needed() -> ! {
        std::process::exit(CHANGES_NEEDED);
    }

    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
