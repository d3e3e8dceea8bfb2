//! Verbosity-aware output for the todo CLI.
//!
//! Set the level once from main() with `output::init(verbosity)`.
//! Results and the token prompt are written by the session runner directly;
//! these macros only carry diagnostics.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet = 0,
    Normal = 1,
    Verbose = 2,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => Verbosity::Verbose,
            (false, true) => Verbosity::Quiet,
            (false, false) => Verbosity::Normal,
        }
    }
}

static VERBOSITY: OnceLock<Verbosity> = OnceLock::new();

/// Initialize the global verbosity level. Later calls are ignored.
pub fn init(v: Verbosity) {
    let _ = VERBOSITY.set(v);
}

/// Get the current verbosity level.
pub fn verbosity() -> Verbosity {
    *VERBOSITY.get().unwrap_or(&Verbosity::Normal)
}

/// Debug/verbose info. Shown at Verbose only.
#[macro_export]
macro_rules! o_debug {
    ($($arg:tt)*) => {
        if $crate::output::verbosity() >= $crate::output::Verbosity::Verbose {
            println!($($arg)*);
        }
    };
}

/// Non-fatal warning. Shown at Normal+.
#[macro_export]
macro_rules! o_warn {
    ($($arg:tt)*) => {
        if $crate::output::verbosity() >= $crate::output::Verbosity::Normal {
            eprintln!($($arg)*);
        }
    };
}

/// Fatal error. Always shown.
#[macro_export]
macro_rules! o_error {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}
