// Error types for cipherprefs
//
// Structured error types using thiserror. Policy rejections and unparseable
// candidate names are not errors (the pipeline drops and continues); the
// variants here are the conditions that must abort a run.

use std::io;
use thiserror::Error;

/// Fatal error conditions for a generator run
#[derive(Debug, Error)]
pub enum GenError {
    /// An input header file could not be read
    #[error("File system error: {path}: {source}")]
    FileSystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A structurally-matched field value is outside its enumerated domain.
    ///
    /// This means the preference tables are stale relative to the input
    /// vocabulary; silently dropping the name would mask the drift.
    #[error("Unknown {field} value {value:?} in {name}: preference tables need updating")]
    UnknownFieldValue {
        field: &'static str,
        value: String,
        name: String,
    },

    /// No candidate survived filtering and parsing (strict mode only).
    ///
    /// An empty server cipher preference list is a meaningful
    /// misconfiguration, not a degenerate success.
    #[error("No usable ciphersuites found in {files} input file(s)")]
    EmptyPreferenceList { files: usize },
}
