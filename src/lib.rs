// cipherprefs - Server ciphersuite preference list generator

//! cipherprefs scans OpenSSL-style header files for TLS/SSL ciphersuite
//! symbolic names, filters them against a fixed server security policy
//! (forward secrecy and RSA authentication required, known-weak constructs
//! excluded), decomposes the survivors into typed records, ranks them by a
//! mandated multi-field preference order, and emits a deterministic
//! C-preprocessor fragment for embedding in a server's cipher-preference
//! string.

pub mod ciphers;
pub mod cli;
pub mod constants;
pub mod error;
pub mod extract;
pub mod generator;
pub mod output;
pub mod policy;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::error::GenError;
pub use crate::generator::Generator;

/// Result type for cipherprefs operations
pub type Result<T> = anyhow::Result<T>;

/// Error type for cipherprefs operations
pub use anyhow::Error;
