// CLI module - Command line interface and argument parsing

use clap::Parser;
use std::path::PathBuf;

/// cipherprefs - Server ciphersuite preference list generator
///
/// Scans OpenSSL-style header files for ciphersuite symbolic names and
/// prints a ranked, conditionally-guarded preference list fragment on
/// standard output. Run it on the files in an OpenSSL include directory.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "cipherprefs")]
#[command(author, version)]
#[command(about = "Generates a server-side TLS ciphersuite preference list from OpenSSL headers")]
pub struct Args {
    /// Header files to scan, in preference-irrelevant order (e.g. tls1.h ssl3.h)
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Treat an empty result as a configuration error instead of emitting a
    /// degenerate listing
    #[arg(long = "strict")]
    pub strict: bool,
}
