// cipherprefs - Server ciphersuite preference list generator

use anyhow::Result;
use cipherprefs::{Args, Generator};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable. Logs go to
    // stderr; stdout carries only the generated fragment.
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let args = Args::parse();
    let listing = Generator::new(args).run()?;
    print!("{listing}");
    Ok(())
}
