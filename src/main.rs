//! elogic - Scheme-Description Language Tool
//!
//! Parses a scheme-description file and prints its canonical form, or
//! the flattened form of one scheme.
//!
//! # Usage
//!
//! ```bash
//! elogic design.elog
//! elogic --flatten adder design.elog
//! ```

use std::path::PathBuf;

use clap::Parser;
use elogic_core::{dsl, error::Result, flatten};

/// Scheme-description language parser and canonicalizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the scheme-description file
    #[arg(value_name = "SCHEME_FILE")]
    scheme_file: PathBuf,

    /// Flatten the named scheme to primitive instructions and print it
    /// instead of the whole module
    #[arg(short, long, value_name = "SCHEME")]
    flatten: Option<String>,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let args = Args::parse();

    // Parse the scheme file
    let module = dsl::parse_file(&args.scheme_file)?;

    match args.flatten {
        Some(name) => {
            let flat = flatten::flatten(&module, &name)?;
            print!("{}", flat);
        }
        None => print!("{}", module),
    }

    Ok(())
}
