//! # CLI Argument Definitions

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the rorg workspace")]
pub struct Cli {
    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Run tests (workspace by default)
    Test {
        /// Crate to test, or 'all' (auto-prefixes with 'rorg-' if missing)
        project: Option<String>,
    },
    /// Run doc tests (workspace by default)
    Doctest {
        /// Crate to doc-test, or 'all' (auto-prefixes with 'rorg-' if missing)
        project: Option<String>,
    },
    /// Run criterion benches for a crate
    Bench {
        /// Crate owning the benches (auto-prefixes with 'rorg-' if missing)
        project: String,
        /// Only run benchmarks whose id contains this string, e.g. 'timestamp/parse'
        filter: Option<String>,
        /// Save results under this criterion baseline name
        #[arg(long)]
        baseline: Option<String>,
    },
}
