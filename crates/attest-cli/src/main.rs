use anyhow::Result;
use clap::{Parser, Subcommand};

mod scenarios;

/// Demo driver for the attest harness.
///
/// Each subcommand exercises the library end-to-end the way a caller's own
/// test script would: registering tests, running them, and relying on the
/// harness to exit the process on the first failure.
///
/// EXAMPLES:
///     attest suite          Register a passing suite and run it
///     attest adhoc          Run tests without registering them
///     attest failing        Demonstrate fail-fast (exits 1)
///     attest no-throw       An inverted test that should have thrown (exits 1)
///     attest empty          Clear the registry and run nothing
///
/// ENVIRONMENT VARIABLES:
///     NO_COLOR          Set to disable colored output
#[derive(Parser)]
#[command(name = "attest")]
#[command(version)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a passing suite and run it, then rebuild the registry with
    /// a register-then-remove pair and run again
    Suite,

    /// Run ad-hoc tests through the single-test runner, without registering
    Adhoc,

    /// Register three tests where the second fails: the third never runs
    /// and the process exits 1
    Failing,

    /// Register an inverted test whose body does not throw; exits 1 with a
    /// "did not throw" diagnostic
    NoThrow,

    /// Clear the registry and run: prints nothing, exits 0
    Empty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Suite => scenarios::suite(),
        Commands::Adhoc => scenarios::adhoc(),
        Commands::Failing => scenarios::failing(),
        Commands::NoThrow => scenarios::no_throw(),
        Commands::Empty => scenarios::empty(),
    }

    Ok(())
}
