//! DITLAUNCH CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, plan or
//! execute the launch, and exit with the delegated trainer's status.
//! For programmatic use, prefer the library API (`ditlaunch::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        // The trainer's exit status passes through unchanged
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
