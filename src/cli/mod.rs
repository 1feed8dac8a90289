mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::SparkError;

/// Parse `std::env::args` and dispatch to the chosen subcommand.
///
/// # Errors
/// Whatever the subcommand handler reports.
pub fn run() -> Result<(), SparkError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Line(a) => handlers::line(&a),
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
