use clap::{Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "sparkify",
    version,
    about = "One-line Unicode sparklines for numeric series"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a sparkline from arguments, a file or stdin
    Line(LineArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// `sparkify line …`
#[derive(Parser, Debug)]
pub struct LineArgs {
    /// Samples; read from `--file` when none are given
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Whitespace/comma separated samples (use `-` for stdin)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Widen the range down to this value
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<String>,
    /// Widen the range up to this value
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<String>,

    /// Color (name or `#RRGGBB`)
    #[arg(long)]
    pub color: Option<String>,

    /// Only draw the most recent N samples
    #[arg(short, long, conflicts_with = "fit")]
    pub width: Option<usize>,

    /// Only draw as many recent samples as fit the terminal
    #[arg(long)]
    pub fit: bool,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}
