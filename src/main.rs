//! Command-line entry point.

use clap::Parser;

#[derive(Parser)]
#[command(name = "lemmon", about = "Verifies Lemmon-style natural-deduction proofs")]
struct Cli {
    /// Path to a proof-text file, or `-` (the default) to read from standard input.
    #[arg(default_value = "-")]
    input: String,

    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .expect("logger should only be initialized once");

    lemmon::shell::main(&cli.input)
}
