use clap::Parser;
use khata::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
