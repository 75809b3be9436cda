mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match cli::cli() {
        cli::CliRes::Ok => ExitCode::from(0),
        cli::CliRes::Err => ExitCode::from(1),
    }
}
