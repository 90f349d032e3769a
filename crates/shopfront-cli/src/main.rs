use shopfront_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the state dir if possible, stderr otherwise.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("shopfront error: {:#}", err);
        std::process::exit(1);
    }
}
