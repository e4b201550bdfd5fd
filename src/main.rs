use std::process::ExitCode;

use clap::Parser;

use sgpaconv::cli::{init_logging, Args, CliConfig};

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            init_logging("error");
            sgpaconv::cli::handle_error(&e);
            return ExitCode::from(2);
        }
    };

    // Set up logging
    init_logging(config.log_level());

    if config.run().is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
