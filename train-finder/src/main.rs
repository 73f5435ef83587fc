use std::process::ExitCode;

use clap::Parser;

use train_finder::cli::{Args, run};
use train_finder::config::FinderConfig;
use train_finder::logging::init_logging;

fn main() -> ExitCode {
    let args = Args::parse();

    // Flag beats environment, which beats the default
    let mut config = FinderConfig::from_env();
    if let Some(path) = &args.data {
        config = config.with_data_path(path);
    }

    init_logging(&config.log_filter);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match run(&args, &config, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
