use std::process::ExitCode;

use clap::Parser;
use solve::cli::{hint, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    solve::logging::init(cli.verbose);
    match run(&cli, std::io::stdin().lock()) {
        Ok(answer) => {
            println!("{answer}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "solve failed");
            eprintln!("error: {err:#}");
            if let Some(hint) = hint(&err) {
                eprintln!("hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}
