use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use quincunx_cli::{run, telemetry, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&cli, &mut out).and_then(|_| out.flush().map_err(Into::into));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "bean-counter failed");
            eprintln!("bean-counter: {e}");
            ExitCode::FAILURE
        }
    }
}
