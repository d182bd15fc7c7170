// Entry point for the image-transformer command-line tool.
// All behaviour lives in the library; this file wires up logging and args.

use std::io;
use std::process::ExitCode;

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use image_transformer_lib::{USAGE, parse_args, run_command};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_writer(io::stderr)  // stdout is reserved for per-job diagnostics
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_logging();

    let command = match parse_args(pico_args::Arguments::from_env()) {
        Ok(command) => command,
        Err(e) => {
            error!("{}", e);
            eprintln!("{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };
    debug!("Parsed command: {:?}", command);

    let outcomes = run_command(io::stdout(), command).await?;
    debug!("{} jobs run", outcomes.len());

    Ok(ExitCode::SUCCESS)
}
