//! crossfeed - command-line front end for the bs2b crossfeed filter

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crossfeed_cli::cli_args::{khz_to_hz, stream_format, Cli, Commands};
use crossfeed_cli::commands::{self, StreamOptions};
use crossfeed_cli::describe_level;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries audio in stream mode
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Convert {
            level,
            input,
            output,
        } => {
            println!("Crossfeed level: {}.", describe_level(level));
            println!(
                "Converting file '{}' to file '{}'...",
                input.display(),
                output.display()
            );
            let summary = commands::convert(&input, &output, level)?;
            println!(
                "Done: {} frames at {} Hz.",
                summary.frames, summary.sample_rate
            );
        }
        Commands::Stream {
            unsigned,
            endian,
            bits,
            float,
            rate,
            level,
        } => {
            let options = StreamOptions {
                format: stream_format(unsigned, endian, bits, float),
                sample_rate: khz_to_hz(rate),
                level,
            };
            let stdin = io::stdin().lock();
            let stdout = io::BufWriter::new(io::stdout().lock());
            let frames = commands::stream(stdin, stdout, &options)?;
            tracing::info!("Streamed {} frames", frames);
        }
    }
    Ok(())
}
