//! ghretos CLI
//!
//! A command-line tool for classifying GitHub URLs and shorthand references.

use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, ValidatedConfig, read_inputs};
use cli::output::{HumanOutput, MatchResults};

fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    let exit_code = run(args);

    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Classify every input with the given arguments.
fn run(args: Args) -> ExitCode {
    let mut stderr = io::stderr().lock();

    // Validate configuration
    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            let use_colors = !args.json && io::stderr().is_terminal();
            let _ = HumanOutput::new(&mut stderr, use_colors).write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    let use_colors = !config.json_output && io::stdout().is_terminal();

    debug!("Validated configuration: {:?}", config);

    let inputs = if args.reads_stdin() {
        info!("Reading inputs from standard input");
        match read_inputs(io::stdin().lock()) {
            Ok(inputs) => inputs,
            Err(e) => {
                let _ = HumanOutput::new(&mut stderr, use_colors)
                    .write_error(&format!("Failed to read standard input: {}", e));
                return ExitCode::StartupFailure;
            }
        }
    } else {
        args.inputs
    };

    let mut results = MatchResults::new();
    for input in inputs {
        let resource = config.classify(&input);
        match &resource {
            Some(resource) => debug!("'{}' is a {}", input, resource.kind()),
            None => info!("'{}' was not recognized", input),
        }
        results.add(input, resource);
    }

    // Output results
    let mut stdout = io::stdout().lock();
    let written = if config.json_output {
        results.write_json(&mut stdout)
    } else {
        results.write_human(&mut stdout, use_colors)
    };
    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    config.exit_code_for_results(results.unmatched())
}
