use super::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;
use clap::ArgMatches;
use std::process::ExitCode;

/// Convert the `-v` count into a verbosity level
fn extract_verbosity(matches: &ArgMatches) -> u8 {
    matches.get_count("verbose")
}

/// Main orchestrator - Pure orchestration with no business logic
///
/// Five-step data flow:
/// 1. Parse: Extract CLI arguments (environment variables included)
/// 2. Extract Verbosity: Convert flag count to logging level
/// 3. Initialize Telemetry: Set up tracing on stderr
/// 4. Dispatch: Convert `ArgMatches` into typed Action enum
/// 5. Execute: Run the probe and map its outcome to an exit code
///
/// # Errors
///
/// Returns an error if logging cannot be set up or the result line cannot be
/// written; a failed connection is an exit code, not an error
pub async fn start() -> Result<ExitCode> {
    // 1. Parse: Extract CLI arguments
    let matches = commands::new().get_matches();

    // 2. Extract Verbosity
    let verbosity = extract_verbosity(&matches);

    // 3. Initialize Telemetry
    telemetry::init(verbosity)?;

    // 4. Dispatch: Convert ArgMatches into typed Action enum
    let action: Action = dispatch::dispatch(&matches)?;

    // 5. Execute: Run the action's business logic
    action.execute().await
}
