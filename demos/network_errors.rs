//! Feeds a few hand-built outcomes to one logger through differently typed roles.
//!
//! A single `ErrorLogger<SharedError>` is used as a logger of arbitrary
//! errors, as a logger of `ApiError`s only, and finally read back as a dumper.
//!
//! Run with:
//! ```bash
//! cargo run --example network_errors
//! ```

use std::thread;
use std::time::Duration;

use faultlog::{ApiError, ErrorDumper, ErrorLogger, Logger, Outcome, SharedError};

/// A value with no meaning beyond being something other than a string.
#[derive(Debug)]
struct Circle;

// Only spaces the timestamps out so they differ visibly in the output.
const PAUSE: Duration = Duration::from_millis(100);

fn process_any_errors(logger: &impl Logger<SharedError>) -> faultlog::Result<()> {
    logger.log(Outcome::success("Success"));
    thread::sleep(PAUSE);
    logger.log(Outcome::success(Circle));
    thread::sleep(PAUSE);
    logger.log(Outcome::<(), _>::failure(SharedError::msg("Something unexpected")));

    logger.dump_log()
}

fn process_api_errors(logger: &impl Logger<ApiError>) -> faultlog::Result<()> {
    logger.log(Outcome::success("Success"));
    thread::sleep(PAUSE);
    logger.log(Outcome::success(Circle));
    thread::sleep(PAUSE);
    logger.log(Outcome::<(), _>::failure(ApiError::Network));

    logger.dump_log()
}

fn dump_errors(dumper: &impl ErrorDumper<SharedError>) {
    for entry in dumper.dump() {
        println!("Error at {}: {}", entry.timestamp(), entry.error());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let builder = faultlog::builder().with_console(true).with_level("info");
    let logger: ErrorLogger<SharedError> = builder.logger();
    builder.init()?;

    println!("Processing any errors:");
    process_any_errors(&logger)?;

    println!("Processing API errors:");
    process_api_errors(&logger)?;

    println!("Dump all errors:");
    dump_errors(&logger);

    tracing::info!(recorded = logger.len(), "Done");
    Ok(())
}
