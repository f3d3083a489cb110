pub mod alu;
pub mod args;
pub mod constants;
pub mod device;
pub mod error;
pub mod runner;
pub mod utils;
pub mod vectors;

pub use alu::{AluOutput, Operation, evaluate};
pub use device::{Device, GoldenWire, WireAdapter, WireDevice};
pub use error::ExecError;
pub use runner::{Field, RunPolicy, RunReport, VectorMismatch, check, run};
pub use vectors::{TestVector, VECTORS};

use constants::SETTLE_TIME;
use log::{debug, info};
use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| writeln!(buf, "{:<5} {}", record.level(), record.args()));

    // If a path is provided, redirect output to the file
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A host harness may already own the logger.
    if builder.try_init().is_err() {
        debug!("Logger already installed, keeping it");
    }
    Ok(())
}

/// Resolves the operations to run, all of them when none are named.
pub fn parse_ops(names: &[String]) -> Result<Vec<Operation>, ExecError> {
    if names.is_empty() {
        return Ok(Operation::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| {
            Operation::from_mnemonic(name).ok_or_else(|| ExecError::UnknownOperation(name.clone()))
        })
        .collect()
}

/// Runs the vector table, or a sweep, against the golden wire device.
/// Returns the report; the caller decides the exit status from it.
pub fn alu_exec(args: args::Args) -> Result<RunReport, ExecError> {
    setup_logging(&args.log_path)?;

    let ops = parse_ops(&args.ops)?;
    let vectors = if args.sweep {
        vectors::exhaustive(&ops)
    } else {
        VECTORS
            .iter()
            .filter(|vector| vector.operation().is_some_and(|op| ops.contains(&op)))
            .copied()
            .collect()
    };
    let policy = if args.collect_all {
        RunPolicy::CollectAll
    } else {
        RunPolicy::FailFast
    };
    let settle_time = args.settle_ns.map(Duration::from_nanos).unwrap_or(SETTLE_TIME);

    info!(
        "Running {} vectors ({:?}, settle {:?})",
        vectors.len(),
        policy,
        settle_time
    );
    let mut device = WireAdapter::new(GoldenWire::new().with_settle_time(settle_time));
    Ok(run(&vectors, &mut device, policy))
}

/// What the driver prints to stdout: the JSON report alone, or a summary.
pub fn render_report(report: &RunReport, json: bool) -> Result<String, ExecError> {
    if json {
        return Ok(report.to_json()?);
    }
    if report.is_success() {
        return Ok(format!("PASSED! All {} vectors matched.", report.passed));
    }
    let mut lines = vec![format!(
        "FAILED! {} of {} executed vectors mismatched.",
        report.failed(),
        report.executed
    )];
    lines.extend(report.mismatches.iter().map(|mismatch| format!("  {}", mismatch)));
    Ok(lines.join("\n"))
}
