use std::path::PathBuf;

use clap::Parser;

/// Checks the 4-bit ALU against its golden model.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Run an exhaustive operand sweep instead of the hand-written vector table.
    #[arg(long)]
    pub sweep: bool,

    /// Operations to run, comma separated mnemonics (add,sub,and,or,xor,eq).
    /// Filters the vector table, or picks what to sweep. Defaults to all of them.
    #[arg(long, value_delimiter = ',')]
    pub ops: Vec<String>,

    /// Keep going after a failing vector and report every mismatch.
    #[arg(long)]
    pub collect_all: bool,

    /// Print the run report as JSON.
    #[arg(long)]
    pub json: bool,

    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,

    // Delay between driving the inputs and sampling the outputs.
    #[arg(long)]
    pub settle_ns: Option<u64>,
}
