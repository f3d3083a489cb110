use std::process::ExitCode;

use alu4_golden::args::Args;
use alu4_golden::{alu_exec, render_report};
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    let json = args.json;

    let rendered = alu_exec(args).and_then(|report| {
        let output = render_report(&report, json)?;
        Ok((report.is_success(), output))
    });

    match rendered {
        Ok((success, output)) => {
            println!("{}", output);
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
