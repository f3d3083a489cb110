use alu4_golden::args::Args;
use alu4_golden::constants::SEL_SUB;
use alu4_golden::{
    AluOutput, ExecError, Operation, RunPolicy, TestVector, VECTORS, alu_exec, evaluate,
    parse_ops, render_report, run,
};

fn args() -> Args {
    Args {
        sweep: false,
        ops: Vec::new(),
        collect_all: false,
        json: false,
        log_path: None,
        settle_ns: Some(0),
    }
}

#[test]
fn test_exec_vector_table() {
    let report = alu_exec(args()).unwrap();
    assert!(report.is_success());
    assert_eq!(report.total, VECTORS.len());
    assert_eq!(report.policy, RunPolicy::FailFast);
}

#[test]
fn test_exec_sweep_selected_ops() {
    let report = alu_exec(Args {
        sweep: true,
        ops: vec!["add".to_string(), "SUB".to_string()],
        collect_all: true,
        json: true,
        ..args()
    })
    .unwrap();
    assert!(report.is_success());
    assert_eq!(report.total, 512);
    assert_eq!(report.policy, RunPolicy::CollectAll);
}

#[test]
fn test_exec_rejects_unknown_operation() {
    let err = alu_exec(Args {
        sweep: true,
        ops: vec!["mul".to_string()],
        ..args()
    })
    .unwrap_err();
    assert!(matches!(err, ExecError::UnknownOperation(ref name) if name == "mul"));
}

#[test]
fn test_parse_ops_defaults_to_all() {
    assert_eq!(parse_ops(&[]).unwrap(), Operation::ALL.to_vec());
    assert_eq!(
        parse_ops(&["eq".to_string(), "xor".to_string()]).unwrap(),
        vec![Operation::Eq, Operation::Xor]
    );
}

#[test]
fn test_exec_rejects_unknown_operation_without_sweep() {
    let err = alu_exec(Args {
        ops: vec!["mul".to_string()],
        ..args()
    })
    .unwrap_err();
    assert!(matches!(err, ExecError::UnknownOperation(ref name) if name == "mul"));
}

#[test]
fn test_exec_filters_vector_table_by_ops() {
    let report = alu_exec(Args {
        ops: vec!["sub".to_string()],
        ..args()
    })
    .unwrap();
    let subs = VECTORS.iter().filter(|v| v.sel == SEL_SUB).count();
    assert!(report.is_success());
    assert_eq!(report.total, subs);
    assert_eq!(report.passed, subs);
}

#[test]
fn test_json_output_is_the_report_alone() {
    let report = alu_exec(Args {
        json: true,
        ..args()
    })
    .unwrap();
    let output = render_report(&report, true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["passed"], VECTORS.len());
    assert!(!output.contains("PASSED!"));
}

#[test]
fn test_failed_json_output_is_the_report_alone() {
    // Borrow reported as a carry-out.
    let mut device = |a: u8, b: u8, sel: u8| AluOutput {
        c: a >= b,
        ..evaluate(a, b, sel)
    };
    let vectors = [TestVector::new(0b0010, 0b0100, SEL_SUB, 0b1110)];
    let report = run(&vectors, &mut device, RunPolicy::FailFast);

    let output = render_report(&report, true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["mismatches"][0]["field"], "carry");
    assert!(!output.contains("FAILED!"));
}

#[test]
fn test_text_summary() {
    let report = alu_exec(args()).unwrap();
    assert_eq!(
        render_report(&report, false).unwrap(),
        format!("PASSED! All {} vectors matched.", VECTORS.len())
    );

    let mut device = |a: u8, b: u8, sel: u8| AluOutput {
        c: a >= b,
        ..evaluate(a, b, sel)
    };
    let vectors = [TestVector::new(0b0010, 0b0100, SEL_SUB, 0b1110)];
    let report = run(&vectors, &mut device, RunPolicy::FailFast);
    assert_eq!(
        render_report(&report, false).unwrap(),
        "FAILED! 1 of 1 executed vectors mismatched.\n  \
         Vector #0 A=0010 B=0100 sel=0001 (SUB): carry was 0, expected 1"
    );
}
