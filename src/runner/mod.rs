mod error;
mod report;

pub use error::{Field, VectorMismatch};
pub use report::{RunPolicy, RunReport};

use log::{debug, error, info};

use crate::alu::{AluOutput, evaluate};
use crate::device::Device;
use crate::utils::bit;
use crate::vectors::TestVector;

/// Runs `vectors` in order against `device`.
///
/// The expected result of each vector is its literal `expected` field, the
/// expected flags come from the golden model. Every mismatched field is
/// recorded separately; with [`RunPolicy::FailFast`] the run stops after the
/// first vector that has any.
pub fn run<D: Device>(vectors: &[TestVector], device: &mut D, policy: RunPolicy) -> RunReport {
    let mut report = RunReport::new(policy, vectors.len());

    for (index, vector) in vectors.iter().enumerate() {
        let actual = device.evaluate(vector.a, vector.b, vector.sel);
        let expected = expected_output(vector);
        report.executed += 1;

        let mismatches = compare(index, vector, &actual, &expected);
        if mismatches.is_empty() {
            debug!("PASS #{} {} -> {}", index, vector, actual);
            report.passed += 1;
            continue;
        }

        for mismatch in &mismatches {
            error!("FAIL {}", mismatch);
        }
        report.mismatches.extend(mismatches);

        if policy == RunPolicy::FailFast {
            report.halted = index + 1 < vectors.len();
            break;
        }
    }

    info!(
        "{}/{} vectors passed, {} executed, {} mismatched fields",
        report.passed,
        report.total,
        report.executed,
        report.mismatches.len()
    );
    report
}

/// Fail-fast run, surfacing the first mismatch as an error.
pub fn check<D: Device>(
    vectors: &[TestVector],
    device: &mut D,
) -> Result<RunReport, VectorMismatch> {
    run(vectors, device, RunPolicy::FailFast).into_result()
}

/// The golden model's flags with the vector's own result.
pub fn expected_output(vector: &TestVector) -> AluOutput {
    AluOutput {
        value: vector.expected,
        ..evaluate(vector.a, vector.b, vector.sel)
    }
}

/// Compares the five output fields independently.
pub fn compare(
    index: usize,
    vector: &TestVector,
    actual: &AluOutput,
    expected: &AluOutput,
) -> Vec<VectorMismatch> {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            let (actual, expected) = match field {
                Field::Result => (actual.value, expected.value),
                Field::Carry => (bit(actual.c), bit(expected.c)),
                Field::Zero => (bit(actual.z), bit(expected.z)),
                Field::Negative => (bit(actual.n), bit(expected.n)),
                Field::Overflow => (bit(actual.v), bit(expected.v)),
            };
            (actual != expected).then_some(VectorMismatch {
                index,
                vector: *vector,
                field,
                actual,
                expected,
            })
        })
        .collect()
}
