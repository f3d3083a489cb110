use serde::Serialize;

use super::VectorMismatch;

/// What the runner does after a vector fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub enum RunPolicy {
    /// Stop after the first vector with any mismatched field.
    #[default]
    FailFast,
    /// Run every vector and report all mismatches.
    CollectAll,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub struct RunReport {
    pub policy: RunPolicy,
    /// Vectors handed to the runner.
    pub total: usize,
    /// Vectors actually evaluated, less than `total` if the run halted.
    pub executed: usize,
    pub passed: usize,
    /// One entry per mismatched field, in execution order.
    pub mismatches: Vec<VectorMismatch>,
    /// True when fail-fast stopped the run before the end.
    pub halted: bool,
}

impl RunReport {
    pub fn new(policy: RunPolicy, total: usize) -> Self {
        Self {
            policy,
            total,
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty() && self.executed == self.total
    }

    /// Number of vectors with at least one mismatched field.
    pub fn failed(&self) -> usize {
        self.executed - self.passed
    }

    pub fn first_mismatch(&self) -> Option<&VectorMismatch> {
        self.mismatches.first()
    }

    /// Surfaces the first mismatch as an error.
    pub fn into_result(self) -> Result<RunReport, VectorMismatch> {
        if let Some(mismatch) = self.first_mismatch().copied() {
            return Err(mismatch);
        }
        Ok(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
