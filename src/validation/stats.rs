use crate::validation::Sample;

use conv::ConvUtil;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error aggregates of a sweep
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorStats {
    /// Number of evaluated phases
    pub count: u64,
    /// Sum of absolute sine and cosine errors
    pub total_abs_error: u64,
    /// Largest absolute sine or cosine error
    pub max_abs_error: u64,
    /// Number of phases whose error reached `max_error`
    pub out_of_range: u64,
}

impl ErrorStats {
    pub fn push(&mut self, sample: &Sample, exceeds: bool) {
        let sin_error = sample.sin_error().unsigned_abs();
        let cos_error = sample.cos_error().unsigned_abs();
        self.count += 1;
        self.total_abs_error += sin_error + cos_error;
        self.max_abs_error = self.max_abs_error.max(sin_error).max(cos_error);
        if exceeds {
            self.out_of_range += 1;
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            total_abs_error: self.total_abs_error + other.total_abs_error,
            max_abs_error: self.max_abs_error.max(other.max_abs_error),
            out_of_range: self.out_of_range + other.out_of_range,
        }
    }

    /// Mean summed sine and cosine error per phase, `None` for an empty sweep
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        let total = self.total_abs_error.approx_as::<f64>().ok()?;
        let count = self.count.approx_as::<f64>().ok()?;
        Some(total / count)
    }
}

/// Final summary lines of a sweep
#[derive(Clone, Copy, Debug)]
pub struct ValidationReport {
    pub stats: ErrorStats,
    pub output_scale: i64,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Error is {:13.11} per calculation out of +/-{}",
            self.stats.mean().unwrap_or(0.0),
            self.output_scale
        )?;
        write!(
            f,
            "Max error is {:13.11}, occurred {} times",
            self.stats.max_abs_error as f64, self.stats.out_of_range
        )
    }
}
