use crate::error::ConfigError;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Widest lookup table index, the table holds `2^MAX_INDEX_BITS` entries
pub const MAX_INDEX_BITS: u32 = 24;

/// Widest phase, every phase must be exactly representable by `f64` for the reference
pub const MAX_INPUT_BITS: u32 = f64::MANTISSA_DIGITS;

/// Bits of `i64` usable by the accumulators, one bit is kept for sign and one for carries
const ACCUMULATOR_BITS: u32 = i64::BITS - 2;

/// Bit-width configuration of the hybrid lookup + CORDIC sine-cosine
///
/// The phase is an unsigned integer of `2 + index_bits + cordic_bits` bits representing a
/// fraction of the full turn: two quadrant bits, `index_bits` resolved by the lookup table and
/// `cordic_bits` resolved by `cordic_reps` rotations.
///
/// [Default] gives the reference configuration: a 32-bit phase and a `2^31` output scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CordicConfig {
    /// Number of phase bits resolved by the lookup table
    pub index_bits: u32,
    /// Number of phase bits resolved by the CORDIC iteration
    pub cordic_bits: u32,
    /// Number of CORDIC iterations
    pub cordic_reps: u32,
    /// Positive full-scale magnitude of the sine and cosine outputs
    pub output_scale: i64,
    /// Guard bits carried by the rotation vector and shifted out of the result
    pub output_extra_bits: u32,
    /// Guard bits carried by the residual angle accumulator
    pub z_extra_bits: u32,
    /// Error threshold, in output units, above which a sample is reported
    pub max_error: f64,
    /// Constant added to every truncated angle step
    ///
    /// The value of `1` is tuned against the reference configuration, re-validate it with a sweep
    /// when the configuration changes.
    pub angle_step_bias: i64,
}

impl CordicConfig {
    pub const REFERENCE: Self = Self {
        index_bits: 11,
        cordic_bits: 19,
        cordic_reps: 24,
        output_scale: 1 << 31,
        output_extra_bits: 4,
        z_extra_bits: 2,
        max_error: 3.0,
        angle_step_bias: 1,
    };

    /// Reference configuration: 32-bit phase, 2048-entry table, 24 iterations
    pub fn reference() -> Self {
        Self::REFERENCE
    }

    /// 16-bit phase and 16-bit output, small enough to sweep exhaustively in milliseconds
    pub fn compact() -> Self {
        Self {
            index_bits: 6,
            cordic_bits: 8,
            cordic_reps: 12,
            output_scale: 1 << 15,
            ..Self::REFERENCE
        }
    }

    /// Total phase width: two quadrant bits, table index and CORDIC residual
    pub fn input_bits(&self) -> u32 {
        2 + self.index_bits + self.cordic_bits
    }

    /// Number of distinct phases, the phase of a full turn
    pub fn full_circle(&self) -> u64 {
        1 << self.input_bits()
    }

    /// Number of entries in the quarter table
    pub fn table_size(&self) -> usize {
        1 << self.index_bits
    }

    /// Residual accumulator value at the middle of a table cell
    pub fn target(&self) -> i64 {
        1 << (self.cordic_bits + self.z_extra_bits - 1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("index_bits", self.index_bits),
            ("cordic_bits", self.cordic_bits),
            ("cordic_reps", self.cordic_reps),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroWidth { field });
            }
        }
        if self.index_bits > MAX_INDEX_BITS {
            return Err(ConfigError::TableTooLarge {
                actual: self.index_bits,
                maximum: MAX_INDEX_BITS,
            });
        }
        let input_bits = self.index_bits.saturating_add(self.cordic_bits) + 2;
        if input_bits > MAX_INPUT_BITS {
            return Err(ConfigError::PhaseTooWide {
                actual: input_bits,
                maximum: MAX_INPUT_BITS,
            });
        }
        let widest_shift = self.index_bits.saturating_add(self.cordic_reps);
        if widest_shift > i64::BITS {
            return Err(ConfigError::ShiftOverflow {
                actual: widest_shift,
            });
        }
        if self.output_scale <= 0 {
            return Err(ConfigError::NonPositiveScale(self.output_scale));
        }
        let output_bits = (i64::BITS - self.output_scale.leading_zeros())
            .saturating_add(self.output_extra_bits)
            .saturating_add(1);
        if output_bits > ACCUMULATOR_BITS {
            return Err(ConfigError::OutputOverflow {
                required: output_bits,
                available: ACCUMULATOR_BITS,
            });
        }
        let residual_bits = self
            .cordic_bits
            .saturating_add(self.z_extra_bits)
            .saturating_add(2);
        if residual_bits > ACCUMULATOR_BITS {
            return Err(ConfigError::ResidualOverflow {
                required: residual_bits,
                available: ACCUMULATOR_BITS,
            });
        }
        let target = self.target();
        if self.angle_step_bias.unsigned_abs() > target.unsigned_abs() {
            return Err(ConfigError::BiasOverflow {
                bias: self.angle_step_bias,
                maximum: target,
            });
        }
        if !(self.max_error.is_finite() && self.max_error > 0.0) {
            return Err(ConfigError::InvalidMaxError(self.max_error));
        }
        Ok(())
    }
}

impl Default for CordicConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}
