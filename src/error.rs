/// Error returned from [crate::CordicConfig::validate] and [crate::CordicTables::derive]
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive")]
    ZeroWidth { field: &'static str },

    #[error("index_bits {actual} exceeds the maximum lookup table width {maximum}")]
    TableTooLarge { actual: u32, maximum: u32 },

    #[error("input phase width {actual} exceeds the maximum supported width {maximum}")]
    PhaseTooWide { actual: u32, maximum: u32 },

    #[error("index_bits + cordic_reps = {actual} produces shift amounts wider than 63 bits")]
    ShiftOverflow { actual: u32 },

    #[error("output_scale must be positive, got {0}")]
    NonPositiveScale(i64),

    #[error("rotation vector needs {required} bits, only {available} bits of headroom available")]
    OutputOverflow { required: u32, available: u32 },

    #[error("residual angle accumulator needs {required} bits, only {available} bits of headroom available")]
    ResidualOverflow { required: u32, available: u32 },

    #[error("angle_step_bias {bias} exceeds the residual accumulator target {maximum} in magnitude")]
    BiasOverflow { bias: i64, maximum: i64 },

    #[error("max_error must be finite and positive, got {0}")]
    InvalidMaxError(f64),

    #[error("{quantity} value {value} is not representable as an integer")]
    Unrepresentable { quantity: &'static str, value: f64 },
}
