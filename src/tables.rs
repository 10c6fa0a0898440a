//! Derivation of the constant tables consumed by [crate::HybridCordic]

use crate::config::CordicConfig;
use crate::error::ConfigError;

use conv::{ConvUtil, RoundToPosInf, RoundToZero};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use unzip3::Unzip3;

/// Immutable tables derived once from a [CordicConfig]
///
/// The lookup table replaces the first CORDIC iterations: it stores gain-compensated sines of
/// the midpoints of `table_size` cells covering a quarter turn. The remaining angle is resolved by
/// `cordic_reps` rotations with the steps from [CordicTables::angle_steps] and right shifts from
/// [CordicTables::shift_amounts].
#[derive(Clone, Debug, PartialEq)]
pub struct CordicTables {
    config: CordicConfig,
    cordic_start: f64,
    start_shift: i32,
    gain: f64,
    angle_steps: Vec<i64>,
    shift_amounts: Vec<u32>,
    quarter_table: Vec<i64>,
}

fn truncate(quantity: &'static str, value: f64) -> Result<i64, ConfigError> {
    value
        .approx_as_by::<i64, RoundToZero>()
        .map_err(|_| ConfigError::Unrepresentable { quantity, value })
}

impl CordicTables {
    pub fn derive(config: CordicConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let table_size = config.table_size();
        let table_angle = FRAC_PI_2 / table_size as f64;
        let half_table_angle = table_angle / 2.0;

        // Number of leading CORDIC iterations covered by the table
        let cordic_start = half_table_angle.atan().log2();
        let start_shift = cordic_start
            .approx_as_by::<i32, RoundToPosInf>()
            .map_err(|_| ConfigError::Unrepresentable {
                quantity: "start shift",
                value: cordic_start,
            })?;
        log::info!("Starting CORDIC at least {cordic_start:.11} => {start_shift} shifts");

        let full_circle = config.full_circle() as f64;
        let (angle_steps, shift_amounts, cosines): (Vec<_>, Vec<_>, Vec<f64>) = (0..config
            .cordic_reps)
            .map(|i| -> Result<_, ConfigError> {
                let angle = (1.0 / 2.0_f64.powi(i as i32 - start_shift)).atan();
                let scaled =
                    full_circle * angle / (2.0 * PI) * 2.0_f64.powi((config.z_extra_bits + i) as i32);
                let step = truncate("angle step", scaled)?
                    .checked_add(config.angle_step_bias)
                    .ok_or(ConfigError::Unrepresentable {
                        quantity: "biased angle step",
                        value: scaled,
                    })?;
                Ok((step, config.index_bits + i, angle.cos()))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?
            .into_iter()
            .unzip3();
        let gain: f64 = cosines.iter().product();

        let table_magnitude =
            config.output_scale as f64 * gain * 2.0_f64.powi(config.output_extra_bits as i32);
        let rounding = 2.0_f64.powi(config.output_extra_bits as i32 - 1);
        let quarter_table = (0..table_size)
            .map(|idx| {
                let sin = (table_angle * idx as f64 + half_table_angle).sin();
                truncate("quarter table entry", table_magnitude * sin - rounding)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let tables = Self {
            config,
            cordic_start,
            start_shift,
            gain,
            angle_steps,
            shift_amounts,
            quarter_table,
        };
        if tables.is_degenerate() {
            log::warn!(
                "all {} angle steps are equal to {}, a constant can be used",
                tables.angle_steps.len(),
                tables.angle_steps[0],
            );
        }
        Ok(tables)
    }

    pub fn config(&self) -> &CordicConfig {
        &self.config
    }

    /// Unrounded `log2(atan(half_table_angle))`
    pub fn cordic_start(&self) -> f64 {
        self.cordic_start
    }

    /// `ceil(cordic_start)`, the exponent of the first rotation step
    pub fn start_shift(&self) -> i32 {
        self.start_shift
    }

    /// Product of the cosines of all rotation steps, compensated by the quarter table
    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn angle_steps(&self) -> &[i64] {
        &self.angle_steps
    }

    pub fn shift_amounts(&self) -> &[u32] {
        &self.shift_amounts
    }

    pub fn quarter_table(&self) -> &[i64] {
        &self.quarter_table
    }

    /// Starting vector for the table cell `index`
    ///
    /// The cell and its mirror `table_size - 1 - index` give cosine and sine of the cell midpoint,
    /// their roles swap in the mirrored half of a quadrant.
    pub fn seed(&self, index: usize, mirrored: bool) -> (i64, i64) {
        let direct = self.quarter_table[index];
        let complement = self.quarter_table[self.quarter_table.len() - 1 - index];
        if mirrored {
            (direct, complement)
        } else {
            (complement, direct)
        }
    }

    /// All angle steps are equal, hardware can use a single constant instead of the table
    pub fn is_degenerate(&self) -> bool {
        self.angle_steps.first() == self.angle_steps.last()
    }

    pub fn report(&self) -> DerivationReport<'_> {
        DerivationReport { tables: self }
    }
}

const BANNER: &str =
    "!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!";

/// Human-readable summary of [CordicTables] derivation
pub struct DerivationReport<'a> {
    tables: &'a CordicTables,
}

impl fmt::Display for DerivationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Starting CORDIC at least {:13.11} => {} shifts",
            self.tables.cordic_start, self.tables.start_shift
        )?;
        for (i, step) in self.tables.angle_steps.iter().enumerate() {
            writeln!(f, "angle[{i}] = {step}")?;
        }
        if self.tables.is_degenerate() {
            writeln!(f, "{BANNER}")?;
            writeln!(
                f,
                "!! NOTE = All entries in 'angles' are the same, so a constant can be used     !!!"
            )?;
            writeln!(f, "{BANNER}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}
