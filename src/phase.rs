//! Splitting of a fixed-point phase into quadrant, table index and residual angle

use crate::config::CordicConfig;

/// Quarter of the full turn selected by the two most significant phase bits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `[0, pi/2)`, bits `00`
    First,
    /// `[pi/2, pi)`, bits `01`
    Second,
    /// `[pi, 3pi/2)`, bits `10`
    Third,
    /// `[3pi/2, 2pi)`, bits `11`
    Fourth,
}

impl Quadrant {
    /// Quadrant from the two lowest bits of `bits`
    pub fn from_bits(bits: u64) -> Self {
        match bits & 0b11 {
            0b00 => Self::First,
            0b01 => Self::Second,
            0b10 => Self::Third,
            _ => Self::Fourth,
        }
    }

    /// Sine is negative in the lower half-plane
    pub fn flips_sin(self) -> bool {
        matches!(self, Self::Third | Self::Fourth)
    }

    /// Cosine is negative in the left half-plane
    pub fn flips_cos(self) -> bool {
        matches!(self, Self::Second | Self::Third)
    }

    /// Residual is measured from the end of the quadrant rather than from its start
    pub fn is_mirrored(self) -> bool {
        matches!(self, Self::Second | Self::Fourth)
    }
}

/// Fixed-point phase split into its bit fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseParts {
    pub quadrant: Quadrant,
    /// Lookup table cell, the middle `index_bits` bits
    pub index: usize,
    /// Angle left for the CORDIC iteration, the lowest `cordic_bits` bits
    pub residual: u64,
}

impl PhaseParts {
    /// Split `phase`, bits above `input_bits` are ignored
    pub fn decompose(config: &CordicConfig, phase: u64) -> Self {
        let index_shift = config.cordic_bits;
        let quadrant_shift = config.cordic_bits + config.index_bits;
        let index_mask = (1 << config.index_bits) - 1;
        let residual_mask = (1 << config.cordic_bits) - 1;
        Self {
            quadrant: Quadrant::from_bits(phase >> quadrant_shift),
            index: ((phase >> index_shift) & index_mask) as usize,
            residual: phase & residual_mask,
        }
    }

    /// Initial residual angle accumulator
    ///
    /// The residual is scaled by `z_extra_bits`, mirrored in the second and fourth quadrants and
    /// centred on the middle of the table cell, so the accumulator sign selects the first
    /// rotation direction.
    pub fn centred_residual(&self, config: &CordicConfig) -> i64 {
        let z = (self.residual as i64) << config.z_extra_bits;
        let z = if self.quadrant.is_mirrored() {
            (1 << (config.cordic_bits + config.z_extra_bits)) - z
        } else {
            z
        };
        z - config.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_sign_flips() {
        let flips: Vec<_> = (0..4)
            .map(Quadrant::from_bits)
            .map(|q| (q.flips_sin(), q.flips_cos(), q.is_mirrored()))
            .collect();
        assert_eq!(
            flips,
            [
                (false, false, false),
                (false, true, true),
                (true, true, false),
                (true, false, true),
            ]
        );
    }

    #[test]
    fn decompose_reference_fields() {
        let config = CordicConfig::reference();
        let phase = (0b10 << 30) | (1234 << 19) | 0x5_4321;
        let parts = PhaseParts::decompose(&config, phase);
        assert_eq!(parts.quadrant, Quadrant::Third);
        assert_eq!(parts.index, 1234);
        assert_eq!(parts.residual, 0x5_4321);
    }

    #[test]
    fn decompose_wraps_full_circle() {
        let config = CordicConfig::compact();
        let phase = 0x1234;
        assert_eq!(
            PhaseParts::decompose(&config, phase),
            PhaseParts::decompose(&config, phase + 7 * config.full_circle()),
        );
    }

    #[test]
    fn centred_residual_at_cell_boundaries() {
        let config = CordicConfig::compact();
        let target = config.target();
        let start = PhaseParts {
            quadrant: Quadrant::First,
            index: 0,
            residual: 0,
        };
        assert_eq!(start.centred_residual(&config), -target);

        let middle = PhaseParts {
            residual: 1 << (config.cordic_bits - 1),
            ..start
        };
        assert_eq!(middle.centred_residual(&config), 0);

        let mirrored = PhaseParts {
            quadrant: Quadrant::Second,
            ..start
        };
        assert_eq!(mirrored.centred_residual(&config), target);
    }
}
