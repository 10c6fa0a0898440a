//! Hybrid lookup table + modified CORDIC rotation

use crate::phase::{PhaseParts, Quadrant};
use crate::tables::CordicTables;

use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// Scaled fixed-point sine and cosine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SinCos {
    pub sin: i64,
    pub cos: i64,
}

/// State of the rotation vector and the residual angle accumulator
///
/// `sin` and `cos` are taken before the quadrant sign correction and still carry the
/// `output_extra_bits` guard bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationStep {
    pub sin: i64,
    pub cos: i64,
    pub z: i64,
}

/// Fixed-point sine-cosine calculator over derived [CordicTables]
#[derive(Clone, Copy, Debug)]
pub struct HybridCordic<'t> {
    tables: &'t CordicTables,
}

impl<'t> HybridCordic<'t> {
    pub fn new(tables: &'t CordicTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'t CordicTables {
        self.tables
    }

    /// Lazy rotation sequence for `phase`, see [Rotation]
    pub fn rotation(&self, phase: u64) -> Rotation<'t> {
        let config = self.tables.config();
        let parts = PhaseParts::decompose(config, phase);
        let (x, y) = self.tables.seed(parts.index, parts.quadrant.is_mirrored());
        Rotation {
            tables: self.tables,
            quadrant: parts.quadrant,
            x,
            y,
            z: parts.centred_residual(config),
            step: 0,
        }
    }

    /// `output_scale * (sin, cos)` of `2 pi phase / full_circle`
    pub fn sin_cos(&self, phase: u64) -> SinCos {
        self.rotation(phase).finish()
    }
}

/// Iterator over the CORDIC steps of a single phase
///
/// It yields the state after each of `cordic_reps` rotations, the state before the first rotation
/// is available from [Rotation::seed]. Every call of [HybridCordic::rotation] starts over.
#[derive(Clone, Debug)]
pub struct Rotation<'t> {
    tables: &'t CordicTables,
    quadrant: Quadrant,
    x: i64,
    y: i64,
    z: i64,
    step: usize,
}

impl Rotation<'_> {
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Current state, before the first rotation it is the seed from the quarter table
    pub fn state(&self) -> RotationStep {
        RotationStep {
            sin: self.y,
            cos: self.x,
            z: self.z,
        }
    }

    /// State before any rotation, `None` once iteration has started
    pub fn seed(&self) -> Option<RotationStep> {
        (self.step == 0).then(|| self.state())
    }

    pub fn is_done(&self) -> bool {
        self.step == self.tables.angle_steps().len()
    }

    /// Quadrant-corrected output of the current state
    pub fn output(&self) -> SinCos {
        let extra_bits = self.tables.config().output_extra_bits;
        let cos = if self.quadrant.flips_cos() { -self.x } else { self.x };
        let sin = if self.quadrant.flips_sin() { -self.y } else { self.y };
        SinCos {
            sin: sin >> extra_bits,
            cos: cos >> extra_bits,
        }
    }

    /// Run the remaining rotations and return the output
    pub fn finish(mut self) -> SinCos {
        self.by_ref().for_each(drop);
        self.output()
    }
}

impl Iterator for Rotation<'_> {
    type Item = RotationStep;

    fn next(&mut self) -> Option<Self::Item> {
        let angle = *self.tables.angle_steps().get(self.step)?;
        let shift = self.tables.shift_amounts()[self.step];
        let tx = self.x >> shift;
        let ty = self.y >> shift;
        if self.z < 0 {
            self.x += ty;
            self.y -= tx;
            self.z += angle;
        } else {
            self.x -= ty;
            self.y += tx;
            self.z -= angle;
        }
        // The accumulator is doubled instead of the steps being halved
        self.z <<= 1;
        self.step += 1;
        Some(self.state())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tables.angle_steps().len() - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rotation<'_> {}

impl FusedIterator for Rotation<'_> {}
