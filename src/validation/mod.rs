//! Exhaustive comparison of [HybridCordic] against the `f64` sine and cosine

use crate::engine::{HybridCordic, SinCos};
use crate::sin_cos_iterator::SinCosIterator;
use crate::tables::CordicTables;

use std::f64::consts::PI;
use std::fmt;

mod stats;
pub use stats::{ErrorStats, ValidationReport};

/// Sweeps over more phases than this take noticeable time
pub const LARGE_DOMAIN: u64 = 20_000_000;

/// Engine output for a single phase together with the `f64` reference
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub phase: u64,
    pub output: SinCos,
    pub reference: SinCos,
}

impl Sample {
    pub fn sin_error(&self) -> i64 {
        self.output.sin - self.reference.sin
    }

    pub fn cos_error(&self) -> i64 {
        self.output.cos - self.reference.cos
    }

    /// Either error is at least `max_error` in magnitude
    pub fn exceeds(&self, max_error: f64) -> bool {
        [self.sin_error(), self.cos_error()]
            .into_iter()
            .any(|error| error.unsigned_abs() as f64 >= max_error)
    }
}

/// Sample whose error reached the configured `max_error`
#[derive(Clone, Copy, Debug)]
pub struct Exceedance<'t> {
    pub sample: Sample,
    engine: HybridCordic<'t>,
}

impl<'t> Exceedance<'t> {
    /// Step-by-step rotation of the offending phase, computed anew on every call
    pub fn trace(&self) -> Trace<'t> {
        Trace {
            sample: self.sample,
            engine: self.engine,
        }
    }
}

/// Printable rotation trace of a single phase
///
/// Renders the seed vector and the vector with the residual angle after every iteration, followed
/// by the result and its errors.
pub struct Trace<'t> {
    sample: Sample,
    engine: HybridCordic<'t>,
}

impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rotation = self.engine.rotation(self.sample.phase);
        writeln!(f, "      SIN        COS        Z")?;
        for row in rotation.seed().into_iter().chain(rotation) {
            writeln!(f, "{:10}, {:10}, {:10}", row.sin, row.cos, row.z)?;
        }
        writeln!(
            f,
            "{:10}  => {:10}, {:10}  (error {:10.6}, {:10.6})",
            self.sample.phase,
            self.sample.output.sin,
            self.sample.output.cos,
            self.sample.sin_error() as f64,
            self.sample.cos_error() as f64,
        )
    }
}

/// Validation harness over derived [CordicTables]
#[derive(Clone, Copy, Debug)]
pub struct Validator<'t> {
    engine: HybridCordic<'t>,
}

impl<'t> Validator<'t> {
    pub fn new(tables: &'t CordicTables) -> Self {
        Self {
            engine: HybridCordic::new(tables),
        }
    }

    pub fn engine(&self) -> HybridCordic<'t> {
        self.engine
    }

    /// `trunc(output_scale * (sin, cos)(2 pi phase / full_circle) - 0.5)`
    ///
    /// Bits above the phase width are ignored, as they are by the engine.
    pub fn reference(&self, phase: u64) -> SinCos {
        let config = self.engine.tables().config();
        let phase = phase & (config.full_circle() - 1);
        let angle = phase as f64 * (2.0 * PI / config.full_circle() as f64);
        let scale = config.output_scale as f64;
        let (sin, cos) = angle.sin_cos();
        // Within i64 range for every valid configuration
        SinCos {
            sin: (sin * scale - 0.5).trunc() as i64,
            cos: (cos * scale - 0.5).trunc() as i64,
        }
    }

    pub fn sample(&self, phase: u64) -> Sample {
        self.compare(phase, self.engine.sin_cos(phase))
    }

    fn compare(&self, phase: u64, output: SinCos) -> Sample {
        Sample {
            phase,
            output,
            reference: self.reference(phase),
        }
    }

    /// The full sweep has more than [LARGE_DOMAIN] phases
    pub fn is_large_domain(&self) -> bool {
        self.engine.tables().config().full_circle() > LARGE_DOMAIN
    }

    /// Compare every phase of `phases`, calling `on_exceedance` for each sample reaching
    /// `max_error`
    pub fn sweep<'a, I, F>(&self, phases: I, on_exceedance: F) -> ErrorStats
    where
        I: IntoIterator<Item = u64>,
        I::IntoIter: 'a,
        F: FnMut(&Exceedance<'t>),
    {
        self.sweep_outputs(
            SinCosIterator::from_phases(self.engine, phases.into_iter()),
            on_exceedance,
        )
    }

    /// [Validator::sweep] over `(phase, output)` pairs of this engine, e.g. a [SinCosIterator]
    pub fn sweep_outputs<O, F>(&self, outputs: O, mut on_exceedance: F) -> ErrorStats
    where
        O: IntoIterator<Item = (u64, SinCos)>,
        F: FnMut(&Exceedance<'t>),
    {
        let max_error = self.engine.tables().config().max_error;
        let mut stats = ErrorStats::default();
        for (phase, output) in outputs {
            let sample = self.compare(phase, output);
            let exceeds = sample.exceeds(max_error);
            stats.push(&sample, exceeds);
            if exceeds {
                log::debug!(
                    "phase {phase} error {}, {}",
                    sample.sin_error(),
                    sample.cos_error()
                );
                on_exceedance(&Exceedance {
                    sample,
                    engine: self.engine,
                });
            }
        }
        log::info!(
            "swept {} phases, max error {}, {} out of range",
            stats.count,
            stats.max_abs_error,
            stats.out_of_range
        );
        stats
    }

    /// [Validator::sweep] over every representable phase
    pub fn sweep_all<F>(&self, on_exceedance: F) -> ErrorStats
    where
        F: FnMut(&Exceedance<'t>),
    {
        self.sweep(0..self.engine.tables().config().full_circle(), on_exceedance)
    }

    /// Parallel [Validator::sweep], exceedances are returned in phase order
    #[cfg(feature = "parallel")]
    pub fn par_sweep(&self, phases: std::ops::Range<u64>) -> (ErrorStats, Vec<Exceedance<'t>>) {
        use rayon::prelude::*;

        let max_error = self.engine.tables().config().max_error;
        let (stats, mut samples) = phases
            .into_par_iter()
            .fold(
                || (ErrorStats::default(), vec![]),
                |(mut stats, mut samples), phase| {
                    let sample = self.sample(phase);
                    let exceeds = sample.exceeds(max_error);
                    stats.push(&sample, exceeds);
                    if exceeds {
                        samples.push(sample);
                    }
                    (stats, samples)
                },
            )
            .reduce(
                || (ErrorStats::default(), vec![]),
                |(stats_a, mut samples_a), (stats_b, samples_b)| {
                    samples_a.extend(samples_b);
                    (stats_a.merge(stats_b), samples_a)
                },
            );
        samples.sort_unstable_by_key(|sample| sample.phase);
        let exceedances = samples
            .into_iter()
            .map(|sample| Exceedance {
                sample,
                engine: self.engine,
            })
            .collect();
        (stats, exceedances)
    }

    pub fn report(&self, stats: ErrorStats) -> ValidationReport {
        ValidationReport {
            stats,
            output_scale: self.engine.tables().config().output_scale,
        }
    }
}
