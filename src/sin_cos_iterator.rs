//! Sine-cosine iterators over sequences of phases

use crate::engine::{HybridCordic, SinCos};

pub enum SinCosIterator<'a, 't> {
    LinearGrid(LinearSinCos<'t>),
    Values(ValueSinCosIterator<'a, 't>),
}

impl<'a, 't> SinCosIterator<'a, 't> {
    pub fn from_phases(engine: HybridCordic<'t>, iter: impl Iterator<Item = u64> + 'a) -> Self {
        Self::Values(ValueSinCosIterator::new(engine, iter))
    }

    pub fn from_linear_grid(engine: HybridCordic<'t>, first: u64, step: u64) -> Self {
        Self::LinearGrid(LinearSinCos::new(engine, first, step))
    }
}

impl Iterator for SinCosIterator<'_, '_> {
    type Item = (u64, SinCos);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SinCosIterator::LinearGrid(iter) => iter.next(),
            SinCosIterator::Values(iter) => iter.next(),
        }
    }
}

pub struct ValueSinCosIterator<'a, 't> {
    engine: HybridCordic<'t>,
    phase_iter: Box<dyn Iterator<Item = u64> + 'a>,
}

impl<'a, 't> ValueSinCosIterator<'a, 't> {
    pub fn new(engine: HybridCordic<'t>, phase_iter: impl Iterator<Item = u64> + 'a) -> Self {
        Self {
            engine,
            phase_iter: Box::new(phase_iter),
        }
    }
}

impl Iterator for ValueSinCosIterator<'_, '_> {
    type Item = (u64, SinCos);

    fn next(&mut self) -> Option<Self::Item> {
        self.phase_iter
            .next()
            .map(|phase| (phase, self.engine.sin_cos(phase)))
    }
}

impl<'t> From<LinearSinCos<'t>> for SinCosIterator<'static, 't> {
    fn from(sin_cos: LinearSinCos<'t>) -> Self {
        Self::LinearGrid(sin_cos)
    }
}

impl<'a, 't> From<ValueSinCosIterator<'a, 't>> for SinCosIterator<'a, 't> {
    fn from(sin_cos: ValueSinCosIterator<'a, 't>) -> Self {
        Self::Values(sin_cos)
    }
}

/// Infinite iterator over sin/cos of `first + k * step` phases
///
/// Phases wrap around the full circle, so a grid with `step` coprime to the full circle visits
/// every phase once per `full_circle` items.
pub struct LinearSinCos<'t> {
    engine: HybridCordic<'t>,
    current: u64,
    step: u64,
    mask: u64,
}

impl<'t> LinearSinCos<'t> {
    pub fn new(engine: HybridCordic<'t>, first: u64, step: u64) -> Self {
        let mask = engine.tables().config().full_circle() - 1;
        Self {
            engine,
            current: first & mask,
            step: step & mask,
            mask,
        }
    }

    pub fn with_zero_first(engine: HybridCordic<'t>, step: u64) -> Self {
        Self::new(engine, 0, step)
    }
}

impl Iterator for LinearSinCos<'_> {
    type Item = (u64, SinCos);

    fn next(&mut self) -> Option<Self::Item> {
        let phase = self.current;
        self.current = self.current.wrapping_add(self.step) & self.mask;
        Some((phase, self.engine.sin_cos(phase)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tests::compact_tables;

    use itertools::Itertools;

    #[test]
    fn linear_grid_wraps() {
        let tables = compact_tables();
        let engine = HybridCordic::new(&tables);
        let phases: Vec<_> = LinearSinCos::new(engine, 65530, 4)
            .take(4)
            .map(|(phase, _)| phase)
            .collect();
        assert_eq!(phases, [65530, 65534, 2, 6]);
    }

    #[test]
    fn linear_grid_visits_every_phase() {
        let tables = compact_tables();
        let engine = HybridCordic::new(&tables);
        let full_circle = tables.config().full_circle() as usize;
        let phases: Vec<_> = LinearSinCos::with_zero_first(engine, 40503)
            .take(full_circle)
            .map(|(phase, _)| phase)
            .collect();
        assert!(phases.iter().all_unique());
    }

    #[test]
    fn linear_grid_and_values_agree() {
        let tables = compact_tables();
        let engine = HybridCordic::new(&tables);
        let linear: Vec<_> = SinCosIterator::from_linear_grid(engine, 17, 1021)
            .take(100)
            .collect();
        let values: Vec<_> =
            SinCosIterator::from_phases(engine, linear.iter().map(|&(phase, _)| phase)).collect();
        assert_eq!(linear, values);
        for (phase, sin_cos) in values {
            assert_eq!(sin_cos, engine.sin_cos(phase));
        }
    }

    #[test]
    fn from_conversions() {
        let tables = compact_tables();
        let engine = HybridCordic::new(&tables);
        let linear: SinCosIterator = LinearSinCos::with_zero_first(engine, 1).into();
        assert!(matches!(linear, SinCosIterator::LinearGrid(_)));
        let values: SinCosIterator = ValueSinCosIterator::new(engine, 0..3).into();
        assert_eq!(values.count(), 3);
    }
}
