pub use crate::config::CordicConfig;
pub use crate::engine::{HybridCordic, SinCos};
pub use crate::tables::CordicTables;
pub use crate::validation::Validator;

/// [CordicConfig::compact], every phase is within one LSB of the reference
pub fn compact_tables() -> CordicTables {
    CordicTables::derive(CordicConfig::compact()).unwrap()
}

/// Too few iterations for its table, many phases exceed `max_error`
pub fn coarse_config() -> CordicConfig {
    CordicConfig {
        index_bits: 4,
        cordic_bits: 8,
        cordic_reps: 10,
        ..CordicConfig::compact()
    }
}

pub fn coarse_tables() -> CordicTables {
    CordicTables::derive(coarse_config()).unwrap()
}

/// Non-degenerate steps with extra residual guard bits
pub fn non_degenerate_config() -> CordicConfig {
    CordicConfig {
        index_bits: 5,
        cordic_bits: 9,
        cordic_reps: 13,
        z_extra_bits: 4,
        ..CordicConfig::compact()
    }
}

/// Reflection of `phase` about the quarter turn, `full_circle / 2 - phase`
pub fn reflect(config: &CordicConfig, phase: u64) -> u64 {
    (config.full_circle() / 2).wrapping_sub(phase) & (config.full_circle() - 1)
}

/// Sweep every phase of `$config` and check the error aggregates
#[macro_export]
macro_rules! sweep_test {
    ($name: ident, $config: expr_2021, max_abs_error: $max: expr_2021, out_of_range: $oor: expr_2021 $(,)?) => {
        #[test]
        fn $name() {
            let tables = CordicTables::derive($config).unwrap();
            let validator = Validator::new(&tables);
            let config = tables.config();
            let mut exceedances = 0_u64;
            let stats = validator.sweep_all(|_| exceedances += 1);
            assert_eq!(stats.count, config.full_circle());
            assert_eq!(stats.max_abs_error, $max, "max_abs_error");
            assert_eq!(stats.out_of_range, $oor, "out_of_range");
            assert_eq!(exceedances, stats.out_of_range);

            let engine = validator.engine();
            for phase in 0..config.full_circle() {
                let SinCos { sin, cos } = engine.sin_cos(phase);
                let magnitude = ((sin * sin + cos * cos) as f64).sqrt();
                assert!(
                    (magnitude - config.output_scale as f64).abs() < 4.0,
                    "phase {phase}: |({sin}, {cos})| = {magnitude}",
                );

                let mirror = engine.sin_cos(reflect(config, phase));
                assert!((mirror.sin - sin).abs() <= 4, "phase {phase}: sin {sin} vs {}", mirror.sin);
                assert!((mirror.cos + cos).abs() <= 5, "phase {phase}: cos {cos} vs {}", mirror.cos);
            }
        }
    };
}

sweep_test!(
    compact_sweep,
    CordicConfig::compact(),
    max_abs_error: 1,
    out_of_range: 0,
);

sweep_test!(
    non_degenerate_sweep,
    non_degenerate_config(),
    max_abs_error: 1,
    out_of_range: 0,
);

sweep_test!(
    coarse_sweep,
    coarse_config(),
    max_abs_error: 7,
    out_of_range: 7600,
);

#[test]
fn reference_quadrant_symmetry() {
    let tables = crate::reference_tables();
    let engine = HybridCordic::new(tables);
    let config = tables.config();
    for phase in (0..config.full_circle()).step_by(1_000_003) {
        let SinCos { sin, cos } = engine.sin_cos(phase);
        let mirror = engine.sin_cos(reflect(config, phase));
        assert!((mirror.sin - sin).abs() <= 2, "phase {phase}");
        assert!((mirror.cos + cos).abs() <= 2, "phase {phase}");
    }
}

#[test]
fn reference_magnitude() {
    let tables = crate::reference_tables();
    let engine = HybridCordic::new(tables);
    let scale = tables.config().output_scale as f64;
    for phase in (0..tables.config().full_circle()).step_by(999_983) {
        let SinCos { sin, cos } = engine.sin_cos(phase);
        let magnitude = (sin as f64).hypot(cos as f64);
        assert!((magnitude - scale).abs() < 4.0, "phase {phase}: {magnitude}");
    }
}

#[test]
fn non_degenerate_tables() {
    let tables = CordicTables::derive(non_degenerate_config()).unwrap();
    assert!(!tables.is_degenerate());
    assert!(CordicTables::derive(coarse_config()).unwrap().is_degenerate());
}
