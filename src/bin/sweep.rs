//! Exhaustive validation of the reference hybrid CORDIC configuration

use hybrid_cordic::{ErrorStats, Validator, reference_tables};

const LARGE_DOMAIN_BANNER: &str = "\
!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!
!! INPUT_BITS is very large, so this may take a long time to prove all test cases
!! Please wait........................
!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!";

#[cfg(not(feature = "parallel"))]
fn sweep(validator: &Validator) -> ErrorStats {
    validator.sweep_all(|exceedance| println!("{}", exceedance.trace()))
}

#[cfg(feature = "parallel")]
fn sweep(validator: &Validator) -> ErrorStats {
    let full_circle = validator.engine().tables().config().full_circle();
    let (stats, exceedances) = validator.par_sweep(0..full_circle);
    for exceedance in exceedances {
        println!("{}", exceedance.trace());
    }
    stats
}

fn main() {
    let tables = reference_tables();
    print!("{}", tables.report());

    let validator = Validator::new(tables);
    if validator.is_large_domain() {
        println!("{LARGE_DOMAIN_BANNER}");
    }
    let stats = sweep(&validator);
    println!("{}", validator.report(stats));
}
