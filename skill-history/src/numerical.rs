/// Upper bound on a single score's power. `2 / erfc(z)` diverges once `erfc` underflows,
/// so anything past this point is treated as this (finite) value instead.
pub const MAX_POWER: f64 = 1e150;

pub fn erfc(x: f64) -> f64 {
    statrs::function::erf::erfc(x)
}

/// Rounds half away from zero to the given number of decimal places.
pub fn round_to_decimals(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}

/// Coarse-to-fine forward scan for the lowest `x >= start` at which `is_okay` holds,
/// assuming a single crossover from not-okay to okay.
///
/// At each resolution, `x` is pushed forward in steps as long as the next step would still
/// not be okay; then the resolution is halved. The result therefore always sits just below
/// the crossover, within the final resolution.
pub fn solve_forward_scan(
    start: f64,
    mut resolution: f64,
    min_resolution: f64,
    is_okay: impl Fn(f64) -> bool,
) -> f64 {
    let mut x = start;
    while resolution > min_resolution {
        while !is_okay(x + resolution) {
            x += resolution;
        }
        resolution *= 0.5;
    }
    x
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(1.234, 2), 1.23);
        assert_eq!(round_to_decimals(1.236, 2), 1.24);
        assert_eq!(round_to_decimals(-0.004, 2), 0.0);
        assert_eq!(round_to_decimals(45.0, 2), 45.0);
    }

    #[test]
    fn test_erfc_limits() {
        assert!((erfc(0.) - 1.).abs() < 1e-12);
        assert!(erfc(-30.) > 1.999);
        assert!(erfc(30.) < 1e-300);
    }

    #[test]
    fn test_forward_scan_stops_below_threshold() {
        let threshold = 7.3;
        let x = solve_forward_scan(0., 10.24, 0.01, |x| x >= threshold);
        assert!(x < threshold);
        assert!(threshold - x < 0.03);
    }

    #[test]
    fn test_forward_scan_always_okay() {
        assert_eq!(solve_forward_scan(0., 10.24, 0.01, |_| true), 0.);
    }
}
