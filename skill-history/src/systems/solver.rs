//! Skillset rating from the population of a player's score values.
//!
//! Each score gets a "power" that grows sharply once its value exceeds a candidate rating.
//! A rating is okay when the summed power stays under a budget that itself grows
//! exponentially with the rating, and the player's rating is the lowest okay one.
use crate::numerical::{MAX_POWER, erfc, round_to_decimals, solve_forward_scan};

pub const INITIAL_RESOLUTION: f64 = 10.24;
pub const MIN_RESOLUTION: f64 = 0.01;
/// Applied to the solved rating before rounding.
pub const RATING_SCALE: f64 = 1.04;

/// Contribution of one score with the given value to the power sum at `rating`.
/// Exactly zero for values at or below `rating`, and never more than `MAX_POWER`.
pub fn power(value: f64, rating: f64) -> f64 {
    let erfc = erfc(0.1 * (value - rating));
    if erfc * MAX_POWER <= 2. {
        MAX_POWER
    } else {
        (2. / erfc - 2.).max(0.)
    }
}

pub fn power_sum(values: &[f64], rating: f64) -> f64 {
    values.iter().map(|&value| power(value, rating)).sum()
}

pub fn is_rating_okay(rating: f64, values: &[f64]) -> bool {
    power_sum(values, rating) < 2f64.powf(0.1 * rating)
}

/// Finds the lowest okay rating with a coarse-to-fine forward scan starting from zero,
/// then scales and rounds it to two decimals. An empty slice rates exactly 0.
pub fn find_skillset_rating(values: &[f64]) -> f64 {
    let rating = solve_forward_scan(0., INITIAL_RESOLUTION, MIN_RESOLUTION, |rating| {
        is_rating_okay(rating, values)
    });
    round_to_decimals(rating * RATING_SCALE, 2)
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    // Maps arbitrary integers onto the 0-60 range that realistic skillset values occupy
    fn to_values(raw: &[u16]) -> Vec<f64> {
        raw.iter().map(|&x| (x % 6000) as f64 / 100.).collect()
    }

    #[test]
    fn test_empty_values_rate_zero() {
        assert_eq!(power_sum(&[], 25.), 0.);
        assert_eq!(find_skillset_rating(&[]), 0.0);
    }

    #[test]
    fn test_power_vanishes_below_rating() {
        assert_eq!(power(10., 10.), 0.);
        assert_eq!(power(3., 10.), 0.);
        assert!(power(20., 10.) > 9.);
    }

    #[test]
    fn test_power_is_clamped_when_erfc_underflows() {
        assert_eq!(power(1e6, 0.), MAX_POWER);
        assert_eq!(power(f64::INFINITY, 0.), MAX_POWER);
        assert!(power_sum(&[1e6; 1000], 0.).is_finite());
        assert_eq!(power(f64::NAN, 0.), 0.);
    }

    #[test]
    fn test_single_value_rates_below_itself() {
        let rating = find_skillset_rating(&[20.]);
        assert!(rating > 10. && rating < 20., "rating = {}", rating);
    }

    #[test]
    fn test_more_good_scores_raise_the_rating() {
        let one = find_skillset_rating(&[25.]);
        let many = find_skillset_rating(&[25.; 20]);
        assert!(many > one, "{} <= {}", many, one);
    }

    #[test]
    fn test_huge_values_stay_finite() {
        let rating = find_skillset_rating(&[1e6]);
        assert!(rating.is_finite() && rating > 0.);
        let rating = find_skillset_rating(&[f64::INFINITY, 20.]);
        assert!(rating.is_finite() && rating > 0.);
    }

    #[test]
    fn test_rating_has_two_decimals() {
        let rating = find_skillset_rating(&[17.3, 22.9, 30.1, 12.0]);
        assert!((rating * 100. - (rating * 100.).round()).abs() < 1e-6);
    }

    #[quickcheck]
    fn adding_a_value_never_lowers_the_rating(raw: Vec<u16>, extra: u16) -> bool {
        let values = to_values(&raw);
        let mut extended = values.clone();
        extended.extend(to_values(&[extra]));
        find_skillset_rating(&extended) >= find_skillset_rating(&values)
    }

    #[quickcheck]
    fn identical_values_give_identical_ratings(raw: Vec<u16>) -> bool {
        let values = to_values(&raw);
        find_skillset_rating(&values) == find_skillset_rating(&values.clone())
    }
}
