use super::{Skillset, SkillsetView, find_skillset_rating};
use crate::data_processing::NUM_SKILLSETS;

/// Overall rating at index 0, followed by the rating of each skillset in [`Skillset::ALL`] order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingVector(pub [f64; NUM_SKILLSETS + 1]);

impl RatingVector {
    /// The overall rating is the mean of all skillset ratings except the lowest one.
    pub fn from_skillset_ratings(ratings: [f64; NUM_SKILLSETS]) -> Self {
        let sum: f64 = ratings.iter().sum();
        let min = ratings.iter().copied().fold(f64::INFINITY, f64::min);
        let overall = (sum - min) / (NUM_SKILLSETS - 1) as f64;

        let mut vector = [overall; NUM_SKILLSETS + 1];
        vector[1..].copy_from_slice(&ratings);
        Self(vector)
    }

    pub fn overall(&self) -> f64 {
        self.0[0]
    }

    pub fn skillset(&self, skillset: Skillset) -> f64 {
        self.0[skillset.index() + 1]
    }
}

/// Rates every skillset row of `view` and combines the results.
pub fn find_ratings(view: &SkillsetView) -> RatingVector {
    let ratings = Skillset::ALL.map(|skillset| find_skillset_rating(view.row(skillset)));
    let vector = RatingVector::from_skillset_ratings(ratings);

    if vector.overall() > 100. {
        let maxima: Vec<f64> = view
            .rows()
            .map(|row| row.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .collect();
        tracing::warn!(
            "Implausible overall rating {} from skillset maxima {:?}",
            vector.overall(),
            maxima
        );
    }
    vector
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::systems::SkillsetMatrix;

    #[test]
    fn test_lowest_skillset_is_dropped() {
        let vector = RatingVector::from_skillset_ratings([10., 20., 30., 40., 50., 60., 70.]);
        assert_eq!(vector.overall(), 45.0);
        assert_eq!(vector.skillset(Skillset::Stream), 10.);
        assert_eq!(vector.skillset(Skillset::Technical), 70.);
        assert_eq!(vector.0, [45., 10., 20., 30., 40., 50., 60., 70.]);
    }

    #[test]
    fn test_negative_ratings_are_combined() {
        let vector = RatingVector::from_skillset_ratings([-6., 0., 0., 0., 0., 0., 6.]);
        assert_eq!(vector.overall(), 1.);
    }

    #[test]
    fn test_empty_view_rates_zero() {
        let matrix = SkillsetMatrix::default();
        assert_eq!(find_ratings(&matrix.prefix()).0, [0.; NUM_SKILLSETS + 1]);
    }

    #[test]
    fn test_ratings_follow_rows() {
        let mut matrix = SkillsetMatrix::default();
        matrix.push_column(&[5., 10., 15., 20., 25., 30., 35.]);
        let vector = find_ratings(&matrix.prefix());
        for skillset in Skillset::ALL {
            let expected = find_skillset_rating(matrix.prefix().row(skillset));
            assert_eq!(vector.skillset(skillset), expected);
        }
        assert!(vector.skillset(Skillset::Stream) < vector.skillset(Skillset::Technical));
    }
}
