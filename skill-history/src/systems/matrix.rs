use super::Skillset;
use crate::data_processing::NUM_SKILLSETS;

/// Normalized skillset values of one user's valid scores, one row per skillset and one
/// column per score. Columns are only ever appended.
#[derive(Clone, Debug, Default)]
pub struct SkillsetMatrix {
    rows: [Vec<f64>; NUM_SKILLSETS],
}

impl SkillsetMatrix {
    pub fn with_capacity(num_columns: usize) -> Self {
        Self {
            rows: std::array::from_fn(|_| Vec::with_capacity(num_columns)),
        }
    }

    pub fn push_column(&mut self, column: &[f64; NUM_SKILLSETS]) {
        for (row, &value) in self.rows.iter_mut().zip(column) {
            row.push(value);
        }
    }

    pub fn num_columns(&self) -> usize {
        self.rows[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_columns() == 0
    }

    /// A view of every column appended so far.
    pub fn prefix(&self) -> SkillsetView<'_> {
        self.view(self.num_columns())
    }

    /// A view of the first `num_columns` columns, or of all of them if there are fewer.
    fn view(&self, num_columns: usize) -> SkillsetView<'_> {
        let len = num_columns.min(self.num_columns());
        SkillsetView {
            rows: std::array::from_fn(|i| &self.rows[i][..len]),
        }
    }
}

/// Read-only window onto the leading columns of a [`SkillsetMatrix`].
#[derive(Clone, Copy, Debug)]
pub struct SkillsetView<'a> {
    rows: [&'a [f64]; NUM_SKILLSETS],
}

impl<'a> SkillsetView<'a> {
    pub fn row(&self, skillset: Skillset) -> &'a [f64] {
        self.rows[skillset.index()]
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [f64]> + '_ {
        self.rows.iter().copied()
    }

    pub fn num_columns(&self) -> usize {
        self.rows[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_columns() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_columns_are_appended_in_order() {
        let mut matrix = SkillsetMatrix::with_capacity(2);
        assert!(matrix.is_empty());
        assert!(matrix.prefix().is_empty());

        matrix.push_column(&[1., 2., 3., 4., 5., 6., 7.]);
        matrix.push_column(&[8., 9., 10., 11., 12., 13., 14.]);
        assert_eq!(matrix.num_columns(), 2);

        let prefix = matrix.prefix();
        assert_eq!(prefix.row(Skillset::Stream), &[1., 8.]);
        assert_eq!(prefix.row(Skillset::Technical), &[7., 14.]);
        assert_eq!(prefix.rows().count(), NUM_SKILLSETS);
    }

    #[test]
    fn test_views_survive_later_appends() {
        let mut matrix = SkillsetMatrix::default();
        matrix.push_column(&[1.; NUM_SKILLSETS]);
        let first: Vec<f64> = matrix.prefix().row(Skillset::Stamina).to_vec();

        matrix.push_column(&[2.; NUM_SKILLSETS]);
        let view = matrix.view(1);
        assert_eq!(view.row(Skillset::Stamina), first.as_slice());
        assert_eq!(matrix.view(10).num_columns(), 2);
    }
}
