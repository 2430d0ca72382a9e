//! Random resampling for class rebalancing

use crate::error::{Error, Result};
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Oversample minority classes with replacement until every class matches
/// the majority count.
#[derive(Debug, Clone, Default)]
pub struct RandomOverSampler {
    seed: Option<u64>,
}

impl RandomOverSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the RNG for reproducible resampling
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Resample the dataset so all classes reach the majority class count.
    pub fn fit_resample(
        &self,
        x: &Array2<f64>,
        y: &Array1<usize>,
    ) -> Result<(Array2<f64>, Array1<usize>)> {
        let by_class = group_by_class(x, y)?;
        let target = by_class.values().map(Vec::len).max().unwrap_or(0);
        let mut rng = make_rng(self.seed);

        let mut selected = Vec::new();
        for indices in by_class.values() {
            selected.extend_from_slice(indices);
            for _ in indices.len()..target {
                selected.push(indices[rng.random_range(0..indices.len())]);
            }
        }

        Ok(take_rows(x, y, &selected))
    }
}

/// Subsample majority classes without replacement down to the minority count.
#[derive(Debug, Clone, Default)]
pub struct RandomUnderSampler {
    seed: Option<u64>,
}

impl RandomUnderSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the RNG for reproducible resampling
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Resample the dataset so all classes shrink to the minority class count.
    pub fn fit_resample(
        &self,
        x: &Array2<f64>,
        y: &Array1<usize>,
    ) -> Result<(Array2<f64>, Array1<usize>)> {
        let by_class = group_by_class(x, y)?;
        let target = by_class.values().map(Vec::len).min().unwrap_or(0);
        let mut rng = make_rng(self.seed);

        let mut selected = Vec::new();
        for indices in by_class.values() {
            let mut indices = indices.clone();
            indices.shuffle(&mut rng);
            indices.truncate(target);
            indices.sort_unstable();
            selected.extend(indices);
        }

        Ok(take_rows(x, y, &selected))
    }
}

pub(super) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Map each class label to the row indices carrying it, in label order.
pub(super) fn group_by_class(
    x: &Array2<f64>,
    y: &Array1<usize>,
) -> Result<BTreeMap<usize, Vec<usize>>> {
    if x.nrows() != y.len() {
        return Err(Error::ShapeMismatch {
            expected: vec![x.nrows()],
            got: vec![y.len()],
        });
    }
    if y.is_empty() {
        return Err(Error::InvalidParameter(
            "Cannot resample an empty dataset".to_string(),
        ));
    }

    let mut by_class: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, &label) in y.iter().enumerate() {
        by_class.entry(label).or_default().push(i);
    }
    Ok(by_class)
}

fn take_rows(
    x: &Array2<f64>,
    y: &Array1<usize>,
    indices: &[usize],
) -> (Array2<f64>, Array1<usize>) {
    (x.select(Axis(0), indices), y.select(Axis(0), indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_counts(y: &Array1<usize>) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for &label in y {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }

    fn imbalanced_data() -> (Array2<f64>, Array1<usize>) {
        // 6 samples of class 0, 2 of class 1.
        let x = Array2::from_shape_fn((8, 2), |(i, j)| (i * 10 + j) as f64);
        let y = Array1::from(vec![0, 0, 0, 1, 0, 0, 1, 0]);
        (x, y)
    }

    #[test]
    fn test_oversampler_equalizes_at_majority_count() {
        let (x, y) = imbalanced_data();
        let (rx, ry) = RandomOverSampler::with_seed(42).fit_resample(&x, &y).unwrap();

        let counts = class_counts(&ry);
        assert_eq!(counts[&0], 6);
        assert_eq!(counts[&1], 6);
        assert_eq!(rx.nrows(), 12);
    }

    #[test]
    fn test_oversampler_rows_come_from_their_class() {
        let (x, y) = imbalanced_data();
        let (rx, ry) = RandomOverSampler::with_seed(7).fit_resample(&x, &y).unwrap();

        // Row content encodes the original index; every resampled row must
        // still carry its original label.
        for (row, &label) in rx.outer_iter().zip(ry.iter()) {
            let original = row[0] as usize / 10;
            assert_eq!(y[original], label);
        }
    }

    #[test]
    fn test_undersampler_equalizes_at_minority_count() {
        let (x, y) = imbalanced_data();
        let (rx, ry) = RandomUnderSampler::with_seed(42)
            .fit_resample(&x, &y)
            .unwrap();

        let counts = class_counts(&ry);
        assert_eq!(counts[&0], 2);
        assert_eq!(counts[&1], 2);
        assert_eq!(rx.nrows(), 4);
    }

    #[test]
    fn test_undersampler_keeps_distinct_rows() {
        let (x, y) = imbalanced_data();
        let (rx, _) = RandomUnderSampler::with_seed(3).fit_resample(&x, &y).unwrap();

        let mut firsts: Vec<u64> = rx.column(0).iter().map(|v| *v as u64).collect();
        firsts.sort_unstable();
        firsts.dedup();
        assert_eq!(firsts.len(), rx.nrows());
    }

    #[test]
    fn test_resampling_is_reproducible_with_seed() {
        let (x, y) = imbalanced_data();

        let (a, _) = RandomOverSampler::with_seed(9).fit_resample(&x, &y).unwrap();
        let (b, _) = RandomOverSampler::with_seed(9).fit_resample(&x, &y).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_balanced_input_is_unchanged_in_size() {
        let x = Array2::from_shape_fn((4, 1), |(i, _)| i as f64);
        let y = Array1::from(vec![0, 1, 0, 1]);

        let (ox, _) = RandomOverSampler::with_seed(1).fit_resample(&x, &y).unwrap();
        let (ux, _) = RandomUnderSampler::with_seed(1).fit_resample(&x, &y).unwrap();
        assert_eq!(ox.nrows(), 4);
        assert_eq!(ux.nrows(), 4);
    }

    #[test]
    fn test_resample_shape_mismatch() {
        let x = Array2::zeros((3, 2));
        let y = Array1::from(vec![0, 1]);

        let result = RandomOverSampler::new().fit_resample(&x, &y);
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_resample_empty_dataset() {
        let x = Array2::zeros((0, 2));
        let y = Array1::from(vec![]);

        let result = RandomUnderSampler::new().fit_resample(&x, &y);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }
}
