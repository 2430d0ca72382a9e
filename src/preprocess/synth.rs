//! Synthetic minority oversampling
//!
//! Where the random oversampler duplicates existing minority rows, these
//! samplers synthesize new ones by interpolating between a minority sample
//! and one of its nearest same-class neighbors:
//!
//! - [`Smote`] draws the anchor sample uniformly from the minority class.
//! - [`Adasyn`] allocates more synthetics to minority samples whose
//!   neighborhood is dominated by other classes, shifting weight toward the
//!   decision boundary.
//!
//! Both equalize every class at the majority count and require at least two
//! samples per minority class to interpolate between.

use super::resample::{group_by_class, make_rng};
use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayView1};
use rand::rngs::StdRng;
use rand::Rng;

/// SMOTE: synthetic minority oversampling by interpolation
#[derive(Debug, Clone)]
pub struct Smote {
    k_neighbors: usize,
    seed: Option<u64>,
}

impl Default for Smote {
    fn default() -> Self {
        Self {
            k_neighbors: 5,
            seed: None,
        }
    }
}

impl Smote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the RNG for reproducible resampling
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Number of same-class neighbors considered when interpolating
    pub fn with_k_neighbors(mut self, k_neighbors: usize) -> Self {
        self.k_neighbors = k_neighbors;
        self
    }

    /// Resample the dataset, synthesizing minority rows until every class
    /// reaches the majority count.
    pub fn fit_resample(
        &self,
        x: &Array2<f64>,
        y: &Array1<usize>,
    ) -> Result<(Array2<f64>, Array1<usize>)> {
        check_k(self.k_neighbors)?;
        let by_class = group_by_class(x, y)?;
        let target = by_class.values().map(Vec::len).max().unwrap_or(0);
        let mut rng = make_rng(self.seed);

        let mut rows: Vec<f64> = x.iter().copied().collect();
        let mut labels: Vec<usize> = y.to_vec();

        for (&class, indices) in &by_class {
            let deficit = target - indices.len();
            if deficit == 0 {
                continue;
            }
            check_interpolatable(class, indices.len())?;

            let k = self.k_neighbors.min(indices.len() - 1);
            for _ in 0..deficit {
                let anchor_pos = rng.random_range(0..indices.len());
                synthesize(x, indices, anchor_pos, k, &mut rng, &mut rows);
                labels.push(class);
            }
        }

        assemble(rows, labels, x.ncols())
    }
}

/// ADASYN: adaptive synthetic oversampling
///
/// Minority samples with many foreign-class points among their nearest
/// neighbors receive proportionally more synthetic offspring. When no
/// minority sample has foreign neighbors the allocation falls back to
/// uniform.
#[derive(Debug, Clone)]
pub struct Adasyn {
    k_neighbors: usize,
    seed: Option<u64>,
}

impl Default for Adasyn {
    fn default() -> Self {
        Self {
            k_neighbors: 5,
            seed: None,
        }
    }
}

impl Adasyn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the RNG for reproducible resampling
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Number of neighbors considered for both density estimation and
    /// interpolation
    pub fn with_k_neighbors(mut self, k_neighbors: usize) -> Self {
        self.k_neighbors = k_neighbors;
        self
    }

    /// Resample the dataset, synthesizing minority rows until every class
    /// reaches the majority count.
    pub fn fit_resample(
        &self,
        x: &Array2<f64>,
        y: &Array1<usize>,
    ) -> Result<(Array2<f64>, Array1<usize>)> {
        check_k(self.k_neighbors)?;
        let by_class = group_by_class(x, y)?;
        let target = by_class.values().map(Vec::len).max().unwrap_or(0);
        let mut rng = make_rng(self.seed);

        let mut rows: Vec<f64> = x.iter().copied().collect();
        let mut labels: Vec<usize> = y.to_vec();

        for (&class, indices) in &by_class {
            let deficit = target - indices.len();
            if deficit == 0 {
                continue;
            }
            check_interpolatable(class, indices.len())?;

            // Density ratio per sample: fraction of its nearest neighbors in
            // the full dataset that belong to another class.
            let k_density = self.k_neighbors.min(x.nrows() - 1);
            let ratios: Vec<f64> = indices
                .iter()
                .map(|&row| {
                    let neighbors = nearest_rows(x, row, k_density);
                    let foreign = neighbors.iter().filter(|&&n| y[n] != class).count();
                    foreign as f64 / k_density as f64
                })
                .collect();

            let quotas = allocate(&ratios, deficit);

            let k = self.k_neighbors.min(indices.len() - 1);
            for (anchor_pos, &quota) in quotas.iter().enumerate() {
                for _ in 0..quota {
                    synthesize(x, indices, anchor_pos, k, &mut rng, &mut rows);
                    labels.push(class);
                }
            }
        }

        assemble(rows, labels, x.ncols())
    }
}

/// Rebuild the row-major buffer and labels into arrays.
fn assemble(
    rows: Vec<f64>,
    labels: Vec<usize>,
    ncols: usize,
) -> Result<(Array2<f64>, Array1<usize>)> {
    let nrows = labels.len();
    let buffer_len = rows.len();
    let x = Array2::from_shape_vec((nrows, ncols), rows).map_err(|_| Error::ShapeMismatch {
        expected: vec![nrows, ncols],
        got: vec![buffer_len],
    })?;
    Ok((x, Array1::from(labels)))
}

fn check_k(k_neighbors: usize) -> Result<()> {
    if k_neighbors == 0 {
        return Err(Error::InvalidParameter(
            "k_neighbors must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn check_interpolatable(class: usize, count: usize) -> Result<()> {
    if count < 2 {
        return Err(Error::InvalidParameter(format!(
            "Class {class} has a single sample, cannot synthesize between neighbors"
        )));
    }
    Ok(())
}

/// Append one row interpolated between the anchor and a random one of its
/// k nearest same-class neighbors.
fn synthesize(
    x: &Array2<f64>,
    indices: &[usize],
    anchor_pos: usize,
    k: usize,
    rng: &mut StdRng,
    rows: &mut Vec<f64>,
) {
    let neighbors = nearest_within(x, indices, anchor_pos, k);
    let neighbor = neighbors[rng.random_range(0..neighbors.len())];
    let gap: f64 = rng.random();

    let anchor = x.row(indices[anchor_pos]);
    for (a, b) in anchor.iter().zip(x.row(neighbor).iter()) {
        rows.push(a + gap * (b - a));
    }
}

fn sq_dist(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(p, q)| (p - q).powi(2)).sum()
}

/// Row indices of the k nearest same-class neighbors of `indices[anchor_pos]`
fn nearest_within(x: &Array2<f64>, indices: &[usize], anchor_pos: usize, k: usize) -> Vec<usize> {
    let anchor = x.row(indices[anchor_pos]);
    let mut dists: Vec<(f64, usize)> = indices
        .iter()
        .enumerate()
        .filter(|(pos, _)| *pos != anchor_pos)
        .map(|(_, &row)| (sq_dist(x.row(row), anchor), row))
        .collect();
    dists.sort_by(|a, b| a.0.total_cmp(&b.0));
    dists.truncate(k);
    dists.into_iter().map(|(_, row)| row).collect()
}

/// Row indices of the k nearest neighbors of `anchor` over the whole dataset
fn nearest_rows(x: &Array2<f64>, anchor: usize, k: usize) -> Vec<usize> {
    let anchor_row = x.row(anchor);
    let mut dists: Vec<(f64, usize)> = (0..x.nrows())
        .filter(|&row| row != anchor)
        .map(|row| (sq_dist(x.row(row), anchor_row), row))
        .collect();
    dists.sort_by(|a, b| a.0.total_cmp(&b.0));
    dists.truncate(k);
    dists.into_iter().map(|(_, row)| row).collect()
}

/// Split `total` into per-weight quotas summing exactly to `total`
/// (largest-remainder rounding). Zero weights fall back to uniform.
fn allocate(weights: &[f64], total: usize) -> Vec<usize> {
    let sum: f64 = weights.iter().sum();
    let uniform = 1.0 / weights.len() as f64;

    let exact: Vec<f64> = weights
        .iter()
        .map(|&w| {
            let share = if sum > 0.0 { w / sum } else { uniform };
            share * total as f64
        })
        .collect();

    let mut quotas: Vec<usize> = exact.iter().map(|e| e.floor() as usize).collect();
    let assigned: usize = quotas.iter().sum();

    let mut remainders: Vec<(f64, usize)> = exact
        .iter()
        .enumerate()
        .map(|(i, e)| (e - e.floor(), i))
        .collect();
    remainders.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));

    for &(_, i) in remainders.iter().take(total - assigned) {
        quotas[i] += 1;
    }
    quotas
}
