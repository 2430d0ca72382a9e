//! Train/test splitting

use crate::error::{Error, Result};
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Options for [`train_test_split`]
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Fraction of samples assigned to the test partition, in (0, 1)
    pub test_size: f64,

    /// Shuffle samples before splitting
    pub shuffle: bool,

    /// RNG seed for reproducible shuffling
    pub seed: Option<u64>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            test_size: 0.25,
            shuffle: true,
            seed: None,
        }
    }
}

impl SplitOptions {
    /// Set the test partition fraction
    pub fn with_test_size(mut self, test_size: f64) -> Self {
        self.test_size = test_size;
        self
    }

    /// Enable/disable shuffling
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of a train/test split
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<usize>,
    pub y_test: Array1<usize>,
}

/// Partition a dataset into train and test sets.
///
/// The test partition holds `round(n * test_size)` samples, clamped so both
/// partitions are non-empty.
///
/// # Example
///
/// ```
/// use ndarray::{Array1, Array2};
/// use preparar::preprocess::{train_test_split, SplitOptions};
///
/// let x = Array2::from_shape_vec((4, 1), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let y = Array1::from(vec![0, 0, 1, 1]);
///
/// let opts = SplitOptions::default().with_test_size(0.5).with_seed(42);
/// let split = train_test_split(&x, &y, &opts)?;
/// assert_eq!(split.x_train.nrows(), 2);
/// assert_eq!(split.x_test.nrows(), 2);
/// # Ok::<(), preparar::Error>(())
/// ```
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<usize>,
    options: &SplitOptions,
) -> Result<TrainTestSplit> {
    let n = x.nrows();
    if n != y.len() {
        return Err(Error::ShapeMismatch {
            expected: vec![n],
            got: vec![y.len()],
        });
    }
    if n < 2 {
        return Err(Error::InvalidParameter(
            "At least 2 samples are required to split".to_string(),
        ));
    }
    if !(options.test_size > 0.0 && options.test_size < 1.0) {
        return Err(Error::InvalidParameter(format!(
            "test_size must be in (0, 1), got {}",
            options.test_size
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    if options.shuffle {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        indices.shuffle(&mut rng);
    }

    let n_test = ((n as f64 * options.test_size).round() as usize).clamp(1, n - 1);
    let (test_idx, train_idx) = indices.split_at(n_test);

    Ok(TrainTestSplit {
        x_train: x.select(Axis(0), train_idx),
        x_test: x.select(Axis(0), test_idx),
        y_train: y.select(Axis(0), train_idx),
        y_test: y.select(Axis(0), test_idx),
    })
}
