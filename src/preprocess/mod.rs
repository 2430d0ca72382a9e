//! Dataset preprocessing utilities
//!
//! Feature matrices are `Array2<f64>` with one row per sample; class labels
//! are `Array1<usize>`.
//!
//! - **split**: Train/test partitioning with optional shuffling
//! - **scale**: Standard, min-max, and robust feature scaling
//! - **encode**: One-hot encoding of categorical columns
//! - **resample**: Random over- and under-sampling for class rebalancing
//! - **synth**: SMOTE and ADASYN synthetic minority oversampling

mod encode;
mod resample;
mod scale;
mod split;
mod synth;


pub use encode::OneHotEncoder;
pub use resample::{RandomOverSampler, RandomUnderSampler};
pub use scale::{FittedScaler, Scaler, ScalerKind};
pub use split::{train_test_split, SplitOptions, TrainTestSplit};
pub use synth::{Adasyn, Smote};
