//! Feature scaling
//!
//! Three column-wise scaling strategies, fit on training data and applied to
//! any matrix with the same number of columns:
//!
//! - standard: `(x - mean) / std`
//! - min-max: maps the observed range onto `[0, 1]`
//! - robust: `(x - median) / IQR`, resistant to outliers
//!
//! Columns with zero spread are passed through unscaled (offset only), so
//! constant features never produce NaN.

use crate::error::{Error, Result};
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

/// Scaling strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalerKind {
    /// Zero mean, unit variance
    Standard,
    /// Observed range mapped to [0, 1]
    MinMax,
    /// Median and interquartile range
    Robust,
}

/// Unfitted scaler, carries only the chosen strategy
#[derive(Debug, Clone, Copy)]
pub struct Scaler {
    kind: ScalerKind,
}

impl Scaler {
    /// Zero-mean unit-variance scaling
    pub fn standard() -> Self {
        Self {
            kind: ScalerKind::Standard,
        }
    }

    /// Range scaling onto [0, 1]
    pub fn min_max() -> Self {
        Self {
            kind: ScalerKind::MinMax,
        }
    }

    /// Median/IQR scaling
    pub fn robust() -> Self {
        Self {
            kind: ScalerKind::Robust,
        }
    }

    /// Fit column statistics on a training matrix.
    pub fn fit(&self, x: &Array2<f64>) -> Result<FittedScaler> {
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(Error::InvalidParameter(
                "Cannot fit scaler on an empty matrix".to_string(),
            ));
        }

        let (offset, scale) = match self.kind {
            ScalerKind::Standard => {
                let mean = x.mean_axis(Axis(0)).ok_or_else(|| {
                    Error::InvalidParameter("Cannot fit scaler on an empty matrix".to_string())
                })?;
                let std = x.std_axis(Axis(0), 0.0);
                (mean, std)
            }
            ScalerKind::MinMax => {
                let min = x.fold_axis(Axis(0), f64::INFINITY, |acc, &v| acc.min(v));
                let max = x.fold_axis(Axis(0), f64::NEG_INFINITY, |acc, &v| acc.max(v));
                let range = &max - &min;
                (min, range)
            }
            ScalerKind::Robust => {
                let mut medians = Vec::with_capacity(x.ncols());
                let mut iqrs = Vec::with_capacity(x.ncols());
                for column in x.columns() {
                    let mut sorted: Vec<f64> = column.to_vec();
                    sorted.sort_by(|a, b| a.total_cmp(b));
                    medians.push(quantile(&sorted, 0.5));
                    iqrs.push(quantile(&sorted, 0.75) - quantile(&sorted, 0.25));
                }
                (Array1::from(medians), Array1::from(iqrs))
            }
        };

        // Zero-spread columns divide by 1 instead of 0.
        let scale = scale.mapv(|s| if s == 0.0 { 1.0 } else { s });

        Ok(FittedScaler {
            kind: self.kind,
            offset,
            scale,
        })
    }
}

/// Fitted column statistics, applicable to matrices with matching width
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedScaler {
    kind: ScalerKind,
    offset: Array1<f64>,
    scale: Array1<f64>,
}

impl FittedScaler {
    /// The strategy this scaler was fit with
    pub fn kind(&self) -> ScalerKind {
        self.kind
    }

    /// Apply the fitted scaling to a matrix.
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.check_width(x)?;
        Ok((x - &self.offset) / &self.scale)
    }

    /// Undo the fitted scaling.
    pub fn inverse_transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.check_width(x)?;
        Ok(x * &self.scale + &self.offset)
    }

    fn check_width(&self, x: &Array2<f64>) -> Result<()> {
        if x.ncols() != self.offset.len() {
            return Err(Error::ShapeMismatch {
                expected: vec![self.offset.len()],
                got: vec![x.ncols()],
            });
        }
        Ok(())
    }
}

/// Linear-interpolation quantile of a sorted slice
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
