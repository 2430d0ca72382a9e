//! One-hot encoding of categorical features

use crate::error::{Error, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One-hot encoder for a single categorical column.
///
/// Categories are learned during [`fit`](OneHotEncoder::fit) and ordered
/// lexicographically; [`transform`](OneHotEncoder::transform) rejects values
/// that were not seen during fitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneHotEncoder {
    categories: Vec<String>,
}

impl OneHotEncoder {
    /// Learn the category set from training values.
    pub fn fit<S: AsRef<str>>(values: &[S]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidParameter(
                "Cannot fit encoder on an empty column".to_string(),
            ));
        }

        let categories: BTreeSet<String> =
            values.iter().map(|v| v.as_ref().to_string()).collect();

        Ok(Self {
            categories: categories.into_iter().collect(),
        })
    }

    /// Learned categories, lexicographically ordered.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Encode values into a one-hot matrix of shape `(values.len(), n_categories)`.
    pub fn transform<S: AsRef<str>>(&self, values: &[S]) -> Result<Array2<f64>> {
        let mut encoded = Array2::zeros((values.len(), self.categories.len()));

        for (row, value) in values.iter().enumerate() {
            let value = value.as_ref();
            let col = self
                .categories
                .binary_search_by(|c| c.as_str().cmp(value))
                .map_err(|_| {
                    Error::InvalidParameter(format!("Unknown category: {value}"))
                })?;
            encoded[[row, col]] = 1.0;
        }

        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_collects_sorted_unique_categories() {
        let encoder =
            OneHotEncoder::fit(&["dsl", "fiber", "dsl", "cable", "fiber"]).unwrap();
        assert_eq!(encoder.categories(), &["cable", "dsl", "fiber"]);
    }

    #[test]
    fn test_transform_one_hot_rows() {
        let encoder = OneHotEncoder::fit(&["a", "b", "c"]).unwrap();
        let encoded = encoder.transform(&["b", "a", "c", "b"]).unwrap();

        assert_eq!(encoded.shape(), &[4, 3]);
        assert_eq!(encoded.row(0).to_vec(), vec![0.0, 1.0, 0.0]);
        assert_eq!(encoded.row(1).to_vec(), vec![1.0, 0.0, 0.0]);
        assert_eq!(encoded.row(2).to_vec(), vec![0.0, 0.0, 1.0]);
        // Exactly one hot entry per row.
        for row in encoded.outer_iter() {
            assert_eq!(row.sum(), 1.0);
        }
    }

    #[test]
    fn test_transform_unknown_category() {
        let encoder = OneHotEncoder::fit(&["yes", "no"]).unwrap();
        let result = encoder.transform(&["yes", "maybe"]);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
        if let Err(e) = result {
            assert!(e.to_string().contains("maybe"));
        }
    }

    #[test]
    fn test_fit_empty_column() {
        let result = OneHotEncoder::fit::<&str>(&[]);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_transform_empty_input() {
        let encoder = OneHotEncoder::fit(&["a", "b"]).unwrap();
        let encoded = encoder.transform::<&str>(&[]).unwrap();
        assert_eq!(encoded.shape(), &[0, 2]);
    }

    #[test]
    fn test_encoder_serde_round_trip() {
        let encoder = OneHotEncoder::fit(&["low", "high", "mid"]).unwrap();
        let json = serde_json::to_string(&encoder).unwrap();
        let restored: OneHotEncoder = serde_json::from_str(&json).unwrap();
        assert_eq!(encoder.categories(), restored.categories());
    }
}
