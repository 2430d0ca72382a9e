//! Model snapshot structure for serialization

use crate::error::{Error, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Model metadata containing architecture and training information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name/identifier
    pub name: String,

    /// Model architecture type (e.g., "logistic-regression", "mlp")
    pub architecture: String,

    /// Model version
    pub version: String,

    /// Custom metadata fields
    pub custom: HashMap<String, serde_json::Value>,
}

impl ModelMetadata {
    /// Create new metadata with minimal fields
    pub fn new(name: impl Into<String>, architecture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            architecture: architecture.into(),
            version: "0.1.0".to_string(),
            custom: HashMap::new(),
        }
    }

    /// Add custom metadata field
    pub fn with_custom(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom.insert(key.into(), value);
        self
    }
}

/// Information about a model parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name (e.g., "coef", "intercept")
    pub name: String,

    /// Number of elements
    pub len: usize,
}

/// Serializable model state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelState {
    /// Model metadata
    pub metadata: ModelMetadata,

    /// Parameter information
    pub parameters: Vec<ParameterInfo>,

    /// Flattened parameter data
    pub data: Vec<f32>,
}

/// Trained model captured as named parameter vectors
pub struct Model {
    /// Model metadata
    pub metadata: ModelMetadata,

    /// Model parameters
    pub parameters: Vec<(String, Array1<f32>)>,
}

impl Model {
    /// Create a new model
    pub fn new(metadata: ModelMetadata, parameters: Vec<(String, Array1<f32>)>) -> Self {
        Self {
            metadata,
            parameters,
        }
    }

    /// Get parameter by name
    pub fn get_parameter(&self, name: &str) -> Option<&Array1<f32>> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// Convert model to serializable state
    pub fn to_state(&self) -> ModelState {
        let mut data = Vec::new();
        let parameters: Vec<ParameterInfo> = self
            .parameters
            .iter()
            .map(|(name, values)| {
                data.extend(values.iter().copied());
                ParameterInfo {
                    name: name.clone(),
                    len: values.len(),
                }
            })
            .collect();

        ModelState {
            metadata: self.metadata.clone(),
            parameters,
            data,
        }
    }

    /// Create model from serializable state.
    ///
    /// The state may come from an external file, so the declared parameter
    /// lengths are checked against the flattened data buffer before slicing.
    pub fn from_state(state: ModelState) -> Result<Self> {
        let declared: usize = state.parameters.iter().map(|info| info.len).sum();
        if declared != state.data.len() {
            return Err(Error::Serialization(format!(
                "Snapshot declares {declared} parameter values but carries {}",
                state.data.len()
            )));
        }

        let mut offset = 0;
        let parameters: Vec<(String, Array1<f32>)> = state
            .parameters
            .into_iter()
            .map(|info| {
                let values = Array1::from(state.data[offset..offset + info.len].to_vec());
                offset += info.len;
                (info.name, values)
            })
            .collect();

        Ok(Self {
            metadata: state.metadata,
            parameters,
        })
    }
}
