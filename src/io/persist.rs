//! Model saving functionality

use super::format::{ModelFormat, SaveConfig};
use super::model::Model;
use crate::error::{Error, Result};
use safetensors::tensor::{Dtype, TensorView};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Models that own their on-disk format.
///
/// A model implementing this trait writes itself to the destination path;
/// the pipeline never inspects its internals.
pub trait SelfSerializing {
    fn write_model(&self, path: &Path) -> Result<()>;
}

/// A trained model handed to the pipeline for persistence.
///
/// The persistence strategy is chosen when the artifact is constructed, not
/// detected at save time: models that know how to serialize themselves go in
/// as [`ModelArtifact::Native`], everything else is captured as a [`Model`]
/// snapshot and serialized by this crate.
pub enum ModelArtifact<'a> {
    /// The model writes its own format; `SaveConfig` is ignored.
    Native(&'a dyn SelfSerializing),

    /// Parameter snapshot serialized in the configured format.
    Snapshot(&'a Model),
}

/// Save a trained model to a file.
///
/// # Example
///
/// ```no_run
/// use ndarray::Array1;
/// use preparar::io::{save_model, Model, ModelArtifact, ModelMetadata, ModelFormat, SaveConfig};
///
/// let params = vec![("coef".to_string(), Array1::from(vec![1.0f32, 2.0]))];
/// let model = Model::new(ModelMetadata::new("churn", "linear"), params);
/// let config = SaveConfig::new(ModelFormat::Json);
///
/// save_model(&ModelArtifact::Snapshot(&model), "model.json", &config)?;
/// # Ok::<(), preparar::Error>(())
/// ```
pub fn save_model(artifact: &ModelArtifact<'_>, path: impl AsRef<Path>, config: &SaveConfig) -> Result<()> {
    let path = path.as_ref();

    let result = match artifact {
        ModelArtifact::Native(model) => model.write_model(path),
        ModelArtifact::Snapshot(model) => save_snapshot(model, path, config),
    };

    match result {
        Ok(()) => {
            info!("Model saved to {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Error saving model to {}: {}", path.display(), e);
            Err(e)
        }
    }
}

fn save_snapshot(model: &Model, path: &Path, config: &SaveConfig) -> Result<()> {
    if config.format == ModelFormat::SafeTensors {
        return save_safetensors(model, path);
    }

    let state = model.to_state();
    let data = match config.format {
        ModelFormat::Json => {
            if config.pretty {
                serde_json::to_string_pretty(&state)
                    .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?
            } else {
                serde_json::to_string(&state)
                    .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?
            }
        }
        ModelFormat::Yaml => serde_yaml::to_string(&state)
            .map_err(|e| Error::Serialization(format!("YAML serialization failed: {e}")))?,
        ModelFormat::SafeTensors => unreachable!(),
    };

    fs::write(path, data.as_bytes())?;
    Ok(())
}

/// Save model in SafeTensors format (HuggingFace compatible)
fn save_safetensors(model: &Model, path: &Path) -> Result<()> {
    // Collect tensor data with proper lifetime management
    let tensor_data: Vec<(String, Vec<u8>, Vec<usize>)> = model
        .parameters
        .iter()
        .map(|(name, values)| {
            let slice = values.as_slice().ok_or_else(|| {
                Error::Serialization(format!("Parameter {name} is not contiguous"))
            })?;
            let bytes: Vec<u8> = bytemuck::cast_slice(slice).to_vec();
            Ok((name.clone(), bytes, vec![values.len()]))
        })
        .collect::<Result<_>>()?;

    let views: Vec<(&str, TensorView<'_>)> = tensor_data
        .iter()
        .map(|(name, bytes, shape)| {
            let view = TensorView::new(Dtype::F32, shape.clone(), bytes)
                .map_err(|e| Error::Serialization(format!("Invalid tensor {name}: {e}")))?;
            Ok((name.as_str(), view))
        })
        .collect::<Result<_>>()?;

    let mut metadata = HashMap::new();
    metadata.insert("name".to_string(), model.metadata.name.clone());
    metadata.insert(
        "architecture".to_string(),
        model.metadata.architecture.clone(),
    );
    metadata.insert("version".to_string(), model.metadata.version.clone());

    let safetensor_bytes = safetensors::serialize(views, &Some(metadata))
        .map_err(|e| Error::Serialization(format!("SafeTensors serialization failed: {e}")))?;

    fs::write(path, safetensor_bytes)?;
    Ok(())
}
