//! Model loading functionality

use super::format::ModelFormat;
use super::model::{Model, ModelMetadata, ModelState};
use crate::error::{Error, Result};
use ndarray::Array1;
use safetensors::tensor::Dtype;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a model snapshot from a file.
///
/// The format is detected from the file extension.
///
/// # Example
///
/// ```no_run
/// use preparar::io::load_model;
///
/// let model = load_model("model.safetensors")?;
/// println!("Loaded model: {}", model.metadata.name);
/// # Ok::<(), preparar::Error>(())
/// ```
pub fn load_model(path: impl AsRef<Path>) -> Result<Model> {
    let path = path.as_ref();

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::Serialization("File has no extension".to_string()))?;

    let format = ModelFormat::from_extension(ext)
        .ok_or_else(|| Error::Serialization(format!("Unsupported file extension: {ext}")))?;

    if format == ModelFormat::SafeTensors {
        return load_safetensors(path);
    }

    let content = fs::read_to_string(path)?;

    let state: ModelState = match format {
        ModelFormat::Json => serde_json::from_str(&content)
            .map_err(|e| Error::Serialization(format!("JSON deserialization failed: {e}")))?,
        ModelFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| Error::Serialization(format!("YAML deserialization failed: {e}")))?,
        ModelFormat::SafeTensors => unreachable!(),
    };

    let model = Model::from_state(state)?;
    info!("Model loaded from {}", path.display());
    Ok(model)
}

/// Load model from SafeTensors format (HuggingFace compatible)
fn load_safetensors(path: &Path) -> Result<Model> {
    let data = fs::read(path)?;

    let (_, st_metadata) = safetensors::SafeTensors::read_metadata(&data)
        .map_err(|e| Error::Serialization(format!("SafeTensors parsing failed: {e}")))?;

    let custom_meta = st_metadata.metadata();
    let name = custom_meta
        .as_ref()
        .and_then(|m| m.get("name").cloned())
        .unwrap_or_else(|| "unknown".to_string());
    let architecture = custom_meta
        .as_ref()
        .and_then(|m| m.get("architecture").cloned())
        .unwrap_or_else(|| "unknown".to_string());

    let metadata = ModelMetadata::new(name, architecture);

    let safetensors = safetensors::SafeTensors::deserialize(&data)
        .map_err(|e| Error::Serialization(format!("SafeTensors parsing failed: {e}")))?;

    let parameters: Vec<(String, Array1<f32>)> = safetensors
        .names()
        .into_iter()
        .map(|name| {
            let view = safetensors
                .tensor(name)
                .map_err(|e| Error::Serialization(format!("Missing tensor {name}: {e}")))?;
            if view.dtype() != Dtype::F32 {
                return Err(Error::Serialization(format!(
                    "Tensor {name} has dtype {:?}, only F32 snapshots are supported",
                    view.dtype()
                )));
            }
            let values: Vec<f32> = bytemuck::pod_collect_to_vec(view.data());
            Ok((name.to_string(), Array1::from(values)))
        })
        .collect::<Result<_>>()?;

    info!("Model loaded from {}", path.display());
    Ok(Model::new(metadata, parameters))
}
