//! # Preparar: Data Pipeline Utilities
//!
//! Preparar provides the utility layer of a machine-learning data pipeline:
//! YAML configuration loading, dataset preprocessing, and model persistence.
//!
//! ## Architecture
//!
//! - **config**: Untyped YAML configuration loading
//! - **preprocess**: Train/test splitting, feature scaling, one-hot encoding,
//!   and class rebalancing
//! - **io**: Model saving and loading (JSON, YAML, SafeTensors formats)
//! - **logging**: Explicit tracing subscriber setup for pipeline binaries
//!
//! ## Example
//!
//! ```no_run
//! use preparar::config::load_config;
//!
//! let config = load_config("config/config.yaml")?;
//! # Ok::<(), preparar::Error>(())
//! ```

pub mod config;
pub mod io;
pub mod logging;
pub mod preprocess;

pub mod error;

// Re-export commonly used types
pub use config::{load_config, load_default_config, ConfigMap, DEFAULT_CONFIG_PATH};
pub use error::{Error, Result};
pub use io::{load_model, save_model, Model, ModelArtifact, ModelMetadata};
