//! Model I/O - Saving and loading trained models
//!
//! Persistence is resolved at construction time through [`ModelArtifact`]:
//! a model either owns its on-disk format ([`SelfSerializing`]) or is
//! captured as a [`Model`] snapshot and serialized in one of the supported
//! formats.

mod format;
mod load;
mod model;
mod persist;

pub use format::{ModelFormat, SaveConfig};
pub use load::load_model;
pub use model::{Model, ModelMetadata, ModelState, ParameterInfo};
pub use persist::{save_model, ModelArtifact, SelfSerializing};
