//! Process model: JSON → Rust types, plus borrowed container views.

pub mod lookup;
pub mod types;

pub use lookup::{Container, container_of, find_element};
pub use types::*;

use crate::error::ModelError;

/// Deserialize a definitions document from its JSON interchange form.
pub fn parse(json: &str) -> Result<Definitions, ModelError> {
    serde_json::from_str::<Definitions>(json).map_err(ModelError::Json)
}
