use super::model::FlowchartDefinition;
use crate::error::DefinitionError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;

impl<R> FlowchartDefinition<R> {
    /// Encodes the definition in the bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DefinitionError>
    where
        R: Serialize,
    {
        encode_to_vec(self, standard())
            .map_err(|e| DefinitionError::Artifact(format!("Serialization failed: {}", e)))
    }

    /// Decodes a definition from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DefinitionError>
    where
        R: DeserializeOwned,
    {
        decode_from_slice(bytes, standard())
            .map(|(definition, _)| definition)
            .map_err(|e| DefinitionError::Artifact(format!("Deserialization failed: {}", e)))
    }

    /// Saves the definition to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), DefinitionError>
    where
        R: Serialize,
    {
        fs::write(path, self.to_bytes()?)
            .map_err(|e| DefinitionError::Artifact(format!("Cannot write '{}': {}", path, e)))?;
        log::info!("Wrote flowchart definition to '{}'", path);
        Ok(())
    }

    /// Loads a definition previously written with [`FlowchartDefinition::save`].
    pub fn from_file(path: &str) -> Result<Self, DefinitionError>
    where
        R: DeserializeOwned,
    {
        let bytes = fs::read(path)
            .map_err(|e| DefinitionError::Artifact(format!("Cannot read '{}': {}", path, e)))?;
        Self::from_bytes(&bytes)
    }
}
