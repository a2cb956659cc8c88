//! Error types surfaced by scene initialization and dialogue gate transitions.
//!
//! Scene errors are fatal: they are returned from
//! [`crate::scene::load_scene_data`] and [`crate::scene::load_textures`] and
//! handled by the caller. Absent optional map content (no spawn point, no
//! boundaries layer) is not an error.

use std::path::PathBuf;

/// Fatal failures while preparing the scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A texture or data file could not be read or decoded.
    #[error("failed to load asset {path}: {reason}")]
    AssetLoadFailure { path: PathBuf, reason: String },

    /// The map document is not valid JSON or violates the layer/object schema.
    #[error("malformed map data: {0}")]
    MalformedMapData(String),

    /// The dialogue document is not a JSON object of name to text.
    #[error("malformed dialogue data: {0}")]
    MalformedDialogueData(String),
}

impl SceneError {
    pub fn asset(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        SceneError::AssetLoadFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Rejected dialogue gate transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("dialogue '{active}' is already open")]
    AlreadyOpen { active: String },
    #[error("no dialogue is open")]
    NotOpen,
}
