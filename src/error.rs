// SPDX-License-Identifier: MIT

//! User-visible error taxonomy shared by generation, rendering, decoding,
//! and export. Every variant is phrased for direct display in the status
//! line; none of them is fatal to the application.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or degenerate element list, or an unusable spacing value.
    /// Raised before any render attempt is made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The external Graphviz engine could not produce output.
    #[error("Graphviz failed: {0}")]
    RenderFailure(String),

    /// The rendered bytes could not be interpreted as the requested format.
    /// The DOT source is kept around so the user can inspect it and retry.
    #[error("Could not decode the rendered image: {0}")]
    DecodeFailure(String),

    /// Writing the image file failed. The in-memory bytes are retained so
    /// the save can be retried without regenerating the diagram.
    #[error("Failed to save {path}: {reason}")]
    SaveFailure { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
