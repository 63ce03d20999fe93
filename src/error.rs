//! Error types for the analysis pipeline.
//!
//! Only the edges of the pipeline can fail: acquiring the screenshot,
//! reading numbers off it, and assembling a consistent snapshot. The
//! scoring stages are pure and infallible.

use std::path::PathBuf;
use thiserror::Error;

/// The screenshot could not be obtained or decoded.
#[derive(Debug, Error)]
pub enum ImageAcquisitionError {
    #[error("failed to read screenshot {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode screenshot: {0}")]
    Decode(#[from] image::ImageError),
    #[error("screenshot is empty ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

/// The tiles handed to the assembler do not form a valid snapshot.
#[derive(Debug, Error, PartialEq)]
pub enum AssemblyError {
    #[error("got {slots} tile slots but {classifications} classifications")]
    CountMismatch {
        slots: usize,
        classifications: usize,
    },
    #[error("duplicate tile id: {0}")]
    DuplicateTileId(String),
    #[error("more than one tile carries the robber: {first} and {second}")]
    MultipleRobbers { first: String, second: String },
}

/// Any failure of a full screenshot-to-strategies run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    ImageAcquisition(#[from] ImageAcquisitionError),
    #[error("number recognition failed for tile {tile}: {source}")]
    Recognition {
        tile: String,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}
