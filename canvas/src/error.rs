use std::io;
use std::path::{PathBuf};

use thiserror::Error;

///
/// Errors that can be produced by a canvas
///
#[derive(Error, Debug)]
pub enum CanvasError {
    /// A direct cell access was outside of the grid
    #[error("cell ({x}, {y}) is outside of the {width}x{height} canvas")]
    OutOfBounds { x: i64, y: i64, width: usize, height: usize },

    /// The rendered canvas could not be saved to a file
    #[error("could not save canvas to {path:?}: {source}")]
    Save { path: PathBuf, source: io::Error },

    /// The rendered canvas could not be written to a stream
    #[error("could not write canvas: {0}")]
    Write(#[from] io::Error),
}
