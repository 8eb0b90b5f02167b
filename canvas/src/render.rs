use crate::canvas::*;
use crate::error::*;

use itertools::*;
use tracing::{debug};

use std::fmt;
use std::fs;
use std::io::{Write};
use std::path::{Path};

impl Canvas {
    ///
    /// Renders the canvas as text
    ///
    /// Each row becomes one line of exactly `width` characters, and the lines are separated by `\n` (there's no
    /// newline after the last row).
    ///
    pub fn render(&self) -> String {
        self.rows()
            .map(|row| row.iter().collect::<String>())
            .join("\n")
    }

    ///
    /// Writes the rendered canvas to a stream
    ///
    pub fn write_to<TStream: Write>(&self, mut target: TStream) -> Result<(), CanvasError> {
        target.write_all(self.render().as_bytes())?;
        target.flush()?;

        Ok(())
    }

    ///
    /// Saves the rendered canvas as a UTF-8 text file, replacing the file if it already exists
    ///
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        let path = path.as_ref();
        let text = self.render();

        fs::write(path, text.as_bytes())
            .map_err(|source| CanvasError::Save { path: path.to_path_buf(), source })?;

        debug!("saved {}x{} canvas ({} bytes) to {:?}", self.width(), self.height(), text.len(), path);
        Ok(())
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }

            for ch in row {
                write!(f, "{}", ch)?;
            }
        }

        Ok(())
    }
}
