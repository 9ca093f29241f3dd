//! Puzzle files on disk: JSON payloads accepted by the kernel compiler.

use std::path::{Path, PathBuf};

use nutsort_kernel::carrier::compile::{compile, CompileFailure};
use nutsort_kernel::carrier::puzzle::PuzzleV1;

/// Error loading a puzzle file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleFileError {
    /// The file could not be read.
    Io { path: PathBuf, detail: String },
    /// The file was read but its payload did not compile.
    Compile { path: PathBuf, failure: CompileFailure },
}

impl std::fmt::Display for PuzzleFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "{}: {detail}", path.display()),
            Self::Compile { path, failure } => write!(f, "{}: {failure}", path.display()),
        }
    }
}

impl std::error::Error for PuzzleFileError {}

/// Read and compile the puzzle at `path`.
///
/// # Errors
///
/// Returns [`PuzzleFileError::Io`] if the file cannot be read and
/// [`PuzzleFileError::Compile`] if its contents are not a valid puzzle.
pub fn load_puzzle(path: &Path) -> Result<PuzzleV1, PuzzleFileError> {
    let bytes = std::fs::read(path).map_err(|e| PuzzleFileError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    compile(&bytes).map_err(|failure| PuzzleFileError::Compile {
        path: path.to_path_buf(),
        failure,
    })
}

/// Write `puzzle` to `path` in canonical JSON form.
///
/// # Errors
///
/// Returns [`PuzzleFileError::Io`] if the file cannot be written.
pub fn save_puzzle(path: &Path, puzzle: &PuzzleV1) -> Result<(), PuzzleFileError> {
    std::fs::write(path, puzzle.canonical_bytes()).map_err(|e| PuzzleFileError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}
