//! Durable save/load for the two aggregate roots, a drawing and a
//! reusable shape library.
//!
//! The free functions below are the single entry point for callers: they
//! validate the path once, then delegate to the format-specific
//! serializer. I/O and format failures propagate directly so callers keep
//! the original diagnostic; a failed load leaves prior in-memory state
//! untouched.

mod drawing_file;
mod error;
mod format;
mod library_file;

use std::path::Path;

pub use drawing_file::DrawingSerializer;
pub use error::{PersistenceError, PersistenceResult};
pub use library_file::LibrarySerializer;

use crate::drawing::Drawing;
use crate::library::ReusableShapeLibrary;

/// Save a drawing to `path`, overwriting any existing file.
pub fn save_drawing(drawing: &Drawing, path: impl AsRef<Path>) -> PersistenceResult<()> {
    DrawingSerializer::save(drawing, non_empty_path(path.as_ref())?)
}

/// Load a drawing from `path`. The result has an empty observer list;
/// the caller resubscribes whatever needs change notifications.
pub fn load_drawing(path: impl AsRef<Path>) -> PersistenceResult<Drawing> {
    DrawingSerializer::load(non_empty_path(path.as_ref())?)
}

/// Save a reusable shape library to `path`.
pub fn export_reusable_library(
    library: &ReusableShapeLibrary,
    path: impl AsRef<Path>,
) -> PersistenceResult<()> {
    LibrarySerializer::save(library, non_empty_path(path.as_ref())?)
}

/// Load a reusable shape library from `path`.
pub fn import_reusable_library(path: impl AsRef<Path>) -> PersistenceResult<ReusableShapeLibrary> {
    LibrarySerializer::load(non_empty_path(path.as_ref())?)
}

// Checked before any filesystem access.
fn non_empty_path(path: &Path) -> PersistenceResult<&Path> {
    if path.as_os_str().is_empty() {
        return Err(PersistenceError::EmptyPath);
    }
    Ok(path)
}
