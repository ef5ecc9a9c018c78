use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::library::ReusableShapeLibrary;

use super::error::PersistenceResult;
use super::format::{self, FORMAT_VERSION, LIBRARY_FORMAT};

#[derive(Serialize)]
struct LibraryFileRef<'a> {
    format: &'static str,
    version: u32,
    library: &'a ReusableShapeLibrary,
}

#[derive(Deserialize)]
struct LibraryFile {
    library: ReusableShapeLibrary,
}

/// Serializer for the reusable shape library aggregate.
pub struct LibrarySerializer;

impl LibrarySerializer {
    /// Write the full library to `path`, overwriting existing content.
    pub fn save(library: &ReusableShapeLibrary, path: &Path) -> PersistenceResult<()> {
        let file = LibraryFileRef {
            format: LIBRARY_FORMAT,
            version: FORMAT_VERSION,
            library,
        };

        let json = serde_json::to_string_pretty(&file)?;
        fs::write(path, json)?;

        info!(
            "saved library {:?} ({} templates) to {}",
            library.name(),
            library.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a library back, with the same failure modes as drawing loads.
    pub fn load(path: &Path) -> PersistenceResult<ReusableShapeLibrary> {
        let json = fs::read_to_string(path)?;

        let value: serde_json::Value = serde_json::from_str(&json)?;
        format::check_header(&value, LIBRARY_FORMAT)?;

        let file: LibraryFile = serde_json::from_value(value)?;
        format::validate_shapes(file.library.templates(), "library")?;

        info!(
            "loaded library {:?} ({} templates) from {}",
            file.library.name(),
            file.library.len(),
            path.display()
        );
        Ok(file.library)
    }
}
