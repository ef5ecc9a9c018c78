use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::drawing::Drawing;

use super::error::PersistenceResult;
use super::format::{self, DRAWING_FORMAT, FORMAT_VERSION};

#[derive(Serialize)]
struct DrawingFileRef<'a> {
    format: &'static str,
    version: u32,
    drawing: &'a Drawing,
}

#[derive(Deserialize)]
struct DrawingFile {
    drawing: Drawing,
}

/// Serializer for the drawing aggregate: one file, whole graph.
pub struct DrawingSerializer;

impl DrawingSerializer {
    /// Write the full drawing to `path`, overwriting existing content.
    pub fn save(drawing: &Drawing, path: &Path) -> PersistenceResult<()> {
        let file = DrawingFileRef {
            format: DRAWING_FORMAT,
            version: FORMAT_VERSION,
            drawing,
        };

        let json = serde_json::to_string_pretty(&file)?;
        fs::write(path, json)?;

        info!("saved drawing ({} shapes) to {}", drawing.len(), path.display());
        Ok(())
    }

    /// Read a drawing back. Fails on I/O problems, unparseable content, a
    /// wrong root type, or shapes violating model invariants. The loaded
    /// drawing has no observers.
    pub fn load(path: &Path) -> PersistenceResult<Drawing> {
        let json = fs::read_to_string(path)?;

        let value: serde_json::Value = serde_json::from_str(&json)?;
        format::check_header(&value, DRAWING_FORMAT)?;

        let file: DrawingFile = serde_json::from_value(value)?;
        format::validate_shapes(file.drawing.shapes(), "drawing")?;

        info!("loaded drawing ({} shapes) from {}", file.drawing.len(), path.display());
        Ok(file.drawing)
    }
}
