use std::collections::HashSet;

use serde_json::Value;

use crate::shape::Shape;

use super::error::{PersistenceError, PersistenceResult};

/// Root tag identifying a serialized drawing.
pub(crate) const DRAWING_FORMAT: &str = "drawkit/drawing";

/// Root tag identifying a serialized shape library.
pub(crate) const LIBRARY_FORMAT: &str = "drawkit/library";

/// Current on-disk format version. Loads refuse anything newer.
pub(crate) const FORMAT_VERSION: u32 = 1;

/// Check the format tag and version of an already-parsed document before
/// attempting the full payload decode. A document without a recognizable
/// header is some other JSON value, not a file of ours.
pub(crate) fn check_header(value: &Value, expected: &str) -> PersistenceResult<()> {
    let format = value
        .get("format")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            PersistenceError::InvalidFormat("no format tag; not a drawkit file".to_owned())
        })?;

    if format != expected {
        return Err(PersistenceError::InvalidFormat(format!(
            "expected a {expected} file, found {format:?}"
        )));
    }

    let version = value
        .get("version")
        .and_then(Value::as_u64)
        .ok_or_else(|| PersistenceError::InvalidFormat("missing format version".to_owned()))?;

    if version > u64::from(FORMAT_VERSION) {
        return Err(PersistenceError::UnsupportedVersion(version as u32));
    }

    Ok(())
}

/// Re-check model invariants on loaded shapes. Shapes normally exist only
/// via the factory; a hand-edited or corrupted file must not smuggle an
/// invalid one past it.
pub(crate) fn validate_shapes(shapes: &[Shape], what: &str) -> PersistenceResult<()> {
    let mut seen = HashSet::new();

    for shape in shapes {
        if !seen.insert(shape.id()) {
            return Err(PersistenceError::InvalidFormat(format!(
                "duplicate shape id {} in {what}",
                shape.id()
            )));
        }

        match shape {
            Shape::Polygon(polygon) if polygon.vertices().len() < 3 => {
                return Err(PersistenceError::InvalidFormat(format!(
                    "polygon {} has {} vertices, need at least 3",
                    polygon.id(),
                    polygon.vertices().len()
                )));
            }
            Shape::Text(text)
                if text.text().is_empty()
                    || text.font_name().is_empty()
                    || !text.font_size().is_finite()
                    || text.font_size() <= 0.0 =>
            {
                return Err(PersistenceError::InvalidFormat(format!(
                    "text shape {} has invalid content or font parameters",
                    text.id()
                )));
            }
            _ => {}
        }
    }

    Ok(())
}
