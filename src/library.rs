use log::warn;
use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeId};

/// A named palette of reusable shape templates.
///
/// Structurally a drawing (ordered, unique by id) but semantically
/// independent of any document: a library outlives the drawings that draw
/// from it, and carries no observers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReusableShapeLibrary {
    name: String,
    templates: Vec<Shape>,
}

impl ReusableShapeLibrary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            templates: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append a template. Returns `false` when the id is already present.
    pub fn add_template(&mut self, template: Shape) -> bool {
        if self.find_template(template.id()).is_some() {
            warn!("refusing to add duplicate template id {}", template.id());
            return false;
        }
        self.templates.push(template);
        true
    }

    /// Remove the template with the given id, returning it.
    pub fn remove_template(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.templates.iter().position(|t| t.id() == id)?;
        Some(self.templates.remove(index))
    }

    pub fn templates(&self) -> &[Shape] {
        &self.templates
    }

    pub fn find_template(&self, id: ShapeId) -> Option<&Shape> {
        self.templates.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
