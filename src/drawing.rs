use log::warn;
use serde::{Deserialize, Serialize};

use crate::observer::{DrawingEvent, DrawingObserver, ObserverBus};
use crate::shape::{Shape, ShapeId};

/// The document: an ordered collection of shapes.
///
/// Insertion order is z-order — later shapes draw on top. Shapes are
/// unique by id. Observers are notified synchronously on every mutation;
/// the observer list is transient and comes back empty after a clone or a
/// reload, so the owning application must resubscribe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Drawing {
    shapes: Vec<Shape>,
    #[serde(skip)]
    observers: ObserverBus,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape at the top of the z-order and notify observers.
    ///
    /// Returns `false` (and leaves the drawing untouched) when a shape
    /// with the same id is already present.
    pub fn add_shape(&mut self, shape: Shape) -> bool {
        let id = shape.id();
        if self.find_shape(id).is_some() {
            warn!("refusing to add duplicate shape id {id}");
            return false;
        }

        self.shapes.push(shape);
        self.observers.emit(DrawingEvent::ShapeAdded { id });
        true
    }

    /// Remove the shape with the given id, returning it. Absent ids are a
    /// no-op reported as `None`; observers are only notified on removal.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|shape| shape.id() == id)?;
        let removed = self.shapes.remove(index);
        self.observers.emit(DrawingEvent::ShapeRemoved { id });
        Some(removed)
    }

    /// Shapes in z-order, bottom first.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Remove every shape and notify observers once.
    pub fn clear(&mut self) {
        if !self.shapes.is_empty() {
            self.shapes.clear();
            self.observers.emit(DrawingEvent::Cleared);
        }
    }

    pub fn subscribe(&self, observer: Box<dyn DrawingObserver>) {
        self.observers.subscribe(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.observer_count()
    }
}
