use std::cell::RefCell;

use crate::shape::ShapeId;

/// Notification emitted by a drawing when its shape set changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingEvent {
    ShapeAdded { id: ShapeId },
    ShapeRemoved { id: ShapeId },
    Cleared,
}

/// Receives drawing change notifications, synchronously on the mutating
/// caller's thread.
pub trait DrawingObserver {
    fn on_drawing_event(&self, event: &DrawingEvent);
}

/// A simple bus broadcasting drawing events to registered observers.
///
/// Subscriptions are transient runtime state: cloning a bus (and, by
/// extension, deserializing an aggregate that embeds one) yields an empty
/// bus. Owners must resubscribe after every load.
#[derive(Default)]
pub struct ObserverBus {
    observers: RefCell<Vec<Box<dyn DrawingObserver>>>,
}

impl Clone for ObserverBus {
    fn clone(&self) -> Self {
        // Subscriptions never travel with the data
        Self::new()
    }
}

impl std::fmt::Debug for ObserverBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverBus")
            .field("observers", &format!("<{} observers>", self.observers.borrow().len()))
            .finish()
    }
}

impl ObserverBus {
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe an observer to receive events.
    pub fn subscribe(&self, observer: Box<dyn DrawingObserver>) {
        self.observers.borrow_mut().push(observer);
    }

    /// Emit an event to all registered observers.
    pub fn emit(&self, event: DrawingEvent) {
        for observer in &*self.observers.borrow() {
            observer.on_drawing_event(&event);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}
