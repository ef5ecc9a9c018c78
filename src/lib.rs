#![warn(clippy::all, rust_2018_idioms)]

pub mod color;
pub mod drawing;
pub mod factory;
pub mod geometry;
pub mod library;
pub mod observer;
pub mod persistence;
pub mod shape;

pub use color::ColorData;
pub use drawing::Drawing;
pub use factory::{create_shape, BuildResult, Rejection, ShapeOptions};
pub use geometry::{Point2D, Rect};
pub use library::ReusableShapeLibrary;
pub use observer::{DrawingEvent, DrawingObserver};
pub use persistence::{
    export_reusable_library, import_reusable_library, load_drawing, save_drawing,
    PersistenceError,
};
pub use shape::{Shape, ShapeId};
