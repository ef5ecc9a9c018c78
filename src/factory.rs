use log::debug;
use thiserror::Error;

use crate::color::ColorData;
use crate::geometry::{Point2D, Rect};
use crate::shape::{EllipseShape, LineSegment, PolygonShape, RectangleShape, Shape, TextShape};

/// Minimum length for a line segment; anything shorter is a degenerate
/// drag (e.g. an accidental click) and is rejected.
pub const MIN_LINE_LENGTH: f64 = 0.01;

/// Minimum width and height for rectangle and ellipse bounds.
pub const MIN_RECT_EXTENT: f64 = 0.01;

/// Variant-specific construction parameters for the shapes that need more
/// than two anchor points. Validated once here, at the factory boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeOptions {
    Polygon {
        vertices: Vec<Point2D>,
    },
    Text {
        text: String,
        font_size: f64,
        font_name: String,
        /// Anchor for the text; falls back to `p1` when absent.
        position: Option<Point2D>,
        /// Overrides the stroke color as the rendered text color.
        text_color: Option<ColorData>,
    },
}

/// Why the factory declined to build a shape.
///
/// A rejection is an expected outcome of user input (a zero-length drag,
/// a two-vertex "polygon"), not a fault: callers treat it as "nothing
/// happened" and typically let the user try again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("unrecognized tool selector: {0:?}")]
    UnknownSelector(String),
    #[error("{kind} requires two anchor points")]
    MissingPoints { kind: &'static str },
    #[error("line is degenerate: length {length} is at or below the minimum")]
    DegenerateLine { length: f64 },
    #[error("{kind} is degenerate: {width} x {height} is at or below the minimum extent")]
    DegenerateRect {
        kind: &'static str,
        width: f64,
        height: f64,
    },
    #[error("{kind} requires shape options")]
    MissingOptions { kind: &'static str },
    #[error("expected {expected} options, got {got}")]
    OptionsMismatch {
        expected: &'static str,
        got: &'static str,
    },
    #[error("polygon requires at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("text content is empty")]
    EmptyText,
    #[error("font size must be positive, got {0}")]
    InvalidFontSize(f64),
    #[error("font name is empty")]
    EmptyFontName,
    #[error("text has no anchor: no position option and no p1")]
    MissingAnchor,
}

/// Result of a construction attempt: the built shape, or the reason the
/// input could not form one.
pub type BuildResult = Result<Shape, Rejection>;

/// Build a shape from a tool selection, raw geometry, and style.
///
/// `selector` is matched case-insensitively against the fixed tool set
/// (`line`, `rectangle`, `ellipse`, `polygon`, `text`, with or without a
/// `Tool` suffix, so `"RectangleTool"` and `"rectangle"` are equivalent).
/// `p1`/`p2` are the two anchor points collected by the tool layer;
/// polygon and text take their extra parameters through `options`.
///
/// Degenerate or incomplete input yields `Err(Rejection)`, never a panic.
pub fn create_shape(
    selector: &str,
    p1: Option<Point2D>,
    p2: Option<Point2D>,
    stroke_color: ColorData,
    fill_color: Option<ColorData>,
    options: Option<&ShapeOptions>,
) -> BuildResult {
    let result = match normalize_selector(selector) {
        Some("line") => build_line(p1, p2, stroke_color),
        Some("rectangle") => build_boxed("rectangle", p1, p2, stroke_color, fill_color),
        Some("ellipse") => build_boxed("ellipse", p1, p2, stroke_color, fill_color),
        Some("polygon") => build_polygon(options, stroke_color, fill_color),
        Some("text") => build_text(options, p1, stroke_color),
        _ => Err(Rejection::UnknownSelector(selector.to_owned())),
    };

    if let Err(reason) = &result {
        debug!("shape construction rejected ({selector}): {reason}");
    }
    result
}

/// Case-insensitive selector key with an optional `tool` suffix removed.
fn normalize_selector(selector: &str) -> Option<&'static str> {
    let key = selector.trim().to_ascii_lowercase();
    let key = key.strip_suffix("tool").unwrap_or(&key).trim_end();

    ["line", "rectangle", "ellipse", "polygon", "text"]
        .into_iter()
        .find(|known| *known == key)
}

fn build_line(p1: Option<Point2D>, p2: Option<Point2D>, stroke: ColorData) -> BuildResult {
    let (start, end) = both_points("line", p1, p2)?;

    let length = start.distance_to(&end);
    if length <= MIN_LINE_LENGTH {
        return Err(Rejection::DegenerateLine { length });
    }

    Ok(Shape::Line(LineSegment::new(start, end, stroke)))
}

fn build_boxed(
    kind: &'static str,
    p1: Option<Point2D>,
    p2: Option<Point2D>,
    stroke: ColorData,
    fill: Option<ColorData>,
) -> BuildResult {
    let (a, b) = both_points(kind, p1, p2)?;

    let bounds = Rect::from_corners(a, b);
    if bounds.width <= MIN_RECT_EXTENT || bounds.height <= MIN_RECT_EXTENT {
        return Err(Rejection::DegenerateRect {
            kind,
            width: bounds.width,
            height: bounds.height,
        });
    }

    Ok(match kind {
        "ellipse" => Shape::Ellipse(EllipseShape::new(bounds, stroke, fill)),
        _ => Shape::Rectangle(RectangleShape::new(bounds, stroke, fill)),
    })
}

fn build_polygon(
    options: Option<&ShapeOptions>,
    stroke: ColorData,
    fill: Option<ColorData>,
) -> BuildResult {
    let vertices = match options {
        Some(ShapeOptions::Polygon { vertices }) => vertices,
        Some(other) => {
            return Err(Rejection::OptionsMismatch {
                expected: "polygon",
                got: options_kind(other),
            });
        }
        None => return Err(Rejection::MissingOptions { kind: "polygon" }),
    };

    let count = vertices.len();
    PolygonShape::new(vertices.clone(), stroke, fill)
        .map(Shape::Polygon)
        .ok_or(Rejection::TooFewVertices(count))
}

fn build_text(
    options: Option<&ShapeOptions>,
    p1: Option<Point2D>,
    stroke: ColorData,
) -> BuildResult {
    let (text, font_size, font_name, position, text_color) = match options {
        Some(ShapeOptions::Text {
            text,
            font_size,
            font_name,
            position,
            text_color,
        }) => (text.as_str(), *font_size, font_name.as_str(), *position, *text_color),
        Some(other) => {
            return Err(Rejection::OptionsMismatch {
                expected: "text",
                got: options_kind(other),
            });
        }
        None => return Err(Rejection::MissingOptions { kind: "text" }),
    };

    if text.is_empty() {
        return Err(Rejection::EmptyText);
    }
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(Rejection::InvalidFontSize(font_size));
    }
    if font_name.is_empty() {
        return Err(Rejection::EmptyFontName);
    }

    let anchor = position.or(p1).ok_or(Rejection::MissingAnchor)?;
    let color = text_color.unwrap_or(stroke);

    TextShape::new(text.to_owned(), anchor, font_size, font_name.to_owned(), color)
        .map(Shape::Text)
        .ok_or(Rejection::EmptyText)
}

fn both_points(
    kind: &'static str,
    p1: Option<Point2D>,
    p2: Option<Point2D>,
) -> Result<(Point2D, Point2D), Rejection> {
    match (p1, p2) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(Rejection::MissingPoints { kind }),
    }
}

fn options_kind(options: &ShapeOptions) -> &'static str {
    match options {
        ShapeOptions::Polygon { .. } => "polygon",
        ShapeOptions::Text { .. } => "text",
    }
}
