use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use drawkit::factory::{self, ShapeOptions};
use drawkit::observer::{DrawingEvent, DrawingObserver};
use drawkit::persistence::{
    export_reusable_library, import_reusable_library, load_drawing, save_drawing,
    PersistenceError,
};
use drawkit::{ColorData, Drawing, Point2D, ReusableShapeLibrary, Shape};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

struct Recorder(Rc<RefCell<Vec<DrawingEvent>>>);

impl DrawingObserver for Recorder {
    fn on_drawing_event(&self, event: &DrawingEvent) {
        self.0.borrow_mut().push(*event);
    }
}

/// One shape of every variant, with distinct colors and fills.
fn mixed_drawing() -> Drawing {
    let mut drawing = Drawing::new();

    let line = factory::create_shape(
        "line",
        Some(Point2D::new(1.0, 2.0)),
        Some(Point2D::new(30.0, 40.0)),
        ColorData::rgb(255, 0, 0),
        None,
        None,
    )
    .expect("line");

    let rectangle = factory::create_shape(
        "rectangle",
        Some(Point2D::new(10.0, 20.0)),
        Some(Point2D::new(110.0, 70.0)),
        ColorData::rgb(0, 255, 0),
        Some(ColorData::new(0, 0, 255, 128)),
        None,
    )
    .expect("rectangle");

    let ellipse = factory::create_shape(
        "ellipse",
        Some(Point2D::new(-5.0, -5.0)),
        Some(Point2D::new(5.0, 5.0)),
        ColorData::BLACK,
        None,
        None,
    )
    .expect("ellipse");

    let polygon_options = ShapeOptions::Polygon {
        vertices: vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(8.0, 0.0),
            Point2D::new(8.0, 6.0),
            Point2D::new(0.0, 6.0),
        ],
    };
    let polygon = factory::create_shape(
        "polygon",
        None,
        None,
        ColorData::rgb(10, 20, 30),
        Some(ColorData::WHITE),
        Some(&polygon_options),
    )
    .expect("polygon");

    let text_options = ShapeOptions::Text {
        text: "round trip".to_owned(),
        font_size: 16.0,
        font_name: "Sans".to_owned(),
        position: Some(Point2D::new(42.0, 24.0)),
        text_color: Some(ColorData::rgb(90, 90, 90)),
    };
    let text = factory::create_shape("text", None, None, ColorData::BLACK, None, Some(&text_options))
        .expect("text");

    for shape in [line, rectangle, ellipse, polygon, text] {
        assert!(drawing.add_shape(shape));
    }
    drawing
}

fn assert_same_shapes(saved: &[Shape], loaded: &[Shape]) {
    assert_eq!(saved.len(), loaded.len());
    for (before, after) in saved.iter().zip(loaded) {
        assert_eq!(before.id(), after.id());
        assert_eq!(before.kind(), after.kind());
        assert_eq!(before.stroke_color(), after.stroke_color());
        assert_eq!(before.fill_color(), after.fill_color());

        let (b, a) = (before.bounds(), after.bounds());
        assert_close(a.x, b.x);
        assert_close(a.y, b.y);
        assert_close(a.width, b.width);
        assert_close(a.height, b.height);
    }
}

#[test]
fn drawing_round_trip_preserves_the_whole_graph() {
    init_logs();

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scene.json");

    let drawing = mixed_drawing();
    drawing.subscribe(Box::new(Recorder(Rc::new(RefCell::new(Vec::new())))));

    save_drawing(&drawing, &path).expect("save should succeed");
    let loaded = load_drawing(&path).expect("load should succeed");

    assert_same_shapes(drawing.shapes(), loaded.shapes());

    // Subscriptions are transient and never persisted.
    assert_eq!(drawing.observer_count(), 1);
    assert_eq!(loaded.observer_count(), 0);
}

#[test]
fn library_round_trip_preserves_name_and_templates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("palette.json");

    let mut library = ReusableShapeLibrary::new("starter shapes");
    for shape in mixed_drawing().shapes() {
        assert!(library.add_template(shape.clone()));
    }

    export_reusable_library(&library, &path).expect("export should succeed");
    let loaded = import_reusable_library(&path).expect("import should succeed");

    assert_eq!(loaded.name(), "starter shapes");
    assert_same_shapes(library.templates(), loaded.templates());
}

#[test]
fn save_overwrites_existing_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scene.json");

    let big = mixed_drawing();
    save_drawing(&big, &path).expect("first save");

    let mut small = Drawing::new();
    let only = factory::create_shape(
        "line",
        Some(Point2D::new(0.0, 0.0)),
        Some(Point2D::new(1.0, 1.0)),
        ColorData::BLACK,
        None,
        None,
    )
    .expect("line");
    let only_id = only.id();
    small.add_shape(only);
    save_drawing(&small, &path).expect("second save");

    let loaded = load_drawing(&path).expect("load");
    assert_eq!(loaded.len(), 1);
    assert!(loaded.find_shape(only_id).is_some());
}

#[test]
fn empty_path_fails_before_touching_the_filesystem() {
    let drawing = Drawing::new();
    let library = ReusableShapeLibrary::new("empty");

    assert!(matches!(
        save_drawing(&drawing, ""),
        Err(PersistenceError::EmptyPath)
    ));
    assert!(matches!(
        load_drawing(""),
        Err(PersistenceError::EmptyPath)
    ));
    assert!(matches!(
        export_reusable_library(&library, ""),
        Err(PersistenceError::EmptyPath)
    ));
    assert!(matches!(
        import_reusable_library(""),
        Err(PersistenceError::EmptyPath)
    ));
}

#[test]
fn missing_file_is_an_io_fault() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.json");

    assert!(matches!(
        load_drawing(&path),
        Err(PersistenceError::Io(_))
    ));
    assert!(matches!(
        import_reusable_library(&path),
        Err(PersistenceError::Io(_))
    ));
}

#[test]
fn unparseable_bytes_are_a_content_fault() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("garbage.json");
    fs::write(&path, b"this is not json {{{").expect("write");

    assert!(matches!(
        load_drawing(&path),
        Err(PersistenceError::Serialization(_))
    ));
}

#[test]
fn wrong_root_type_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");

    // A library file is not a drawing, and vice versa.
    let library_path = dir.path().join("palette.json");
    export_reusable_library(&ReusableShapeLibrary::new("palette"), &library_path)
        .expect("export");
    assert!(matches!(
        load_drawing(&library_path),
        Err(PersistenceError::InvalidFormat(_))
    ));

    let drawing_path = dir.path().join("scene.json");
    save_drawing(&Drawing::new(), &drawing_path).expect("save");
    assert!(matches!(
        import_reusable_library(&drawing_path),
        Err(PersistenceError::InvalidFormat(_))
    ));

    // Valid JSON that was never one of our files.
    let stray_path = dir.path().join("stray.json");
    fs::write(&stray_path, r#"{"hello": "world"}"#).expect("write");
    assert!(matches!(
        load_drawing(&stray_path),
        Err(PersistenceError::InvalidFormat(_))
    ));
}

#[test]
fn newer_format_version_is_refused() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scene.json");
    save_drawing(&mixed_drawing(), &path).expect("save");

    let mut value: serde_json::Value = read_json(&path);
    value["version"] = serde_json::json!(99);
    write_json(&path, &value);

    assert!(matches!(
        load_drawing(&path),
        Err(PersistenceError::UnsupportedVersion(99))
    ));
}

#[test]
fn duplicate_ids_in_a_file_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scene.json");
    save_drawing(&mixed_drawing(), &path).expect("save");

    let mut value: serde_json::Value = read_json(&path);
    let shapes = value["drawing"]["shapes"]
        .as_array_mut()
        .expect("shapes array");
    let first = shapes[0].clone();
    shapes.push(first);
    write_json(&path, &value);

    assert!(matches!(
        load_drawing(&path),
        Err(PersistenceError::InvalidFormat(_))
    ));
}

#[test]
fn degenerate_polygon_in_a_file_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scene.json");
    save_drawing(&mixed_drawing(), &path).expect("save");

    let mut value: serde_json::Value = read_json(&path);
    let shapes = value["drawing"]["shapes"]
        .as_array_mut()
        .expect("shapes array");
    let polygon = shapes
        .iter_mut()
        .find(|shape| shape["kind"] == "polygon")
        .expect("polygon present");
    let vertices = polygon["vertices"].as_array_mut().expect("vertices array");
    vertices.truncate(2);
    write_json(&path, &value);

    assert!(matches!(
        load_drawing(&path),
        Err(PersistenceError::InvalidFormat(_))
    ));
}

fn read_json(path: &Path) -> serde_json::Value {
    let json = fs::read_to_string(path).expect("read");
    serde_json::from_str(&json).expect("parse")
}

fn write_json(path: &Path, value: &serde_json::Value) {
    let json = serde_json::to_string_pretty(value).expect("encode");
    fs::write(path, json).expect("write");
}
