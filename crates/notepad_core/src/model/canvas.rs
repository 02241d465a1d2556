//! Vector canvas document and its serialized snapshot form.
//!
//! # Invariants
//! - A snapshot always captures the whole document, never a delta.
//! - [`DrawingSnapshot::blank`] decodes to [`CanvasDocument::default`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;
pub const CANVAS_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_STROKE_COLOR: &str = "#000000";
/// Brush width of a fresh canvas before any tool is picked.
pub const DEFAULT_BRUSH_WIDTH: f32 = 1.0;
/// Brush width applied whenever the pencil tool is selected.
pub const PENCIL_BRUSH_WIDTH: f32 = 2.0;

const DOCUMENT_VERSION: u32 = 1;
const BLANK_CANVAS_JSON: &str =
    r##"{"version":1,"width":800,"height":600,"background":"#ffffff","objects":[]}"##;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// NaN and infinities serialize as `null` and cannot be restored.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One freehand stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathObject {
    pub id: Uuid,
    pub points: Vec<Point>,
    pub stroke: String,
    pub stroke_width: f32,
}

impl PathObject {
    pub fn new(points: Vec<Point>, stroke_width: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            stroke: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.stroke_width.is_finite() && self.points.iter().all(|point| point.is_finite())
    }
}

/// Drawn object on the canvas. Only freehand paths exist so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CanvasObject {
    Path(PathObject),
}

impl CanvasObject {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Path(path) => path.id,
        }
    }

    /// Whether every coordinate survives a snapshot round trip.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Path(path) => path.is_finite(),
        }
    }
}

/// Full object graph of a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasDocument {
    pub version: u32,
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub objects: Vec<CanvasObject>,
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background: CANVAS_BACKGROUND.to_string(),
            objects: Vec::new(),
        }
    }
}

/// Serialized capture of a canvas at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingSnapshot(String);

impl DrawingSnapshot {
    pub fn new(serialized: impl Into<String>) -> Self {
        Self(serialized.into())
    }

    /// Snapshot of an empty 800x600 white canvas.
    pub fn blank() -> Self {
        Self(BLANK_CANVAS_JSON.to_string())
    }

    pub fn encode(document: &CanvasDocument) -> serde_json::Result<Self> {
        serde_json::to_string(document).map(Self)
    }

    pub fn decode(&self) -> serde_json::Result<CanvasDocument> {
        serde_json::from_str(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Toolbar tool selection.
///
/// Only `Draw` changes drawing behavior; the others just leave freehand mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawTool {
    #[default]
    Draw,
    Erase,
    Square,
    Circle,
}

impl DrawTool {
    pub fn enables_freehand(self) -> bool {
        matches!(self, Self::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasDocument, CanvasObject, DrawTool, DrawingSnapshot, PathObject, Point};

    #[test]
    fn blank_snapshot_matches_default_document() {
        let encoded = DrawingSnapshot::encode(&CanvasDocument::default()).unwrap();
        assert_eq!(encoded, DrawingSnapshot::blank());
        assert_eq!(
            DrawingSnapshot::blank().decode().unwrap(),
            CanvasDocument::default()
        );
    }

    #[test]
    fn objects_are_tagged_by_type() {
        let mut document = CanvasDocument::default();
        document.objects.push(CanvasObject::Path(PathObject::new(
            vec![Point::new(1.0, 2.0)],
            2.0,
        )));
        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["objects"][0]["type"], "path");
    }

    #[test]
    fn non_finite_geometry_is_detected() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f32::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f32::INFINITY).is_finite());

        let bad_point = CanvasObject::Path(PathObject::new(vec![Point::new(f32::NAN, 0.0)], 2.0));
        let bad_width = CanvasObject::Path(PathObject::new(vec![Point::new(0.0, 0.0)], f32::NAN));
        assert!(!bad_point.is_finite());
        assert!(!bad_width.is_finite());
    }

    #[test]
    fn only_pencil_enables_freehand() {
        assert!(DrawTool::Draw.enables_freehand());
        for tool in [DrawTool::Erase, DrawTool::Square, DrawTool::Circle] {
            assert!(!tool.enables_freehand());
        }
    }
}
