//! In-process vector drawing surface with freehand stroke capture.
//!
//! # Invariants
//! - Strokes are only captured while drawing mode is on.
//! - Non-finite points, widths and objects are dropped, so every snapshot
//!   can be restored.
//! - `restore` and `clear` drop any stroke in progress.

use crate::model::canvas::{
    CanvasDocument, CanvasObject, DrawingSnapshot, PathObject, Point, DEFAULT_BRUSH_WIDTH,
};
use crate::service::drawing_history::{
    DrawingError, DrawingHistory, DrawingResult, DrawingSurface,
};

#[derive(Debug, Clone)]
pub struct VectorCanvas {
    document: CanvasDocument,
    drawing_mode: bool,
    brush_width: f32,
    active_stroke: Option<Vec<Point>>,
}

impl Default for VectorCanvas {
    fn default() -> Self {
        Self {
            document: CanvasDocument::default(),
            drawing_mode: true,
            brush_width: DEFAULT_BRUSH_WIDTH,
            active_stroke: None,
        }
    }
}

impl VectorCanvas {
    /// Blank 800x600 white canvas in drawing mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &CanvasDocument {
        &self.document
    }

    pub fn objects(&self) -> &[CanvasObject] {
        &self.document.objects
    }

    pub fn begin_stroke(&mut self, at: Point) {
        if self.drawing_mode && at.is_finite() {
            self.active_stroke = Some(vec![at]);
        }
    }

    pub fn extend_stroke(&mut self, to: Point) {
        if !to.is_finite() {
            return;
        }
        if let Some(points) = self.active_stroke.as_mut() {
            points.push(to);
        }
    }

    /// Finishes the stroke in progress as a path, without adding it.
    pub fn finish_stroke(&mut self) -> Option<CanvasObject> {
        let points = self.active_stroke.take()?;
        Some(CanvasObject::Path(PathObject::new(points, self.brush_width)))
    }
}

impl DrawingSurface for VectorCanvas {
    fn add_object(&mut self, object: CanvasObject) {
        if object.is_finite() {
            self.document.objects.push(object);
        }
    }

    fn clear(&mut self) {
        self.document = CanvasDocument::default();
        self.active_stroke = None;
    }

    fn snapshot(&self) -> DrawingResult<DrawingSnapshot> {
        DrawingSnapshot::encode(&self.document).map_err(DrawingError::Encode)
    }

    fn restore(&mut self, snapshot: &DrawingSnapshot) -> DrawingResult<()> {
        self.document = snapshot.decode().map_err(DrawingError::InvalidSnapshot)?;
        self.active_stroke = None;
        Ok(())
    }

    fn set_drawing_mode(&mut self, enabled: bool) {
        self.drawing_mode = enabled;
        if !enabled {
            self.active_stroke = None;
        }
    }

    fn is_drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    fn set_brush_width(&mut self, width: f32) {
        if width.is_finite() {
            self.brush_width = width;
        }
    }

    fn brush_width(&self) -> f32 {
        self.brush_width
    }
}

/// Pointer glue: a released stroke becomes one recorded change.
impl DrawingHistory<VectorCanvas> {
    pub fn pointer_down(&mut self, at: Point) {
        self.surface_mut().begin_stroke(at);
    }

    pub fn pointer_move(&mut self, to: Point) {
        self.surface_mut().extend_stroke(to);
    }

    /// Returns whether a stroke was committed.
    pub fn pointer_up(&mut self) -> DrawingResult<bool> {
        match self.surface_mut().finish_stroke() {
            Some(path) => {
                self.commit_object(path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VectorCanvas;
    use crate::model::canvas::{
        CanvasObject, DrawingSnapshot, PathObject, Point, DEFAULT_BRUSH_WIDTH,
    };
    use crate::service::drawing_history::{DrawingError, DrawingSurface};

    #[test]
    fn stroke_is_ignored_outside_drawing_mode() {
        let mut canvas = VectorCanvas::new();
        canvas.set_drawing_mode(false);
        canvas.begin_stroke(Point::new(0.0, 0.0));
        canvas.extend_stroke(Point::new(5.0, 5.0));
        assert!(canvas.finish_stroke().is_none());
    }

    #[test]
    fn clear_resets_to_blank_snapshot() {
        let mut canvas = VectorCanvas::new();
        canvas.begin_stroke(Point::new(0.0, 0.0));
        let path = canvas.finish_stroke().unwrap();
        canvas.add_object(path);
        canvas.clear();
        assert_eq!(canvas.snapshot().unwrap(), DrawingSnapshot::blank());
    }

    #[test]
    fn clear_after_restoring_other_dimensions_is_blank() {
        let mut canvas = VectorCanvas::new();
        let mut small = canvas.document().clone();
        small.width = 10;
        small.height = 10;
        small.version = 7;
        small.background = "#000000".to_string();
        canvas
            .restore(&DrawingSnapshot::encode(&small).unwrap())
            .unwrap();

        canvas.clear();

        assert_eq!(canvas.snapshot().unwrap(), DrawingSnapshot::blank());
    }

    #[test]
    fn non_finite_points_never_reach_the_document() {
        let mut canvas = VectorCanvas::new();
        canvas.begin_stroke(Point::new(f32::NAN, 1.0));
        assert!(canvas.finish_stroke().is_none());

        canvas.begin_stroke(Point::new(0.0, 0.0));
        canvas.extend_stroke(Point::new(f32::INFINITY, 1.0));
        canvas.extend_stroke(Point::new(2.0, 2.0));
        let CanvasObject::Path(path) = canvas.finish_stroke().unwrap();
        assert_eq!(path.points, vec![Point::new(0.0, 0.0), Point::new(2.0, 2.0)]);

        canvas.add_object(CanvasObject::Path(PathObject::new(
            vec![Point::new(f32::NEG_INFINITY, 0.0)],
            2.0,
        )));
        assert!(canvas.objects().is_empty());

        canvas.set_brush_width(f32::NAN);
        assert_eq!(canvas.brush_width(), DEFAULT_BRUSH_WIDTH);
    }

    #[test]
    fn restore_rejects_garbage() {
        let mut canvas = VectorCanvas::new();
        let err = canvas
            .restore(&DrawingSnapshot::new("not json"))
            .unwrap_err();
        assert!(matches!(err, DrawingError::InvalidSnapshot(_)));
    }
}
