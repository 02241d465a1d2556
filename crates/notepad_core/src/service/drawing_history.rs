//! Snapshot-based undo history over a drawing surface.
//!
//! # Responsibility
//! - Record the full surface state after every drawn object.
//! - Step back one snapshot on undo; wipe everything on clear.
//!
//! # Invariants
//! - The last history entry is always the currently rendered state.
//! - Undo drops exactly one entry and restores the new tail, or the blank
//!   canvas when no entry remains. There is no redo.
//! - Clear is not recorded and empties the history.

use crate::model::canvas::{CanvasObject, DrawTool, DrawingSnapshot, PENCIL_BRUSH_WIDTH};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DrawingResult<T> = Result<T, DrawingError>;

#[derive(Debug)]
pub enum DrawingError {
    /// Surface state could not be serialized.
    Encode(serde_json::Error),
    /// Snapshot text does not decode to a canvas document.
    InvalidSnapshot(serde_json::Error),
    /// Object carries NaN or infinite geometry.
    NonFiniteObject,
}

impl Display for DrawingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to serialize canvas: {err}"),
            Self::InvalidSnapshot(err) => write!(f, "invalid canvas snapshot: {err}"),
            Self::NonFiniteObject => write!(f, "canvas object has non-finite geometry"),
        }
    }
}

impl Error for DrawingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) | Self::InvalidSnapshot(err) => Some(err),
            Self::NonFiniteObject => None,
        }
    }
}

/// Capabilities consumed from a vector drawing surface.
pub trait DrawingSurface {
    fn add_object(&mut self, object: CanvasObject);
    /// Resets to a blank white canvas.
    fn clear(&mut self);
    fn snapshot(&self) -> DrawingResult<DrawingSnapshot>;
    fn restore(&mut self, snapshot: &DrawingSnapshot) -> DrawingResult<()>;
    fn set_drawing_mode(&mut self, enabled: bool);
    fn is_drawing_mode(&self) -> bool;
    fn set_brush_width(&mut self, width: f32);
    fn brush_width(&self) -> f32;
}

pub struct DrawingHistory<D: DrawingSurface> {
    surface: D,
    history: Vec<DrawingSnapshot>,
    tool: DrawTool,
}

impl<D: DrawingSurface> DrawingHistory<D> {
    /// Wraps `surface` with an empty history and the pencil tool.
    pub fn new(surface: D) -> Self {
        Self {
            surface,
            history: Vec::new(),
            tool: DrawTool::Draw,
        }
    }

    /// Adds `object` to the surface and records the change.
    ///
    /// Objects with NaN or infinite geometry are rejected with
    /// `NonFiniteObject` and never reach the surface.
    pub fn commit_object(&mut self, object: CanvasObject) -> DrawingResult<()> {
        if !object.is_finite() {
            warn!("event=drawing_change module=drawing status=rejected reason=non_finite");
            return Err(DrawingError::NonFiniteObject);
        }
        self.surface.add_object(object);
        self.record_change()
    }

    /// Appends the surface's current state to the history.
    pub fn record_change(&mut self) -> DrawingResult<()> {
        let snapshot = self.surface.snapshot()?;
        self.history.push(snapshot);
        debug!(
            "event=drawing_change module=drawing status=ok history_len={}",
            self.history.len()
        );
        Ok(())
    }

    /// Steps back one snapshot. Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> DrawingResult<bool> {
        let len = self.history.len();
        if len == 0 {
            return Ok(false);
        }
        let target = if len >= 2 {
            self.history[len - 2].clone()
        } else {
            DrawingSnapshot::blank()
        };
        if let Err(err) = self.surface.restore(&target) {
            warn!("event=drawing_undo module=drawing status=error error={err}");
            return Err(err);
        }
        self.history.pop();
        debug!(
            "event=drawing_undo module=drawing status=ok history_len={}",
            self.history.len()
        );
        Ok(true)
    }

    /// Blanks the surface and forgets the whole history.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.history.clear();
        info!("event=drawing_clear module=drawing status=ok");
    }

    /// Switches tools. Only the pencil configures the brush.
    pub fn select_tool(&mut self, tool: DrawTool) {
        self.tool = tool;
        if tool.enables_freehand() {
            self.surface.set_drawing_mode(true);
            self.surface.set_brush_width(PENCIL_BRUSH_WIDTH);
        } else {
            self.surface.set_drawing_mode(false);
        }
        debug!("event=drawing_tool module=drawing status=ok tool={tool:?}");
    }

    pub fn tool(&self) -> DrawTool {
        self.tool
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[DrawingSnapshot] {
        &self.history
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn into_surface(self) -> D {
        self.surface
    }

    // Mutating the surface directly bypasses the history; keep it in-crate.
    pub(crate) fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }
}
