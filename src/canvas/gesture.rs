use std::cell::RefCell;
use std::rc::Rc;

use super::{Canvas, CanvasError};
use crate::action::{Action, StrokeAction};
use crate::geometry::CanvasPoint;
use crate::path::StrokePath;

/// Two-phase state machine for one continuous drawing gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Drawing,
}

pub(super) type StrokeListener = Box<dyn FnMut(&Action)>;

impl Canvas {
    pub fn gesture_phase(&self) -> GesturePhase {
        self.phase
    }

    /// Registers a listener invoked with the completed action every time a
    /// stroke gesture finishes.
    pub fn add_stroke_listener(&mut self, listener: impl FnMut(&Action) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Starts a stroke at `point`. The stroke is rendered immediately via a
    /// buffered live action so the user sees it while still drawing.
    pub fn begin_stroke(&mut self, point: CanvasPoint) -> Result<(), CanvasError> {
        if self.phase != GesturePhase::Idle {
            tracing::warn!(phase = ?self.phase, "begin_stroke out of turn");
            return Err(CanvasError::InvalidGesturePhase {
                operation: "begin_stroke",
                phase: self.phase,
            });
        }

        self.current_path.borrow_mut().move_to(point);
        self.last_point = point;
        tracing::debug!(x = point.x, y = point.y, "starting new stroke");

        let mut buffer = StrokeAction::new(Rc::clone(&self.current_path), self.paint.clone())?;
        buffer.apply(self)?;
        self.buffer = Some(buffer);
        self.phase = GesturePhase::Drawing;
        Ok(())
    }

    /// Extends the in-progress stroke towards `point`. Samples closer than
    /// the minimum move distance are ignored; accepted samples append a
    /// quadratic bezier through the midpoint so arcs join smoothly.
    pub fn extend_stroke(&mut self, point: CanvasPoint) -> Result<(), CanvasError> {
        if self.phase != GesturePhase::Drawing {
            tracing::warn!(phase = ?self.phase, "extend_stroke out of turn");
            return Err(CanvasError::InvalidGesturePhase {
                operation: "extend_stroke",
                phase: self.phase,
            });
        }

        if self.last_point.distance_to(point) < self.min_move_distance {
            return Ok(());
        }

        let control = self.last_point;
        let end = control.midpoint(point);
        self.current_path.borrow_mut().quad_to(control, end);
        self.last_point = point;

        // The live node shares the path; poke it so the new arc is drawn.
        let node = self.buffer.as_ref().and_then(StrokeAction::node);
        if let Some(node) = node {
            self.invalidate_node(node);
        }
        Ok(())
    }

    /// Ends the gesture: de-renders the live preview, notifies listeners,
    /// and hands the completed action to the caller. The caller applies it
    /// once and records it in the history; undo and redo thereafter reuse
    /// the same instance.
    pub fn finish_stroke(&mut self) -> Result<Action, CanvasError> {
        if self.phase != GesturePhase::Drawing {
            tracing::warn!(phase = ?self.phase, "finish_stroke out of turn");
            return Err(CanvasError::InvalidGesturePhase {
                operation: "finish_stroke",
                phase: self.phase,
            });
        }
        let Some(mut buffer) = self.buffer.take() else {
            return Err(CanvasError::InvalidGesturePhase {
                operation: "finish_stroke",
                phase: self.phase,
            });
        };

        buffer.reverse(self)?;
        self.phase = GesturePhase::Idle;

        let action = Action::Stroke(buffer);
        tracing::debug!(
            listeners = self.listeners.len(),
            action = %action.describe(),
            "stroke completed"
        );
        for listener in &mut self.listeners {
            listener(&action);
        }

        // The completed action keeps the old path object; without a fresh
        // one, every subsequent stroke would share the same geometry.
        self.current_path = Rc::new(RefCell::new(StrokePath::new()));
        Ok(action)
    }

    /// Aborts the gesture: the live preview is reversed and discarded, so
    /// the stroke never reaches the history.
    pub fn cancel_stroke(&mut self) -> Result<(), CanvasError> {
        if self.phase != GesturePhase::Drawing {
            tracing::warn!(phase = ?self.phase, "cancel_stroke out of turn");
            return Err(CanvasError::InvalidGesturePhase {
                operation: "cancel_stroke",
                phase: self.phase,
            });
        }

        let buffer = self.buffer.take();
        self.phase = GesturePhase::Idle;
        if let Some(mut buffer) = buffer {
            buffer.reverse(self)?;
        }
        self.current_path.borrow_mut().reset();
        tracing::debug!("stroke cancelled");
        Ok(())
    }
}
