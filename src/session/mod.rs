//! Drives a canvas and its history together: perform an action once, record
//! it, and replay it through undo/redo on demand.

use crate::action::Action;
use crate::canvas::Canvas;
use crate::config::DrawingConfig;
use crate::error::DrawResult;
use crate::history::{History, HistoryError};

/// One interactive drawing session: a canvas plus the history sequencing
/// every edit made to it. Exclusively owned by a single thread; destroyed
/// with the session, nothing persists.
#[derive(Debug)]
pub struct DrawingSession {
    canvas: Canvas,
    history: History,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            history: History::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, HistoryError> {
        Ok(Self {
            canvas: Canvas::new(),
            history: History::with_capacity(capacity)?,
        })
    }

    pub fn with_config(config: &DrawingConfig) -> DrawResult<Self> {
        Ok(Self {
            canvas: Canvas::with_config(config),
            history: History::with_capacity(config.history_capacity)?,
        })
    }

    /// Applies `action` once and records it. This is the single entry point
    /// for edits; undo and redo reuse the recorded instance, it is never
    /// reconstructed.
    pub fn perform(&mut self, mut action: Action) -> DrawResult<()> {
        action.apply(&mut self.canvas)?;
        self.history.add_action(action);
        Ok(())
    }

    /// Ends the in-progress gesture and records the completed stroke.
    pub fn finish_stroke(&mut self) -> DrawResult<()> {
        let action = self.canvas.finish_stroke()?;
        self.perform(action)
    }

    /// Undoes the most recent edit, returning its description so callers
    /// can update dependent state. `None` means there was nothing to undo.
    pub fn undo(&mut self) -> DrawResult<Option<String>> {
        Ok(self
            .history
            .undo(&mut self.canvas)?
            .map(Action::describe))
    }

    /// Redoes the most recently undone edit, returning its description.
    /// `None` means there was nothing to redo.
    pub fn redo(&mut self) -> DrawResult<Option<String>> {
        Ok(self
            .history
            .redo(&mut self.canvas)?
            .map(Action::describe))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ChangeColorAction, ChangeThicknessAction};
    use crate::geometry::{CanvasPoint, Color};

    #[test]
    fn perform_applies_and_records() {
        let mut session = DrawingSession::new();
        let before = session.canvas().color();

        session
            .perform(Action::ChangeColor(ChangeColorAction::new(Color::opaque(
                0, 255, 0,
            ))))
            .expect("perform should work");

        assert_eq!(session.canvas().color(), Color::opaque(0, 255, 0));
        assert!(session.can_undo());

        session.undo().expect("undo should work");
        assert_eq!(session.canvas().color(), before);
    }

    #[test]
    fn thickness_round_trips_through_undo_and_redo() {
        let mut session = DrawingSession::new();
        session.canvas_mut().set_stroke_width(10.0);

        let action = ChangeThicknessAction::new(20.0).expect("20.0 is a valid thickness");
        session
            .perform(Action::ChangeThickness(action))
            .expect("perform should work");
        assert_eq!(session.canvas().stroke_width(), 20.0);

        let undone = session.undo().expect("undo should work");
        assert_eq!(undone.as_deref(), Some("change thickness to 20"));
        assert_eq!(session.canvas().stroke_width(), 10.0);

        let redone = session.redo().expect("redo should work");
        assert_eq!(redone.as_deref(), Some("change thickness to 20"));
        assert_eq!(session.canvas().stroke_width(), 20.0);
    }

    #[test]
    fn finished_strokes_participate_in_undo_redo() {
        let mut session = DrawingSession::new();

        session
            .canvas_mut()
            .begin_stroke(CanvasPoint::new(0.0, 0.0))
            .expect("begin should work");
        session
            .canvas_mut()
            .extend_stroke(CanvasPoint::new(30.0, 0.0))
            .expect("extend should work");
        session.finish_stroke().expect("finish should work");

        assert_eq!(session.canvas().node_count(), 1);

        session.undo().expect("undo should work");
        assert_eq!(session.canvas().node_count(), 0);

        session.redo().expect("redo should work");
        assert_eq!(session.canvas().node_count(), 1);
    }

    #[test]
    fn cancelled_strokes_never_reach_the_history() {
        let mut session = DrawingSession::new();

        session
            .canvas_mut()
            .begin_stroke(CanvasPoint::new(0.0, 0.0))
            .expect("begin should work");
        session
            .canvas_mut()
            .cancel_stroke()
            .expect("cancel should work");

        assert!(!session.can_undo());
        assert_eq!(session.canvas().node_count(), 0);
    }

    #[test]
    fn session_respects_configured_capacity() {
        let config = DrawingConfig {
            history_capacity: 2,
            ..DrawingConfig::default()
        };
        let mut session = DrawingSession::with_config(&config).expect("config is valid");

        for value in [1, 2, 3] {
            session
                .perform(Action::ChangeColor(ChangeColorAction::new(Color::opaque(
                    value, 0, 0,
                ))))
                .expect("perform should work");
        }

        assert!(session.undo().expect("undo should work").is_some());
        assert!(session.undo().expect("undo should work").is_some());
        assert!(session.undo().expect("undo should work").is_none());
    }

    #[test]
    fn zero_capacity_session_is_rejected() {
        let err = DrawingSession::with_capacity(0).expect_err("zero capacity must be rejected");
        assert!(matches!(err, HistoryError::InvalidCapacity { capacity: 0 }));
    }

    #[test]
    fn clear_history_keeps_canvas_state() {
        let mut session = DrawingSession::new();
        session
            .perform(Action::ChangeColor(ChangeColorAction::new(Color::opaque(
                1, 2, 3,
            ))))
            .expect("perform should work");

        session.clear_history();

        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert_eq!(session.canvas().color(), Color::opaque(1, 2, 3));
    }

    #[test]
    fn undo_then_draw_replays_on_the_same_instance() {
        let mut session = DrawingSession::new();
        session.canvas_mut().set_stroke_width(1.0);

        let thicker = ChangeThicknessAction::new(8.0).expect("8.0 is a valid thickness");
        session
            .perform(Action::ChangeThickness(thicker))
            .expect("perform should work");
        session.undo().expect("undo should work");
        session.redo().expect("redo should work");
        session.undo().expect("undo should work");

        assert_eq!(session.canvas().stroke_width(), 1.0);
    }
}
