use super::{ActionError, ActionResult};
use crate::canvas::Canvas;

/// Reversible action that changes the canvas's current stroke width.
#[derive(Debug)]
pub struct ChangeThicknessAction {
    /// The width this action changes the current paint to.
    target: f32,
    /// The width the paint held immediately before the last apply.
    previous: Option<f32>,
    applied: bool,
}

impl ChangeThicknessAction {
    pub fn new(thickness: f32) -> ActionResult<Self> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(ActionError::InvalidThickness { thickness });
        }

        Ok(Self {
            target: thickness,
            previous: None,
            applied: false,
        })
    }

    pub fn apply(&mut self, canvas: &mut Canvas) -> ActionResult<()> {
        debug_assert!(
            !self.applied,
            "thickness apply without an intervening reverse"
        );
        self.previous = Some(canvas.stroke_width());
        canvas.set_stroke_width(self.target);
        self.applied = true;
        Ok(())
    }

    pub fn reverse(&mut self, canvas: &mut Canvas) -> ActionResult<()> {
        debug_assert!(self.applied, "thickness reverse before apply");
        if let Some(previous) = self.previous {
            canvas.set_stroke_width(previous);
        }
        self.applied = false;
        Ok(())
    }

    pub fn describe(&self) -> String {
        format!("change thickness to {}", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_thickness() {
        for thickness in [0.0, -1.0, -0.001] {
            let err = ChangeThicknessAction::new(thickness)
                .expect_err("non-positive thickness should be rejected");
            assert!(matches!(err, ActionError::InvalidThickness { .. }));
        }
    }

    #[test]
    fn rejects_non_finite_thickness() {
        for thickness in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = ChangeThicknessAction::new(thickness)
                .expect_err("non-finite thickness should be rejected");
            assert!(matches!(err, ActionError::InvalidThickness { .. }));
        }
    }

    #[test]
    fn apply_sets_and_reverse_restores_exactly() {
        let mut canvas = Canvas::new();
        canvas.set_stroke_width(10.0);

        let mut action = ChangeThicknessAction::new(20.0).expect("20.0 is a valid thickness");
        action
            .apply(&mut canvas)
            .expect("thickness apply cannot fail");
        assert_eq!(canvas.stroke_width(), 20.0);

        action
            .reverse(&mut canvas)
            .expect("thickness reverse cannot fail");
        assert_eq!(canvas.stroke_width(), 10.0);
    }

    #[test]
    fn repeated_apply_reverse_cycles_do_not_drift() {
        let mut canvas = Canvas::new();
        canvas.set_stroke_width(2.5);

        let mut action = ChangeThicknessAction::new(7.25).expect("7.25 is a valid thickness");
        for _ in 0..5 {
            action
                .apply(&mut canvas)
                .expect("thickness apply cannot fail");
            action
                .reverse(&mut canvas)
                .expect("thickness reverse cannot fail");
            assert_eq!(canvas.stroke_width(), 2.5);
        }
    }

    #[test]
    fn describe_reports_target_width() {
        let action = ChangeThicknessAction::new(30.0).expect("30.0 is a valid thickness");
        assert_eq!(action.describe(), "change thickness to 30");
    }
}
