use super::ActionResult;
use crate::canvas::Canvas;
use crate::geometry::Color;

/// Reversible action that changes the canvas's current paint color.
#[derive(Debug)]
pub struct ChangeColorAction {
    /// The color this action changes the current paint to.
    target: Color,
    /// The color the paint held immediately before the last apply.
    previous: Option<Color>,
    applied: bool,
}

impl ChangeColorAction {
    pub fn new(target: Color) -> Self {
        Self {
            target,
            previous: None,
            applied: false,
        }
    }

    pub fn apply(&mut self, canvas: &mut Canvas) -> ActionResult<()> {
        debug_assert!(!self.applied, "color apply without an intervening reverse");
        self.previous = Some(canvas.color());
        canvas.set_color(self.target);
        self.applied = true;
        Ok(())
    }

    pub fn reverse(&mut self, canvas: &mut Canvas) -> ActionResult<()> {
        debug_assert!(self.applied, "color reverse before apply");
        if let Some(previous) = self.previous {
            canvas.set_color(previous);
        }
        self.applied = false;
        Ok(())
    }

    pub fn describe(&self) -> String {
        let (r, g, b, a) = self.target.rgba();
        format!("change color to rgba({r}, {g}, {b}, {a})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Color = Color::opaque(0, 0, 255);

    #[test]
    fn apply_captures_previous_and_sets_target() {
        let mut canvas = Canvas::new();
        canvas.set_color(Color::opaque(255, 0, 0));

        let mut action = ChangeColorAction::new(BLUE);
        action.apply(&mut canvas).expect("color apply cannot fail");

        assert_eq!(canvas.color(), BLUE);
    }

    #[test]
    fn reverse_restores_color_exactly() {
        let mut canvas = Canvas::new();
        canvas.set_color(Color::new(12, 34, 56, 78));

        let mut action = ChangeColorAction::new(BLUE);
        action.apply(&mut canvas).expect("color apply cannot fail");
        action
            .reverse(&mut canvas)
            .expect("color reverse cannot fail");

        assert_eq!(canvas.color(), Color::new(12, 34, 56, 78));
    }

    #[test]
    fn repeated_apply_reverse_cycles_do_not_drift() {
        let mut canvas = Canvas::new();
        canvas.set_color(Color::opaque(1, 2, 3));

        let mut action = ChangeColorAction::new(BLUE);
        for _ in 0..5 {
            action.apply(&mut canvas).expect("color apply cannot fail");
            assert_eq!(canvas.color(), BLUE);
            action
                .reverse(&mut canvas)
                .expect("color reverse cannot fail");
            assert_eq!(canvas.color(), Color::opaque(1, 2, 3));
        }
    }

    #[test]
    fn reapply_recaptures_the_current_color() {
        let mut canvas = Canvas::new();
        canvas.set_color(Color::opaque(10, 10, 10));

        let mut action = ChangeColorAction::new(BLUE);
        action.apply(&mut canvas).expect("color apply cannot fail");
        action
            .reverse(&mut canvas)
            .expect("color reverse cannot fail");

        // A different mutator runs between cycles; the next apply must
        // capture whatever the attribute holds now.
        canvas.set_color(Color::opaque(20, 20, 20));
        action.apply(&mut canvas).expect("color apply cannot fail");
        action
            .reverse(&mut canvas)
            .expect("color reverse cannot fail");
        assert_eq!(canvas.color(), Color::opaque(20, 20, 20));
    }

    #[test]
    fn describe_reports_target_channels() {
        let action = ChangeColorAction::new(Color::new(1, 2, 3, 4));
        assert_eq!(action.describe(), "change color to rgba(1, 2, 3, 4)");
    }
}
