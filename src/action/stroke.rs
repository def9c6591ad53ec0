use std::cell::RefCell;
use std::rc::Rc;

use super::{ActionError, ActionResult};
use crate::canvas::{Canvas, NodeId};
use crate::paint::Paint;
use crate::path::StrokePath;

/// Reversible action that renders one freehand stroke on the canvas.
///
/// The geometry is shared with the gesture layer while the stroke is still
/// being drawn; the paint is snapshotted at construction so the rendered
/// stroke keeps the appearance it had when the user began drawing, no
/// matter what happens to the canvas paint afterwards.
#[derive(Debug)]
pub struct StrokeAction {
    path: Rc<RefCell<StrokePath>>,
    paint: Paint,
    /// Handle of the rendered node, present only between apply and the
    /// matching reverse.
    node: Option<NodeId>,
}

impl StrokeAction {
    pub fn new(path: Rc<RefCell<StrokePath>>, paint: Paint) -> ActionResult<Self> {
        if path.borrow().is_empty() {
            return Err(ActionError::EmptyStroke);
        }

        Ok(Self {
            path,
            paint,
            node: None,
        })
    }

    /// Attaches a renderable node for this stroke to the canvas tree.
    pub fn apply(&mut self, canvas: &mut Canvas) -> ActionResult<()> {
        debug_assert!(
            self.node.is_none(),
            "stroke apply without an intervening reverse"
        );
        let node = canvas.attach_node(Rc::clone(&self.path), self.paint.clone());
        self.node = Some(node);
        Ok(())
    }

    /// Detaches this stroke's node from the canvas tree.
    ///
    /// A missing node means the rendering tree was mutated outside the
    /// history's control; that is a fatal desynchronization, reported in
    /// release builds as well.
    pub fn reverse(&mut self, canvas: &mut Canvas) -> ActionResult<()> {
        let Some(node) = self.node.take() else {
            return Err(ActionError::RenderTreeDesync { node: None });
        };

        match canvas.detach_node(node) {
            Ok(_) => Ok(()),
            Err(_) => Err(ActionError::RenderTreeDesync { node: Some(node) }),
        }
    }

    /// Requests a redraw of the attached node without changing logical
    /// state. Used while the shared path is still being extended in place.
    pub fn invalidate(&self, canvas: &mut Canvas) {
        if let Some(node) = self.node {
            canvas.invalidate_node(node);
        }
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn describe(&self) -> String {
        format!(
            "draw stroke with {} segments",
            self.path.borrow().segment_count()
        )
    }
}

#[cfg(test)]
impl StrokeAction {
    pub(crate) fn path_snapshot(&self) -> StrokePath {
        self.path.borrow().clone()
    }
}
