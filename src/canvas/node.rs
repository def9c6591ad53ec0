use std::cell::RefCell;
use std::rc::Rc;

use crate::paint::Paint;
use crate::path::StrokePath;

/// Opaque handle to a node attached to the canvas rendering tree. Holders
/// resolve it through the canvas; the canvas alone owns node lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u64);

/// A renderable stroke: shared geometry plus the paint that was current
/// when the stroke began. The paint never changes after construction, so
/// later global paint changes cannot repaint an already-drawn stroke.
#[derive(Debug, Clone)]
pub struct StrokeNode {
    id: NodeId,
    path: Rc<RefCell<StrokePath>>,
    paint: Paint,
    revision: u64,
}

impl StrokeNode {
    pub(crate) fn new(id: NodeId, path: Rc<RefCell<StrokePath>>, paint: Paint) -> Self {
        Self {
            id,
            path,
            paint,
            revision: 0,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn path(&self) -> &Rc<RefCell<StrokePath>> {
        &self.path
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    /// How many redraws have been requested for this node since it was
    /// attached.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.revision = self.revision.saturating_add(1);
    }
}
