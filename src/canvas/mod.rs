//! The drawing target: current paint attributes, the rendering tree of
//! attached stroke nodes, and the in-progress gesture surface.

mod gesture;
mod node;

pub use gesture::GesturePhase;
pub use node::{NodeId, StrokeNode};

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::action::{ActionError, StrokeAction};
use crate::config::DrawingConfig;
use crate::geometry::{CanvasPoint, Color};
use crate::paint::Paint;
use crate::path::StrokePath;

use gesture::StrokeListener;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("gesture {operation} requested while {phase:?}")]
    InvalidGesturePhase {
        operation: &'static str,
        phase: GesturePhase,
    },

    #[error("node {node:?} is not attached to the rendering tree")]
    NodeNotFound { node: NodeId },

    #[error(transparent)]
    Action(#[from] ActionError),
}

/// The shared drawing context actions operate on. Exclusively owned by one
/// thread for the lifetime of a session; nothing here locks or suspends.
pub struct Canvas {
    paint: Paint,
    min_move_distance: f32,
    nodes: Vec<StrokeNode>,
    next_node_id: u64,
    redraw_requests: u64,
    phase: GesturePhase,
    current_path: Rc<RefCell<StrokePath>>,
    buffer: Option<StrokeAction>,
    last_point: CanvasPoint,
    listeners: Vec<StrokeListener>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::with_config(&DrawingConfig::default())
    }

    pub fn with_config(config: &DrawingConfig) -> Self {
        Self {
            paint: Paint::new(config.default_color, config.default_thickness),
            min_move_distance: config.min_move_distance,
            nodes: Vec::new(),
            next_node_id: 1,
            redraw_requests: 0,
            phase: GesturePhase::Idle,
            current_path: Rc::new(RefCell::new(StrokePath::new())),
            buffer: None,
            last_point: CanvasPoint::new(0.0, 0.0),
            listeners: Vec::new(),
        }
    }

    fn allocate_node_id(&mut self) -> NodeId {
        let id = self.next_node_id;
        self.next_node_id = self.next_node_id.saturating_add(1);
        NodeId(id)
    }

    pub fn color(&self) -> Color {
        self.paint.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.paint.color = color;
    }

    pub fn stroke_width(&self) -> f32 {
        self.paint.stroke_width
    }

    pub fn set_stroke_width(&mut self, stroke_width: f32) {
        self.paint.stroke_width = stroke_width;
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn set_paint(&mut self, paint: Paint) {
        self.paint = paint;
    }

    /// Attaches a renderable stroke node and returns its handle.
    pub fn attach_node(&mut self, path: Rc<RefCell<StrokePath>>, paint: Paint) -> NodeId {
        let id = self.allocate_node_id();
        self.nodes.push(StrokeNode::new(id, path, paint));
        self.redraw_requests += 1;
        id
    }

    /// Detaches a node, returning it to the caller.
    pub fn detach_node(&mut self, node: NodeId) -> Result<StrokeNode, CanvasError> {
        let position = self
            .index_of(node)
            .ok_or(CanvasError::NodeNotFound { node })?;
        self.redraw_requests += 1;
        Ok(self.nodes.remove(position))
    }

    /// Position of a node in the rendering tree, or `None` if it is not
    /// attached. Used to validate detachment.
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.nodes.iter().position(|attached| attached.id() == node)
    }

    /// Requests a redraw of one attached node. Returns `false` if the node
    /// is not attached.
    pub fn invalidate_node(&mut self, node: NodeId) -> bool {
        match self
            .nodes
            .iter_mut()
            .find(|attached| attached.id() == node)
        {
            Some(attached) => {
                attached.mark_dirty();
                self.redraw_requests += 1;
                true
            }
            None => false,
        }
    }

    pub fn node(&self, node: NodeId) -> Option<&StrokeNode> {
        self.nodes.iter().find(|attached| attached.id() == node)
    }

    pub fn nodes(&self) -> &[StrokeNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of redraws requested so far; attach, detach, and
    /// invalidate all count.
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

// Listener closures have no useful Debug form; summarize the rest.
impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("paint", &self.paint)
            .field("phase", &self.phase)
            .field("nodes", &self.nodes.len())
            .field("redraw_requests", &self.redraw_requests)
            .finish_non_exhaustive()
    }
}
