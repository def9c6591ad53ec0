//! Reversible-action engine for an interactive drawing surface.
//!
//! Edits to the shared drawing context (paint changes and rendered
//! strokes) are modeled as atomic, invertible [`Action`]s, sequenced by a
//! bounded [`History`] that drives undo and redo in strict LIFO order. The
//! [`Canvas`] is the drawing target: current paint attributes, the
//! rendering tree of stroke nodes, and the in-progress gesture surface.
//! [`DrawingSession`] ties one canvas to one history for hosts that want
//! the whole engine behind a single handle.

pub mod action;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod logging;
pub mod paint;
pub mod path;
pub mod session;

pub use action::{Action, ActionError, ChangeColorAction, ChangeThicknessAction, StrokeAction};
pub use canvas::{Canvas, CanvasError, GesturePhase, NodeId, StrokeNode};
pub use config::{load_drawing_config, DrawingConfig};
pub use error::{DrawError, DrawResult};
pub use geometry::{CanvasPoint, Color};
pub use history::{History, HistoryError};
pub use paint::Paint;
pub use path::{PathSegment, StrokePath};
pub use session::DrawingSession;
