//! Reversible actions over a drawing canvas.
//!
//! Every state-changing edit is an [`Action`]: apply it once to produce the
//! forward effect, reverse it to restore the canvas to the state it was in
//! immediately before that apply. The history module sequences applied
//! actions and is the only caller that drives `apply`/`reverse` after the
//! initial application, always in strict alternation.

mod color;
mod stroke;
mod thickness;

pub use color::ChangeColorAction;
pub use stroke::StrokeAction;
pub use thickness::ChangeThicknessAction;

use thiserror::Error;

use crate::canvas::{Canvas, NodeId};

pub type ActionResult<T> = std::result::Result<T, ActionError>;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("invalid stroke thickness {thickness}: must be positive and finite")]
    InvalidThickness { thickness: f32 },

    #[error("stroke has no geometry")]
    EmptyStroke,

    #[error(
        "stroke node {node:?} is missing from the rendering tree: \
         history and rendering tree have desynchronized"
    )]
    RenderTreeDesync { node: Option<NodeId> },
}

/// The closed set of reversible edits. Variants are known at design time,
/// so dispatch is a match rather than an open trait object.
#[derive(Debug)]
pub enum Action {
    ChangeColor(ChangeColorAction),
    ChangeThickness(ChangeThicknessAction),
    Stroke(StrokeAction),
}

impl Action {
    /// Performs the forward mutation on `canvas`, capturing whatever prior
    /// state the variant needs to invert itself exactly.
    pub fn apply(&mut self, canvas: &mut Canvas) -> ActionResult<()> {
        match self {
            Self::ChangeColor(action) => action.apply(canvas),
            Self::ChangeThickness(action) => action.apply(canvas),
            Self::Stroke(action) => action.apply(canvas),
        }
    }

    /// Restores `canvas` to the state it was in immediately before the most
    /// recent [`apply`](Self::apply).
    pub fn reverse(&mut self, canvas: &mut Canvas) -> ActionResult<()> {
        match self {
            Self::ChangeColor(action) => action.reverse(canvas),
            Self::ChangeThickness(action) => action.reverse(canvas),
            Self::Stroke(action) => action.reverse(canvas),
        }
    }

    /// Stable human-readable summary of the mutation, for logging and
    /// undo/redo labels. Never used for control flow.
    pub fn describe(&self) -> String {
        match self {
            Self::ChangeColor(action) => action.describe(),
            Self::ChangeThickness(action) => action.describe(),
            Self::Stroke(action) => action.describe(),
        }
    }
}
