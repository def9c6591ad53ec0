use crate::action::ActionError;
use crate::canvas::CanvasError;
use crate::history::HistoryError;
use thiserror::Error;

pub type DrawResult<T> = std::result::Result<T, DrawError>;

#[derive(Debug, Error)]
pub enum DrawError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    History(#[from] HistoryError),
}
