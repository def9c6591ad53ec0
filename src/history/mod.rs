//! Bounded two-stack undo/redo sequencer.
//!
//! Applied actions are recorded on the undo stack; undoing moves an entry
//! to the redo stack after reversing it, redoing moves it back after
//! re-applying. The combined size of both stacks never exceeds the fixed
//! capacity: recording a new action while full drops the oldest undoable
//! entry without reversing it.

use std::collections::VecDeque;

use thiserror::Error;

use crate::action::{Action, ActionError};
use crate::canvas::Canvas;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("invalid history capacity {capacity}: must be positive")]
    InvalidCapacity { capacity: usize },
}

/// Sequences applied actions for undo/redo. Most-recent entries sit at the
/// back of each deque; capacity eviction pops the front of the undo deque,
/// independent of undo/redo order.
#[derive(Debug)]
pub struct History {
    undo_stack: VecDeque<Action>,
    redo_stack: VecDeque<Action>,
    capacity: usize,
}

impl History {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, HistoryError> {
        if capacity == 0 {
            return Err(HistoryError::InvalidCapacity { capacity });
        }

        Ok(Self {
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records an already-applied action.
    ///
    /// At capacity, the oldest undoable entry is dropped without being
    /// reversed. The redo stack is cleared: once a new action is recorded,
    /// the previously-undone branch is unreachable.
    pub fn add_action(&mut self, action: Action) {
        if self.undo_stack.len() + self.redo_stack.len() == self.capacity {
            if let Some(evicted) = self.undo_stack.pop_front() {
                tracing::debug!(action = %evicted.describe(), "history full, dropping oldest entry");
            }
        }

        tracing::debug!(action = %action.describe(), "recording action");
        self.undo_stack.push_back(action);
        self.redo_stack.clear();
    }

    /// Reverses the most recently recorded action and moves it to the redo
    /// stack. Returns `Ok(None)` when there is nothing to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> Result<Option<&Action>, ActionError> {
        let Some(mut action) = self.undo_stack.pop_back() else {
            tracing::debug!("nothing to undo");
            return Ok(None);
        };

        action.reverse(canvas)?;
        tracing::debug!(action = %action.describe(), "undo applied");
        self.redo_stack.push_back(action);
        Ok(self.redo_stack.back())
    }

    /// Re-applies the most recently undone action and moves it back to the
    /// undo stack. Returns `Ok(None)` when there is nothing to redo.
    pub fn redo(&mut self, canvas: &mut Canvas) -> Result<Option<&Action>, ActionError> {
        let Some(mut action) = self.redo_stack.pop_back() else {
            tracing::debug!("nothing to redo");
            return Ok(None);
        };

        action.apply(canvas)?;
        tracing::debug!(action = %action.describe(), "redo applied");
        self.undo_stack.push_back(action);
        Ok(self.undo_stack.back())
    }

    /// Discards all history bookkeeping. Nothing is reversed; the canvas is
    /// left exactly as it is.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        tracing::debug!("history cleared");
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Description of the action the next `undo` would reverse.
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(Action::describe)
    }

    /// Description of the action the next `redo` would re-apply.
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.back().map(Action::describe)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "undo size: {}, redo size: {}",
            self.undo_stack.len(),
            self.redo_stack.len()
        )
    }
}
