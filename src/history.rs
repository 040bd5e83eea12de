/// Linear undo/redo history: a stack of live items and a stack of undone ones.
///
/// Items move between the two stacks but never live in both. Callers decide
/// when redo stops being valid through [`History::invalidate_redo`].
#[derive(Debug, Clone)]
pub struct History<T> {
    /// Items that can be undone, oldest first
    undo_stack: Vec<T>,
    /// Items that can be redone, most recently undone last
    redo_stack: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Push a finished item on top of the history. The redo stack is left alone.
    pub fn push(&mut self, item: T) {
        self.undo_stack.push(item);
    }

    /// Drop everything that could be redone
    pub fn invalidate_redo(&mut self) {
        if !self.redo_stack.is_empty() {
            log::debug!("Discarding {} redo entries", self.redo_stack.len());
        }
        self.redo_stack.clear();
    }

    /// Move the newest item onto the redo stack
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(item) => {
                self.redo_stack.push(item);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone item back
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(item) => {
                self.undo_stack.push(item);
                true
            }
            None => false,
        }
    }

    /// Returns true if there are items that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are items that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[T] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[T] {
        &self.redo_stack
    }

    /// Clear both stacks
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_on_empty_history() {
        let mut history: History<u32> = History::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.undo_stack().is_empty());
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn test_push_keeps_redo() {
        let mut history = History::new();
        history.push(1);
        history.push(2);
        assert!(history.undo());
        assert_eq!(history.redo_stack(), &[2]);

        history.push(3);
        assert_eq!(history.undo_stack(), &[1, 3]);
        assert_eq!(history.redo_stack(), &[2]);

        history.invalidate_redo();
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_is_lifo() {
        let mut history = History::new();
        for i in 0..3 {
            history.push(i);
        }
        assert!(history.undo());
        assert!(history.undo());
        assert_eq!(history.undo_stack(), &[0]);
        assert_eq!(history.redo_stack(), &[2, 1]);

        assert!(history.redo());
        assert_eq!(history.undo_stack(), &[0, 1]);
        assert_eq!(history.redo_stack(), &[2]);
    }
}
