//! Modal stack for managing overlays
//!
//! Only the top modal receives input events.

/// Represents a modal overlay that can be displayed on top of the page
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Live analysis demo
    Demo,
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Whether the modal is anywhere on the stack
    pub fn contains(&self, modal: &Modal) -> bool {
        self.stack.iter().any(|m| m == modal)
    }

    /// Iterate from the bottom modal to the top one
    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Demo);
        stack.push(Modal::QuitConfirm);

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Demo));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_stack_iterates_bottom_up() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Demo);
        stack.push(Modal::Help);

        assert!(stack.contains(&Modal::Demo));
        let order: Vec<&Modal> = stack.iter().collect();
        assert_eq!(order, vec![&Modal::Demo, &Modal::Help]);
        assert_eq!(stack.top(), Some(&Modal::Help));
    }
}
