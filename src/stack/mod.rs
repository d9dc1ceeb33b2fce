pub mod error;


use error::StackError;
use log::debug;

/// The limit used by `Stack::new_default`.
pub const DEFAULT_LIMIT: usize = 1000;

/// A generic last-in-first-out stack that holds at most `limit` elements.
/// Storage for `limit` elements is reserved at construction and never grows
/// past it; a push onto a full stack is rejected instead.
///
/// The stack does no synchronization of its own. Callers sharing one
/// instance between threads must wrap it in a lock.
#[derive(Debug)]
pub struct Stack<T> {
    elements: Vec<T>,
    limit: usize,
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.limit);
        elements.extend_from_slice(&self.elements);

        Self {
            elements,
            limit: self.limit,
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack that holds at most `limit` elements.
    ///
    /// Panics if `limit` is zero.
    pub fn new(limit: usize) -> Self {
        if limit == 0 {
            panic!("not positive limit value");
        }

        Self {
            elements: Vec::with_capacity(limit),
            limit,
        }
    }

    pub fn new_default() -> Self {
        Default::default()
    }

    /// Places `element` on top of the stack, or returns `StackError::Full`
    /// without storing it if the limit was reached.
    pub fn push(&mut self, element: T) -> Result<(), StackError> {
        if self.is_full() {
            debug!("push rejected, stack is at its limit of {}", self.limit);
            return Err(StackError::Full);
        }

        self.elements.push(element);
        Ok(())
    }

    /// Removes and returns the most recently pushed element.
    pub fn pop(&mut self) -> Result<T, StackError> {
        match self.elements.pop() {
            Some(element) => Ok(element),
            None => {
                debug!("pop rejected, stack is empty");
                Err(StackError::Empty)
            }
        }
    }

    /// Returns the most recently pushed element without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        match self.elements.last() {
            Some(element) => Ok(element),
            None => {
                debug!("peek rejected, stack is empty");
                Err(StackError::Empty)
            }
        }
    }

    /// Like `push`, but panics if the stack is full.
    pub fn must_push(&mut self, element: T) {
        if let Err(error) = self.push(element) {
            panic!("{}", error);
        }
    }

    /// Like `pop`, but panics if the stack is empty.
    pub fn must_pop(&mut self) -> T {
        match self.pop() {
            Ok(element) => element,
            Err(error) => panic!("{}", error),
        }
    }

    /// Like `peek`, but panics if the stack is empty.
    pub fn must_peek(&self) -> &T {
        match self.peek() {
            Ok(element) => element,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.limit
    }
}
