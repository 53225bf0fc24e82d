//! Stack error types.

/// Returned by [`Stack::pop`](crate::Stack::pop) and
/// [`Stack::top`](crate::Stack::top) when the stack holds no elements.
///
/// A failed call leaves the stack untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyStack;

impl std::fmt::Display for EmptyStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stack is empty")
    }
}

impl std::error::Error for EmptyStack {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(EmptyStack.to_string(), "stack is empty");
    }

    #[test]
    fn test_boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(EmptyStack);
        assert_eq!(err.to_string(), "stack is empty");
        assert!(err.source().is_none());
    }
}
