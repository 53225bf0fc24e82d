//! linkstack: a LIFO stack over a singly linked chain
//!
//! The stack owns a sentinel slot whose successor is the top of the stack.
//! Every node owns the rest of the chain below it, so pushing and popping
//! only ever touch the sentinel and the node directly behind it.
//!
//! # Modules
//!
//! - `error`: the `EmptyStack` error returned by `pop` and `top`
//! - `stack`: `Stack<T>` and its `Link<T>` nodes
//!
//! # Example
//!
//! ```
//! use linkstack::{EmptyStack, Stack};
//!
//! let mut s = Stack::new();
//! s.push(1);
//! s.push(2);
//! assert_eq!(s.top(), Ok(&2));
//! assert_eq!(s.pop(), Ok(2));
//! assert_eq!(s.pop(), Ok(1));
//! assert!(s.is_empty());
//! assert_eq!(s.pop(), Err(EmptyStack));
//! ```

pub mod error;
pub mod stack;

pub use error::EmptyStack;
pub use stack::{Link, Stack};
