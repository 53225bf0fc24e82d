//! Linked Stack Implementation
//!
//! ## Layout
//!
//! ```text
//! sentinel ──▶ Link(head=x3) ──▶ Link(head=x2) ──▶ Link(head=x1) ──▶ None
//!              ↑ top
//! ```
//!
//! - The sentinel is the `next` slot owned by `Stack`; it never holds a value
//! - Push: new link takes over the sentinel's successor
//! - Pop: sentinel takes over the successor of the removed link
//! - Empty exactly when the sentinel has no successor
//!
//! All operations are O(1) except rendering, which walks the chain.

use std::fmt;

use tracing::{debug, trace};

use crate::error::EmptyStack;

/// One node of the chain: a value and the rest of the chain below it
pub struct Link<T> {
    head: T,
    tail: Option<Box<Link<T>>>,
}

impl<T> Link<T> {
    /// The value held by this node
    #[inline]
    pub fn head(&self) -> &T {
        &self.head
    }

    /// The next node down the chain, if any
    #[inline]
    pub fn tail(&self) -> Option<&Link<T>> {
        self.tail.as_deref()
    }

    /// Whether anything lies below this node
    #[inline]
    pub fn has_tail(&self) -> bool {
        self.tail.is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, Some(self))
    }
}

/// A LIFO stack of `T` values
///
/// The stack owns its whole chain: dropping the stack drops every value
/// still on it.
pub struct Stack<T> {
    /// Successor of the sentinel head: the top of the stack, or `None` when empty
    next: Option<Box<Link<T>>>,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Stack { next: None }
    }

    /// Push a value on top of the stack
    pub fn push(&mut self, value: T) {
        let was_empty = self.is_empty();
        self.next = Some(Box::new(Link {
            head: value,
            tail: self.next.take(),
        }));
        if was_empty {
            trace!("push: stack no longer empty");
        } else {
            trace!("push");
        }
    }

    /// Remove the top value and hand it to the caller
    ///
    /// Fails with [`EmptyStack`] when there is nothing to pop; the stack is
    /// left unchanged in that case.
    pub fn pop(&mut self) -> Result<T, EmptyStack> {
        let Some(link) = self.next.take() else {
            debug!("pop: stack is empty");
            return Err(EmptyStack);
        };
        let Link { head, tail } = *link;
        self.next = tail;
        if self.next.is_none() {
            trace!("pop: stack is now empty");
        } else {
            trace!("pop");
        }
        Ok(head)
    }

    /// Borrow the top value without removing it
    pub fn top(&self) -> Result<&T, EmptyStack> {
        match self.next.as_deref() {
            Some(link) => Ok(&link.head),
            None => {
                debug!("top: stack is empty");
                Err(EmptyStack)
            }
        }
    }

    /// True when the sentinel has no successor
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.next.is_none()
    }

    /// The node currently on top, for inspecting the value and whether
    /// anything lies below it
    #[inline]
    pub fn peek_link(&self) -> Option<&Link<T>> {
        self.next.as_deref()
    }
}

impl<T: fmt::Debug> Stack<T> {
    /// Render the chain from the top down, e.g.
    /// `Link(head=2, tail=Link(head=1, tail=None))`, or `None` when empty
    ///
    /// Meant for diagnostics and tests; the format is not stable.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // Unlink one node at a time so a deep chain cannot recurse in drop glue
        let mut cur = self.next.take();
        while let Some(mut link) = cur {
            cur = link.tail.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.peek_link())
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stack(")?;
        write_chain(f, self.peek_link())?;
        f.write_str(")")
    }
}

/// Write `Link(head=.., tail=..)` for every node, closing the parens after
/// the terminal `None`. Iterative so long chains do not recurse.
fn write_chain<T: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    mut link: Option<&Link<T>>,
) -> fmt::Result {
    let mut depth = 0usize;
    while let Some(node) = link {
        write!(f, "Link(head={:?}, tail=", node.head)?;
        depth += 1;
        link = node.tail();
    }
    f.write_str("None")?;
    for _ in 0..depth {
        f.write_str(")")?;
    }
    Ok(())
}
