use core::ptr::NonNull;

use crate::{
    diag::{DiagnosticSink, NopSink},
    iter::Iter,
    node::Node,
};

/// Error returned by [`Handler::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RemoveError {
    /// The node is not reachable from the list head. The list is left
    /// unchanged.
    #[error("node not found in list")]
    NotFound,
}

/// Position of a node's predecessor in the chain.
enum Predecessor<T> {
    /// The node immediately preceding the target.
    Found(NonNull<Node<T>>),
    /// The target is the head and has no predecessor.
    IsHead,
    /// The target is not reachable from the head.
    NotFound,
    /// The list has no nodes at all.
    EmptyList,
}

/// The controller of an intrusive singly linked list.
///
/// The handler owns only the head pointer. Nodes and their payloads stay
/// owned by the caller: no operation here allocates, copies, or frees, and
/// dropping the handler leaves every node untouched. Appending walks to the
/// tail on every call, trading O(1) append for a smaller footprint; no tail
/// pointer is cached.
///
/// Failure conditions surface through return values plus reports to the
/// injected [`DiagnosticSink`]; nothing here panics or aborts.
#[derive(Debug)]
pub struct Handler<T, S: DiagnosticSink = NopSink> {
    head: Option<NonNull<Node<T>>>,
    sink: S,
}

impl<T> Handler<T> {
    /// Creates a new, empty list with all diagnostics discarded.
    pub const fn new() -> Self {
        Handler {
            head: None,
            sink: NopSink,
        }
    }
}

impl<T> Default for Handler<T> {
    fn default() -> Self {
        Handler::new()
    }
}

impl<T, S> Handler<T, S>
where
    S: DiagnosticSink,
{
    /// Creates a new, empty list reporting diagnostics to `sink`.
    pub const fn with_sink(sink: S) -> Self {
        Handler { head: None, sink }
    }

    /// Get the first node in the list, or `None` if the list is empty.
    pub fn head(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    /// Get the node following `current`, or `None` if `current` is `None`
    /// or the last node. Total and side-effect free.
    pub fn next(&self, current: Option<NonNull<Node<T>>>) -> Option<NonNull<Node<T>>> {
        current.and_then(|node| unsafe { node.as_ref().next() })
    }

    /// Get the last node in the list, or `None` if the list is empty.
    ///
    /// Walks the chain from the head on every call: O(n).
    pub fn tail(&self) -> Option<NonNull<Node<T>>> {
        let mut current = self.head?;
        while let Some(next) = unsafe { current.as_ref().next() } {
            current = next;
        }
        Some(current)
    }

    /// Locate `target` by address. Returns the same handle if it is
    /// reachable from the head, `None` otherwise. O(n).
    pub fn find(&self, target: NonNull<Node<T>>) -> Option<NonNull<Node<T>>> {
        let head = self.head?;
        if head == target {
            return Some(head);
        }

        unsafe { self.iter() }.find(|&node| node == target)
    }

    /// Locate the node whose `next` points at `target`.
    ///
    /// An empty list additionally reports a warning diagnostic.
    fn find_preceding(&self, target: NonNull<Node<T>>) -> Predecessor<T> {
        let Some(head) = self.head else {
            self.sink
                .warn(format_args!("find_preceding: operating on empty list"));
            return Predecessor::EmptyList;
        };

        if head == target {
            return Predecessor::IsHead;
        }

        let mut current = head;
        loop {
            match unsafe { current.as_ref().next() } {
                Some(next) if next == target => return Predecessor::Found(current),
                Some(next) => current = next,
                None => return Predecessor::NotFound,
            }
        }
    }

    /// Append `new_node` to the end of the list.
    ///
    /// The node's `next` relation must be empty and the node must not be
    /// part of any list; violating this corrupts the chain (see the
    /// crate-level safety notes).
    pub fn append(&mut self, new_node: NonNull<Node<T>>) {
        match self.tail() {
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(new_node)) },
            None => self.head = Some(new_node),
        }
    }

    /// Remove `node` from the list.
    ///
    /// On success the node's `next` relation is cleared so the handle can be
    /// appended again later; its payload is untouched. If the node is not in
    /// the list, an error diagnostic is reported and the list is left
    /// unchanged.
    pub fn remove(&mut self, mut node: NonNull<Node<T>>) -> Result<(), RemoveError> {
        match self.find_preceding(node) {
            Predecessor::IsHead => {
                self.head = unsafe { node.as_ref().next() };
            }
            Predecessor::Found(mut preceding) => unsafe {
                let next = node.as_ref().next();
                preceding.as_mut().set_next(next);
            },
            Predecessor::NotFound | Predecessor::EmptyList => {
                self.sink.error(format_args!(
                    "remove: node {} not found in list",
                    node.as_ptr() as usize
                ));
                return Err(RemoveError::NotFound);
            }
        }

        unsafe { node.as_mut().set_next(None) };
        self.sink
            .info(format_args!("removed node {}", node.as_ptr() as usize));
        Ok(())
    }

    /// Get a reference to the injected diagnostic sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Get the number of nodes in the list by walking the chain: O(n).
    pub fn count(&self) -> usize {
        unsafe { self.iter() }.count()
    }

    /// Get an iterator over the list, front to back.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the list is not modified while iterating.
    pub unsafe fn iter(&self) -> Iter<'_, T> {
        unsafe { Iter::new(self) }
    }
}

unsafe impl<T, S> Send for Handler<T, S>
where
    T: Send,
    S: DiagnosticSink + Send,
{
}

unsafe impl<T, S> Sync for Handler<T, S>
where
    T: Sync,
    S: DiagnosticSink + Sync,
{
}
