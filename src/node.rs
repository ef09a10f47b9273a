use core::ptr::NonNull;

/// A node in an intrusive singly linked list.
///
/// The node is a passive data holder: it carries a non-owning payload
/// reference and a pointer to the next node. Nodes are compared by address,
/// never by payload value, and are owned by whatever allocated them; the
/// [`Handler`](crate::list::Handler) only rewires their `next` relations.
#[derive(Debug)]
pub struct Node<T> {
    payload: Option<NonNull<T>>,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a node with an optional payload reference and successor.
    pub const fn new(payload: Option<NonNull<T>>, next: Option<NonNull<Node<T>>>) -> Self {
        Node { payload, next }
    }

    /// Get the payload reference, if any.
    ///
    /// The pointee is caller-owned; the node never reads, copies, or drops it.
    pub fn payload(&self) -> Option<NonNull<T>> {
        self.payload
    }

    /// Set the payload reference.
    pub fn set_payload(&mut self, payload: Option<NonNull<T>>) {
        self.payload = payload;
    }

    /// Get the next node in the chain, or `None` if this node is last.
    pub fn next(&self) -> Option<NonNull<Node<T>>> {
        self.next
    }

    /// Set the next pointer in the chain.
    pub fn set_next(&mut self, next: Option<NonNull<Node<T>>>) {
        self.next = next;
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node::new(None, None)
    }
}

unsafe impl<T> Send for Node<T> where T: Send {}
unsafe impl<T> Sync for Node<T> where T: Sync {}
