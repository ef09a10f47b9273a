use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::{diag::DiagnosticSink, list::Handler, node::Node};

/// An iterator over a linked list, yielding node handles front to back.
pub struct Iter<'a, T> {
    current: Option<NonNull<Node<T>>>,
    _list: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// Creates a new iterator over the given list.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the list is not modified while the
    /// iterator is alive.
    pub unsafe fn new<S: DiagnosticSink>(list: &'a Handler<T, S>) -> Self {
        Iter {
            current: list.head(),
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = NonNull<Node<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().next() };
        })
    }
}

unsafe impl<'a, T> Send for Iter<'a, T> where T: Send {}
unsafe impl<'a, T> Sync for Iter<'a, T> where T: Sync {}
