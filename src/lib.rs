//! # Intrusive singly linked list
//!
//! This crate provides a singly linked list that operates over
//! externally-allocated nodes. The list never allocates or frees memory; it
//! only rewires `next` relations between caller-owned [`node::Node`]s and
//! tracks the chain head. Nodes hold a non-owning payload reference, so the
//! list is payload-agnostic and suitable for static or arena-allocated
//! storage.
//!
//! ## Core components
//!
//! - [`node::Node`]: the chain element, holding a payload reference and a
//!   next pointer.
//! - [`list::Handler`]: the list controller, holding the head and
//!   implementing all chain operations.
//! - [`diag::DiagnosticSink`]: an injected fire-and-forget reporting
//!   capability used on the handler's error paths.
//!
//! # Examples
//!
//! ```
//! use sl_list::{list::Handler, node::Node};
//! use core::ptr::NonNull;
//!
//! let values = [1, 2, 3];
//! let mut a = Node::new(Some(NonNull::from(&values[0])), None);
//! let mut b = Node::new(Some(NonNull::from(&values[1])), None);
//! let mut c = Node::new(Some(NonNull::from(&values[2])), None);
//!
//! let mut list = Handler::new();
//! list.append(NonNull::from(&mut a));
//! list.append(NonNull::from(&mut b));
//! list.append(NonNull::from(&mut c));
//!
//! assert_eq!(list.head(), Some(NonNull::from(&mut a)));
//! assert_eq!(list.tail(), Some(NonNull::from(&mut c)));
//! assert_eq!(list.find(NonNull::from(&mut b)), Some(NonNull::from(&mut b)));
//!
//! list.remove(NonNull::from(&mut b)).unwrap();
//! assert_eq!(list.count(), 2);
//! assert_eq!(list.next(list.head()), Some(NonNull::from(&mut c)));
//! ```
//!
//! ## Safety
//!
//! This implementation uses `unsafe` code to follow raw pointers between
//! caller-owned nodes. The user of this crate is responsible for upholding
//! several invariants:
//!
//! - Nodes must outlive the list they are in.
//! - A node must not be in two lists at the same time, and a node appended
//!   to a list must have an empty `next` relation.
//! - Nodes must not be moved or dropped while linked.
//! - When iterating, the list must not be modified.
//! - The handler is single-threaded; concurrent access requires external
//!   synchronization.

#![no_std]

pub mod diag;
pub mod iter;
pub mod list;
pub mod node;

#[cfg(test)]
mod tests;
