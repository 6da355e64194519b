#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

/// Node links.
pub mod links;

mod common_traits;
mod core_list;
mod doubly;
mod iter;
mod node;
mod singly;
mod variant;

pub use core_list::CoreList;
pub use doubly::DoublyLinkedList;
pub use iter::{Iter, IterRev};
pub use links::{Link, LinkArray, LinkNone, LinkSingle, NodeIdx};
pub use node::Node;
pub use singly::SinglyLinkedList;
pub use variant::{Doubly, ListVariant, Singly};
