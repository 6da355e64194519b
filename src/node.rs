use crate::{ListVariant, links::Link};
use core::fmt::Debug;

/// Node of a linked list, storing one element together with its links.
pub struct Node<V>
where
    V: ListVariant,
{
    data: V::Item,
    prev: V::Prev,
    next: V::Next,
}

impl<V> Node<V>
where
    V: ListVariant,
{
    /// Creates a new node with the given `data`, and `prev` and `next` links.
    pub fn new(data: V::Item, prev: V::Prev, next: V::Next) -> Self {
        Self { data, prev, next }
    }

    /// Creates a new node with the given `data` but with no links.
    pub fn new_free_node(data: V::Item) -> Self {
        Self {
            data,
            prev: Link::empty(),
            next: Link::empty(),
        }
    }

    // consuming

    /// Takes and returns the data of the node.
    pub fn into_data(self) -> V::Item {
        self.data
    }

    // ref

    /// Returns a reference to the data of the node.
    #[inline(always)]
    pub fn data(&self) -> &V::Item {
        &self.data
    }

    /// Returns a reference to the backward link of the node.
    #[inline(always)]
    pub fn prev(&self) -> &V::Prev {
        &self.prev
    }

    /// Returns a reference to the forward link of the node.
    #[inline(always)]
    pub fn next(&self) -> &V::Next {
        &self.next
    }

    // mut

    /// Returns a mutable reference to the underlying data.
    pub fn data_mut(&mut self) -> &mut V::Item {
        &mut self.data
    }

    /// Returns a mutable reference to the backward link of the node.
    pub fn prev_mut(&mut self) -> &mut V::Prev {
        &mut self.prev
    }

    /// Returns a mutable reference to the forward link of the node.
    pub fn next_mut(&mut self) -> &mut V::Next {
        &mut self.next
    }
}

impl<V: ListVariant> Debug for Node<V>
where
    V::Item: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}
