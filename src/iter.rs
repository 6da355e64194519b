use crate::{
    CoreList, ListVariant,
    links::{LinkSingle, NodeIdx},
    node::Node,
};
use core::iter::FusedIterator;
use orx_pinned_vec::PinnedVec;

/// Iterator over the elements of a list from the head towards the tail,
/// following the forward links.
///
/// The iterator is lazy; the chain is walked one link per `next` call.
pub struct Iter<'a, V, P>
where
    V: ListVariant,
    P: PinnedVec<Node<V>>,
{
    col: &'a CoreList<V, P>,
    current: Option<NodeIdx>,
    remaining: usize,
}

impl<'a, V, P> Iter<'a, V, P>
where
    V: ListVariant,
    P: PinnedVec<Node<V>>,
{
    pub(crate) fn new(col: &'a CoreList<V, P>, first: Option<NodeIdx>) -> Self {
        Self {
            col,
            current: first,
            remaining: col.len(),
        }
    }
}

impl<'a, V, P> Iterator for Iter<'a, V, P>
where
    V: ListVariant<Next = LinkSingle>,
    P: PinnedVec<Node<V>>,
{
    type Item = &'a V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let col = self.col;
        self.current.map(|idx| {
            let node = col.node(idx);
            self.current = node.next().get();
            self.remaining -= 1;
            node.data()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, P> ExactSizeIterator for Iter<'_, V, P>
where
    V: ListVariant<Next = LinkSingle>,
    P: PinnedVec<Node<V>>,
{
}

impl<V, P> FusedIterator for Iter<'_, V, P>
where
    V: ListVariant<Next = LinkSingle>,
    P: PinnedVec<Node<V>>,
{
}

impl<V, P> Clone for Iter<'_, V, P>
where
    V: ListVariant,
    P: PinnedVec<Node<V>>,
{
    fn clone(&self) -> Self {
        Self {
            col: self.col,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// Iterator over the elements of a doubly linked list from the tail towards
/// the head, following the backward links.
///
/// The iterator is lazy; the chain is walked one link per `next` call.
pub struct IterRev<'a, V, P>
where
    V: ListVariant,
    P: PinnedVec<Node<V>>,
{
    col: &'a CoreList<V, P>,
    current: Option<NodeIdx>,
    remaining: usize,
}

impl<'a, V, P> IterRev<'a, V, P>
where
    V: ListVariant,
    P: PinnedVec<Node<V>>,
{
    pub(crate) fn new(col: &'a CoreList<V, P>, last: Option<NodeIdx>) -> Self {
        Self {
            col,
            current: last,
            remaining: col.len(),
        }
    }
}

impl<'a, V, P> Iterator for IterRev<'a, V, P>
where
    V: ListVariant<Prev = LinkSingle>,
    P: PinnedVec<Node<V>>,
{
    type Item = &'a V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let col = self.col;
        self.current.map(|idx| {
            let node = col.node(idx);
            self.current = node.prev().get();
            self.remaining -= 1;
            node.data()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, P> ExactSizeIterator for IterRev<'_, V, P>
where
    V: ListVariant<Prev = LinkSingle>,
    P: PinnedVec<Node<V>>,
{
}

impl<V, P> FusedIterator for IterRev<'_, V, P>
where
    V: ListVariant<Prev = LinkSingle>,
    P: PinnedVec<Node<V>>,
{
}

impl<V, P> Clone for IterRev<'_, V, P>
where
    V: ListVariant,
    P: PinnedVec<Node<V>>,
{
    fn clone(&self) -> Self {
        Self {
            col: self.col,
            current: self.current,
            remaining: self.remaining,
        }
    }
}
