use crate::{CoreList, Doubly, Iter, IterRev, NodeIdx, node::Node};
use orx_pinned_vec::PinnedVec;
use orx_pseudo_default::PseudoDefault;
use orx_split_vec::SplitVec;

/// Position of the head reference within the ends of the list.
const HEAD: usize = 0;
/// Position of the tail reference within the ends of the list.
const TAIL: usize = 1;

/// A doubly linked list: a bidirectional chain of nodes with head and tail
/// references.
///
/// Each node links forward to its successor and backward to its predecessor;
/// the head has no predecessor and the tail has no successor. Nodes live in
/// the arena storage `P` and links are positions within it, so the backward
/// links are plain observations rather than owning references.
pub struct DoublyLinkedList<T, P = SplitVec<Node<Doubly<T>>>>
where
    P: PinnedVec<Node<Doubly<T>>>,
{
    pub(crate) col: CoreList<Doubly<T>, P>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new empty list with the default arena storage.
    pub fn new() -> Self {
        Self {
            col: CoreList::new(),
        }
    }
}

impl<T, P> DoublyLinkedList<T, P>
where
    P: PinnedVec<Node<Doubly<T>>>,
{
    /// Creates a new empty list that will store its nodes in the
    /// given `nodes` storage.
    ///
    /// # Panics
    ///
    /// Panics if `nodes` is not empty.
    pub fn with_storage(nodes: P) -> Self {
        Self {
            col: CoreList::with_storage(nodes),
        }
    }

    // get

    /// Returns the number of elements of the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.col.len()
    }

    /// Returns whether or not the list is empty.
    pub fn is_empty(&self) -> bool {
        self.col.is_empty()
    }

    /// Returns the index of the head node; None if the list is empty.
    pub fn head(&self) -> Option<NodeIdx> {
        self.col.ends().get(HEAD)
    }

    /// Returns the index of the tail node; None if the list is empty.
    pub fn tail(&self) -> Option<NodeIdx> {
        self.col.ends().get(TAIL)
    }

    /// Returns the index of the successor of the node at `idx`;
    /// None if the node is the tail or if `idx` does not belong
    /// to this list.
    pub fn next_of(&self, idx: NodeIdx) -> Option<NodeIdx> {
        self.col.get_node(idx).and_then(|node| node.next().get())
    }

    /// Returns the index of the predecessor of the node at `idx`;
    /// None if the node is the head or if `idx` does not belong
    /// to this list.
    pub fn prev_of(&self, idx: NodeIdx) -> Option<NodeIdx> {
        self.col.get_node(idx).and_then(|node| node.prev().get())
    }

    /// Returns a reference to the element stored at the node at `idx`;
    /// None if `idx` does not belong to this list.
    pub fn get(&self, idx: NodeIdx) -> Option<&T> {
        self.col.get_node(idx).map(|node| node.data())
    }

    /// Returns an iterator over the elements of the list from the head
    /// to the tail, following the forward links.
    pub fn iter(&self) -> Iter<'_, Doubly<T>, P> {
        Iter::new(&self.col, self.head())
    }

    /// Returns an iterator over the elements of the list from the tail
    /// to the head, following the backward links.
    ///
    /// The backward sequence is exactly the reverse of the forward sequence.
    pub fn iter_rev(&self) -> IterRev<'_, Doubly<T>, P> {
        IterRev::new(&self.col, self.tail())
    }

    /// Returns a reference to the underlying arena storage; nodes appear
    /// in insertion order, which is independent of the chain order.
    pub fn nodes(&self) -> &P {
        self.col.nodes()
    }

    // mut

    /// Appends the `value` after the tail of the list; the new node becomes
    /// both head and tail if the list was empty. O(1).
    pub fn append(&mut self, value: T) {
        let idx = self.col.push(value);
        match self.col.ends().get(TAIL) {
            Some(old_tail) => {
                self.col.node_mut(old_tail).next_mut().set_some(idx);
                self.col.node_mut(idx).prev_mut().set_some(old_tail);
            }
            None => self.col.ends_mut().set(HEAD, Some(idx)),
        }
        self.col.ends_mut().set(TAIL, Some(idx));
    }

    /// Prepends the `value` before the head of the list; the new node becomes
    /// both head and tail if the list was empty. O(1).
    pub fn prepend(&mut self, value: T) {
        let idx = self.col.push(value);
        match self.col.ends().get(HEAD) {
            Some(old_head) => {
                self.col.node_mut(old_head).prev_mut().set_some(idx);
                self.col.node_mut(idx).next_mut().set_some(old_head);
            }
            None => self.col.ends_mut().set(TAIL, Some(idx)),
        }
        self.col.ends_mut().set(HEAD, Some(idx));
    }
}

impl<T, P> Default for DoublyLinkedList<T, P>
where
    P: PinnedVec<Node<Doubly<T>>> + Default,
{
    fn default() -> Self {
        Self {
            col: CoreList::new(),
        }
    }
}

impl<T, P> PseudoDefault for DoublyLinkedList<T, P>
where
    P: PinnedVec<Node<Doubly<T>>> + PseudoDefault,
{
    fn pseudo_default() -> Self {
        Self {
            col: CoreList::pseudo_default(),
        }
    }
}
