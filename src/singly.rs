use crate::{CoreList, Iter, NodeIdx, Singly, node::Node};
use orx_pinned_vec::PinnedVec;
use orx_pseudo_default::PseudoDefault;
use orx_split_vec::SplitVec;

/// A singly linked list: a forward-only chain of nodes with a head reference.
///
/// The list keeps only its head; each node links to its successor, the last
/// node links to nothing. Nodes live in the arena storage `P` and links are
/// positions within it.
pub struct SinglyLinkedList<T, P = SplitVec<Node<Singly<T>>>>
where
    P: PinnedVec<Node<Singly<T>>>,
{
    pub(crate) col: CoreList<Singly<T>, P>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new empty list with the default arena storage.
    pub fn new() -> Self {
        Self {
            col: CoreList::new(),
        }
    }
}

impl<T, P> SinglyLinkedList<T, P>
where
    P: PinnedVec<Node<Singly<T>>>,
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
        self.col.ends().get()
    }

    /// Returns the index of the successor of the node at `idx`;
    /// None if the node is the last one or if `idx` does not belong
    /// to this list.
    pub fn next_of(&self, idx: NodeIdx) -> Option<NodeIdx> {
        self.col.get_node(idx).and_then(|node| node.next().get())
    }

    /// Returns a reference to the element stored at the node at `idx`;
    /// None if `idx` does not belong to this list.
    pub fn get(&self, idx: NodeIdx) -> Option<&T> {
        self.col.get_node(idx).map(|node| node.data())
    }

    /// Returns an iterator over the elements of the list from the head
    /// to the last node.
    pub fn iter(&self) -> Iter<'_, Singly<T>, P> {
        Iter::new(&self.col, self.head())
    }

    /// Returns a reference to the underlying arena storage; nodes appear
    /// in insertion order, which is independent of the chain order.
    pub fn nodes(&self) -> &P {
        self.col.nodes()
    }

    // mut

    /// Appends the `value` after the last node of the list; the new node
    /// becomes the head if the list was empty.
    ///
    /// The list keeps no tail reference; the last node is found by walking
    /// the chain from the head, hence append is O(n).
    pub fn append(&mut self, value: T) {
        let idx = self.col.push(value);
        match self.last() {
            Some(last) => self.col.node_mut(last).next_mut().set_some(idx),
            None => self.col.ends_mut().set_some(idx),
        }
    }

    /// Prepends the `value` before the head of the list; the new node
    /// becomes the head. O(1).
    pub fn prepend(&mut self, value: T) {
        let idx = self.col.push(value);
        if let Some(old_head) = self.col.ends().get() {
            self.col.node_mut(idx).next_mut().set_some(old_head);
        }
        self.col.ends_mut().set_some(idx);
    }

    // helpers

    /// Index of the last node of the chain, found by walking from the head.
    pub(crate) fn last(&self) -> Option<NodeIdx> {
        self.col.ends().get().map(|head| {
            let mut current = head;
            while let Some(next) = self.col.node(current).next().get() {
                current = next;
            }
            current
        })
    }
}

impl<T, P> Default for SinglyLinkedList<T, P>
where
    P: PinnedVec<Node<Singly<T>>> + Default,
{
    fn default() -> Self {
        Self {
            col: CoreList::new(),
        }
    }
}

impl<T, P> PseudoDefault for SinglyLinkedList<T, P>
where
    P: PinnedVec<Node<Singly<T>>> + PseudoDefault,
{
    fn pseudo_default() -> Self {
        Self {
            col: CoreList::pseudo_default(),
        }
    }
}
