use crate::{Doubly, DoublyLinkedList, Singly, SinglyLinkedList, node::Node};
use orx_pinned_vec::PinnedVec;

impl<T, P> Extend<T> for SinglyLinkedList<T, P>
where
    P: PinnedVec<Node<Singly<T>>>,
{
    /// Appends the values in order.
    ///
    /// The chain is walked to the last node once; each value is then
    /// linked after its predecessor.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut last = self.last();
        for value in iter {
            let idx = self.col.push(value);
            match last {
                Some(prev_idx) => self.col.node_mut(prev_idx).next_mut().set_some(idx),
                None => self.col.ends_mut().set_some(idx),
            }
            last = Some(idx);
        }
    }
}

impl<T, P> Extend<T> for DoublyLinkedList<T, P>
where
    P: PinnedVec<Node<Doubly<T>>>,
{
    /// Appends the values in order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}
