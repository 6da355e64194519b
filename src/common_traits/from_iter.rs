use crate::{CoreList, Doubly, DoublyLinkedList, Singly, SinglyLinkedList, node::Node};
use orx_pinned_vec::PinnedVec;

impl<T, P> FromIterator<T> for SinglyLinkedList<T, P>
where
    P: PinnedVec<Node<Singly<T>>> + Default,
{
    /// Builds the list so that its forward sequence equals the input
    /// sequence, linking each pushed node after the previous one rather
    /// than re-scanning the chain per element.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self {
            col: CoreList::new(),
        };

        let mut last = None;
        for value in iter {
            let idx = list.col.push(value);
            match last {
                Some(prev_idx) => list.col.node_mut(prev_idx).next_mut().set_some(idx),
                None => list.col.ends_mut().set_some(idx),
            }
            last = Some(idx);
        }

        list
    }
}

impl<T, P> FromIterator<T> for DoublyLinkedList<T, P>
where
    P: PinnedVec<Node<Doubly<T>>> + Default,
{
    /// Builds the list by appending the values in order; the forward
    /// sequence equals the input sequence.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self {
            col: CoreList::new(),
        };
        for value in iter {
            list.append(value);
        }
        list
    }
}
