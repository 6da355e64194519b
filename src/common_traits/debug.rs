use crate::{Doubly, DoublyLinkedList, Singly, SinglyLinkedList, node::Node};
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

impl<T, P> Debug for SinglyLinkedList<T, P>
where
    T: Debug,
    P: PinnedVec<Node<Singly<T>>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, P> Debug for DoublyLinkedList<T, P>
where
    T: Debug,
    P: PinnedVec<Node<Doubly<T>>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
