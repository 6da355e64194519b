use crate::{Doubly, DoublyLinkedList, Singly, SinglyLinkedList, node::Node};
use core::fmt::{Display, Formatter, Result};
use orx_pinned_vec::PinnedVec;

/// Writes the values yielded by `iter` as a bracketed comma-separated
/// sequence, such as `[1, 2, 3, 4]`.
fn write_sequence<'a, T, I>(f: &mut Formatter<'_>, mut iter: I) -> Result
where
    T: Display + 'a,
    I: Iterator<Item = &'a T>,
{
    write!(f, "[")?;
    if let Some(first) = iter.next() {
        write!(f, "{first}")?;
        for value in iter {
            write!(f, ", {value}")?;
        }
    }
    write!(f, "]")
}

impl<T, P> Display for SinglyLinkedList<T, P>
where
    T: Display,
    P: PinnedVec<Node<Singly<T>>>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_sequence(f, self.iter())
    }
}

impl<T, P> Display for DoublyLinkedList<T, P>
where
    T: Display,
    P: PinnedVec<Node<Doubly<T>>>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_sequence(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use alloc::string::ToString;

    #[test]
    fn renders_forward_order() {
        let mut list = SinglyLinkedList::new();
        assert_eq!(list.to_string(), "[]");

        list.append(2);
        list.prepend(1);
        list.append(3);
        assert_eq!(list.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn renders_forward_order_of_the_doubly_linked_list() {
        let mut list = DoublyLinkedList::new();
        assert_eq!(list.to_string(), "[]");

        list.append(3);
        list.prepend(2);
        list.prepend(1);
        list.append(4);
        assert_eq!(list.to_string(), "[1, 2, 3, 4]");
    }
}
