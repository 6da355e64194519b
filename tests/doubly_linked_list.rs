use arena_list::*;
use orx_fixed_vec::FixedVec;
use orx_iterable::Collection;
use orx_pinned_vec::PinnedVec;
use orx_pseudo_default::PseudoDefault;
use test_case::test_case;

fn to_str(numbers: &[usize]) -> Vec<String> {
    numbers.iter().map(|x| x.to_string()).collect()
}

/// Walks the chain by hand from the head through the node access methods,
/// independently of `iter`.
fn forward<P>(list: &DoublyLinkedList<String, P>) -> Vec<String>
where
    P: PinnedVec<Node<Doubly<String>>>,
{
    let mut vec = vec![];

    let mut current = list.head();
    while let Some(idx) = current {
        vec.push(list.get(idx).unwrap().clone());
        current = list.next_of(idx);
    }

    assert_eq!(vec.len(), list.len());
    vec
}

/// Walks the chain by hand from the tail through the node access methods,
/// independently of `iter_rev`.
fn backward<P>(list: &DoublyLinkedList<String, P>) -> Vec<String>
where
    P: PinnedVec<Node<Doubly<String>>>,
{
    let mut vec = vec![];

    let mut current = list.tail();
    while let Some(idx) = current {
        vec.push(list.get(idx).unwrap().clone());
        current = list.prev_of(idx);
    }

    assert_eq!(vec.len(), list.len());
    vec
}

/// Asserts the link invariants of the chain: every node with a successor is
/// that successor's predecessor, the head has no predecessor, the tail has
/// no successor.
fn assert_link_consistency<P>(list: &DoublyLinkedList<String, P>)
where
    P: PinnedVec<Node<Doubly<String>>>,
{
    match list.head() {
        Some(head) => assert_eq!(list.prev_of(head), None),
        None => assert_eq!(list.tail(), None),
    }
    if let Some(tail) = list.tail() {
        assert_eq!(list.next_of(tail), None);
    }

    let mut current = list.head();
    while let Some(idx) = current {
        match list.next_of(idx) {
            Some(next) => assert_eq!(list.prev_of(next), Some(idx)),
            None => assert_eq!(list.tail(), Some(idx)),
        }
        current = list.next_of(idx);
    }
}

#[test]
fn new_list() {
    let list: DoublyLinkedList<String> = DoublyLinkedList::new();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.head(), None);
    assert_eq!(list.tail(), None);

    assert_eq!(forward(&list), to_str(&[]));
    assert_eq!(backward(&list), to_str(&[]));
    assert_eq!(list.iter().next(), None);
    assert_eq!(list.iter_rev().next(), None);
}

#[test]
fn append_one() {
    let mut list = DoublyLinkedList::new();

    list.append(0.to_string());

    assert_eq!(list.len(), 1);
    assert_eq!(list.head(), list.tail());
    assert_eq!(forward(&list), to_str(&[0]));
    assert_eq!(backward(&list), to_str(&[0]));
    assert_link_consistency(&list);
}

#[test]
fn prepend_one() {
    let mut list = DoublyLinkedList::new();

    list.prepend(0.to_string());

    assert_eq!(list.len(), 1);
    assert_eq!(list.head(), list.tail());
    assert_eq!(forward(&list), to_str(&[0]));
    assert_eq!(backward(&list), to_str(&[0]));
    assert_link_consistency(&list);
}

#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(16)]
#[test_case(64)]
fn append_preserves_order(n: usize) {
    let mut list = DoublyLinkedList::new();

    for i in 0..n {
        list.append(i.to_string());
    }

    let expected: Vec<_> = (0..n).collect();
    assert_eq!(forward(&list), to_str(&expected));
    assert_link_consistency(&list);
}

#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(16)]
#[test_case(64)]
fn prepend_reverses_order(n: usize) {
    let mut list = DoublyLinkedList::new();

    for i in 0..n {
        list.prepend(i.to_string());
    }

    let expected: Vec<_> = (0..n).rev().collect();
    assert_eq!(forward(&list), to_str(&expected));
    assert_link_consistency(&list);
}

#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(16)]
#[test_case(64)]
fn backward_is_reverse_of_forward(n: usize) {
    let mut list = DoublyLinkedList::new();

    for i in 0..n {
        match i % 2 {
            0 => list.append(i.to_string()),
            _ => list.prepend(i.to_string()),
        }
    }

    let mut reversed = forward(&list);
    reversed.reverse();
    assert_eq!(backward(&list), reversed);

    let iterated_rev: Vec<_> = list.iter_rev().cloned().collect();
    assert_eq!(iterated_rev, reversed);

    assert_link_consistency(&list);
}

#[test]
fn append_and_prepend_mixed() {
    let mut list = DoublyLinkedList::new();

    list.append(3.to_string());
    list.prepend(2.to_string());
    list.prepend(1.to_string());
    list.append(4.to_string());

    assert_eq!(forward(&list), to_str(&[1, 2, 3, 4]));
    assert_eq!(backward(&list), to_str(&[4, 3, 2, 1]));
    assert_eq!(list.to_string(), "[1, 2, 3, 4]");
    assert_link_consistency(&list);

    // head -> next holds the second element
    let second = list.next_of(list.head().unwrap()).unwrap();
    assert_eq!(list.get(second), Some(&2.to_string()));

    // head -> next -> next -> prev -> prev leads back to the head
    let back_at_head = list
        .next_of(second)
        .and_then(|idx| list.prev_of(idx))
        .and_then(|idx| list.prev_of(idx))
        .unwrap();
    assert_eq!(back_at_head, list.head().unwrap());
    assert_eq!(list.get(back_at_head), Some(&1.to_string()));
}

#[test]
fn traversal_is_idempotent() {
    let mut list = DoublyLinkedList::new();

    list.append(3.to_string());
    list.prepend(2.to_string());
    list.prepend(1.to_string());

    let first: Vec<_> = list.iter().cloned().collect();
    let second: Vec<_> = list.iter().cloned().collect();
    assert_eq!(first, second);

    let first_rev: Vec<_> = list.iter_rev().cloned().collect();
    let second_rev: Vec<_> = list.iter_rev().cloned().collect();
    assert_eq!(first_rev, second_rev);
}

#[test]
fn iterators_are_exact_sized() {
    let mut list = DoublyLinkedList::new();

    for i in 0..3 {
        list.append(i.to_string());
    }

    let mut iter = list.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);

    let mut iter = list.iter_rev();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
}

#[test]
fn display() {
    let mut list = DoublyLinkedList::new();
    assert_eq!(list.to_string(), "[]");

    list.append(1);
    assert_eq!(list.to_string(), "[1]");

    list.prepend(0);
    list.append(2);
    assert_eq!(list.to_string(), "[0, 1, 2]");

    assert_eq!(format!("{:?}", list), "[0, 1, 2]");
}

#[test]
fn collect_preserves_order() {
    let list: DoublyLinkedList<String> = (0..6).map(|x| x.to_string()).collect();

    assert_eq!(list.len(), 6);
    assert_eq!(forward(&list), to_str(&[0, 1, 2, 3, 4, 5]));
    assert_eq!(backward(&list), to_str(&[5, 4, 3, 2, 1, 0]));
    assert_link_consistency(&list);
}

#[test]
fn extend_appends_in_order() {
    let mut list = DoublyLinkedList::new();

    list.extend((0..3).map(|x| x.to_string()));
    assert_eq!(forward(&list), to_str(&[0, 1, 2]));

    list.prepend(9.to_string());
    list.extend((3..5).map(|x| x.to_string()));
    assert_eq!(forward(&list), to_str(&[9, 0, 1, 2, 3, 4]));
    assert_link_consistency(&list);
}

#[test]
fn arena_keeps_insertion_order() {
    let mut list = DoublyLinkedList::new();

    list.append(3.to_string());
    list.prepend(2.to_string());
    list.prepend(1.to_string());
    list.append(4.to_string());

    // chain order differs from insertion order; the arena keeps the latter
    assert_eq!(forward(&list), to_str(&[1, 2, 3, 4]));
    assert_eq!(
        list.nodes()
            .iter()
            .map(|x| x.data().clone())
            .collect::<Vec<_>>(),
        to_str(&[3, 2, 1, 4])
    );
}

#[test]
fn fixed_capacity_storage() {
    let mut list: DoublyLinkedList<String, FixedVec<Node<Doubly<String>>>> =
        DoublyLinkedList::with_storage(FixedVec::new(4));

    list.append(3.to_string());
    list.prepend(2.to_string());
    list.prepend(1.to_string());
    list.append(4.to_string());

    assert_eq!(forward(&list), to_str(&[1, 2, 3, 4]));
    assert_eq!(backward(&list), to_str(&[4, 3, 2, 1]));
}

#[test]
fn default_and_pseudo_default_are_empty() {
    let list: DoublyLinkedList<String> = Default::default();
    assert!(list.is_empty());

    let list: DoublyLinkedList<String> = DoublyLinkedList::pseudo_default();
    assert!(list.is_empty());
}
