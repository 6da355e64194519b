use super::{link::Link, node_idx::NodeIdx};

/// Links to a constant number of nodes, such as the head and the tail
/// of a doubly linked list.
#[derive(Clone, Debug)]
pub struct LinkArray<const N: usize>([Option<NodeIdx>; N]);

impl<const N: usize> Link for LinkArray<N> {
    #[inline(always)]
    fn empty() -> Self {
        Self([None; N])
    }

    fn is_empty(&self) -> bool {
        self.0.iter().all(|x| x.is_none())
    }

    fn clear(&mut self) {
        self.0 = [None; N];
    }
}

impl<const N: usize> LinkArray<N> {
    /// Returns the index of the node referenced at the `link_idx`-th position.
    ///
    /// # Panics
    ///
    /// Panics if `link_idx` is not less than `N`.
    #[inline(always)]
    pub fn get(&self, link_idx: usize) -> Option<NodeIdx> {
        self.0[link_idx]
    }

    /// Sets the link at the `link_idx`-th position to the given `node_idx`.
    ///
    /// # Panics
    ///
    /// Panics if `link_idx` is not less than `N`.
    #[inline(always)]
    pub fn set(&mut self, link_idx: usize, node_idx: Option<NodeIdx>) {
        self.0[link_idx] = node_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_all_links_are_none() {
        let mut links = LinkArray::<2>::empty();
        assert!(links.is_empty());
        assert_eq!(links.get(0), None);
        assert_eq!(links.get(1), None);

        links.set(1, Some(NodeIdx::new(4)));
        assert!(!links.is_empty());
        assert_eq!(links.get(0), None);
        assert_eq!(links.get(1), Some(NodeIdx::new(4)));

        links.clear();
        assert!(links.is_empty());
    }
}
