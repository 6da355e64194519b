use crate::{
    ListVariant,
    links::{Link, NodeIdx},
    node::Node,
};
use orx_pinned_vec::PinnedVec;
use orx_pseudo_default::PseudoDefault;

/// Core arena collection shared by the linked list variants.
///
/// Nodes are stored in a pinned vector in insertion order; the list and its
/// nodes refer to nodes with their positions in this vector rather than with
/// pointers, so growing the storage never invalidates a link.
pub struct CoreList<V, P>
where
    V: ListVariant,
    P: PinnedVec<Node<V>>,
{
    nodes: P,
    ends: V::Ends,
}

impl<V, P> Default for CoreList<V, P>
where
    V: ListVariant,
    P: PinnedVec<Node<V>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> PseudoDefault for CoreList<V, P>
where
    V: ListVariant,
    P: PinnedVec<Node<V>> + PseudoDefault,
{
    fn pseudo_default() -> Self {
        Self {
            nodes: P::pseudo_default(),
            ends: Link::empty(),
        }
    }
}

impl<V, P> CoreList<V, P>
where
    V: ListVariant,
    P: PinnedVec<Node<V>>,
{
    /// Creates a new empty collection.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self {
            nodes: P::default(),
            ends: Link::empty(),
        }
    }

    /// Creates a new empty collection that will store its nodes in the
    /// given `nodes` storage.
    ///
    /// # Panics
    ///
    /// Panics if `nodes` is not empty.
    pub fn with_storage(nodes: P) -> Self {
        assert!(nodes.is_empty(), "node storage must be empty");
        Self {
            nodes,
            ends: Link::empty(),
        }
    }

    // get

    /// Returns the number of nodes of the collection.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether or not the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a reference to the underlying nodes storage.
    #[inline(always)]
    pub fn nodes(&self) -> &P {
        &self.nodes
    }

    /// Returns a reference to the node at the given `idx`.
    ///
    /// # Panics
    ///
    /// Panics if the index does not belong to this collection.
    #[inline(always)]
    pub fn node(&self, idx: NodeIdx) -> &Node<V> {
        self.nodes.get(idx.position()).expect("index out of bounds")
    }

    /// Returns a reference to the node at the given `idx`,
    /// None if the index does not belong to this collection.
    #[inline(always)]
    pub fn get_node(&self, idx: NodeIdx) -> Option<&Node<V>> {
        self.nodes.get(idx.position())
    }

    /// Returns a reference to the ends of the collection.
    #[inline(always)]
    pub fn ends(&self) -> &V::Ends {
        &self.ends
    }

    // mut

    /// Returns a mutable reference to the node at the given `idx`.
    ///
    /// # Panics
    ///
    /// Panics if the index does not belong to this collection.
    #[inline(always)]
    pub fn node_mut(&mut self, idx: NodeIdx) -> &mut Node<V> {
        self.nodes
            .get_mut(idx.position())
            .expect("index out of bounds")
    }

    /// Returns a mutable reference to the ends of the collection.
    pub fn ends_mut(&mut self) -> &mut V::Ends {
        &mut self.ends
    }

    /// Pushes a node with the given `data` and no links, and returns its index.
    pub fn push(&mut self, data: V::Item) -> NodeIdx {
        let idx = NodeIdx::new(self.nodes.len());
        self.nodes.push(Node::new_free_node(data));
        idx
    }
}
