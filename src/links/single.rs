use super::{link::Link, node_idx::NodeIdx};

/// A link to zero or one node.
#[derive(Clone, Debug)]
pub struct LinkSingle(Option<NodeIdx>);

impl Link for LinkSingle {
    #[inline(always)]
    fn empty() -> Self {
        Self(None)
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[inline(always)]
    fn clear(&mut self) {
        _ = self.0.take();
    }
}

impl LinkSingle {
    /// Returns the index of the referenced node.
    #[inline(always)]
    pub fn get(&self) -> Option<NodeIdx> {
        self.0
    }

    /// Sets the link to the given `node_idx`.
    #[inline(always)]
    pub fn set(&mut self, node_idx: Option<NodeIdx>) {
        self.0 = node_idx
    }

    /// Sets the link to the given `node_idx`.
    #[inline(always)]
    pub fn set_some(&mut self, node_idx: NodeIdx) {
        self.0 = Some(node_idx)
    }

    /// Un-sets the link.
    #[inline(always)]
    pub fn set_none(&mut self) {
        self.0 = None
    }
}
