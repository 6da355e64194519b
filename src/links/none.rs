use super::link::Link;

/// Zero-sized no-link.
#[derive(Clone, Debug)]
pub struct LinkNone;

impl Link for LinkNone {
    fn empty() -> Self {
        Self
    }

    fn is_empty(&self) -> bool {
        true
    }

    fn clear(&mut self) {}
}
