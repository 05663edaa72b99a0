use std::sync::Arc;

/// Raw tap on a rendered slot, sent by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTapped(pub usize);

/// A tap resolved to a logical page.
#[derive(Debug, Clone)]
pub struct PageSelected<T> {
    pub index: usize,
    pub items: Arc<[T]>,
}

impl<T> PageSelected<T> {
    /// The selected item itself.
    #[must_use]
    pub fn item(&self) -> &T {
        &self.items[self.index]
    }
}
