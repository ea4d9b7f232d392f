// ── Page window ──

use serde::Serialize;

use crate::model::Resource;

/// The client's current slice of a paginated collection.
///
/// `items.len() <= page_size` always holds. `has_more` is the "full page"
/// heuristic: the backend reports no total, so a collection whose size is
/// an exact multiple of the page size shows one trailing empty page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageWindow<T> {
    pub page_number: u32,
    pub page_size: u32,
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T> PageWindow<T> {
    /// Empty window for page 1, before anything has been fetched.
    pub fn empty(page_size: u32) -> Self {
        Self {
            page_number: 1,
            page_size,
            items: Vec::new(),
            has_more: false,
        }
    }

    /// Window built from a fetch result. Oversized responses are cut down
    /// to `page_size`.
    pub fn from_fetch(page_number: u32, page_size: u32, mut items: Vec<T>) -> Self {
        let limit = usize::try_from(page_size).unwrap_or(usize::MAX);
        let has_more = items.len() >= limit;
        items.truncate(limit);
        Self {
            page_number,
            page_size,
            items,
            has_more,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Resource> PageWindow<T> {
    pub fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Remove by id (not index), preserving the order of the rest.
    pub(crate) fn remove(&mut self, id: u64) -> Option<T> {
        let idx = self.position(id)?;
        Some(self.items.remove(idx))
    }

    /// Replace the item with the same id in place.
    pub(crate) fn replace(&mut self, item: T) -> bool {
        match self.position(item.id()) {
            Some(idx) => {
                self.items[idx] = item;
                true
            }
            None => false,
        }
    }
}
