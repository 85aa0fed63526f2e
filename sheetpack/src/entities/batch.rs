use crate::entities::Item;

/// An independently packed, ordered group of items.
/// The order of the items is their arrival order, which is used as a tie-break during selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Batch {
    /// Optional human-readable label, for example the time window the items belong to
    pub label: Option<String>,
    pub items: Vec<Item>,
}

impl Batch {
    pub fn new(items: Vec<Item>) -> Self {
        Batch { label: None, items }
    }

    pub fn with_label(label: impl Into<String>, items: Vec<Item>) -> Self {
        Batch {
            label: Some(label.into()),
            items,
        }
    }

    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
