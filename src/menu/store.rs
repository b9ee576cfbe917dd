use crate::menu::item::MenuItem;

/// The session's menu, in insertion order.
///
/// Owned by the application object. Screens that only display the menu go
/// through [`MenuStore::snapshot`]; appending needs `&mut`.
#[derive(Debug, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, item: MenuItem) {
        tracing::info!(
            item = %serde_json::to_string(&item).unwrap_or_default(),
            position = self.items.len(),
            "new menu item added"
        );
        self.items.push(item);
    }

    pub fn snapshot(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
