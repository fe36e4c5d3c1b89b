use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use web_sys::Storage;

pub const KEY_LAST_STOCK: &str = "lastStock";
pub const KEY_SELECTED_CATEGORY: &str = "selectedCategory";
pub const KEY_NAV_SCROLL: &str = "navScroll";

pub const DEFAULT_CATEGORY: &str = "All";

/// Minimal per-key persistence surface. Backed by localStorage in the
/// browser and by an in-memory map everywhere else (including tests).
/// Storage failures are absorbed: a broken store behaves like an empty one.
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

// ---------- In-memory store -------------------------------------------------

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn clear(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

// ---------- localStorage ----------------------------------------------------

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
impl StateStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = local_storage() {
            let _ = s.set_item(key, value);
        }
    }

    fn clear(&self, key: &str) {
        if let Some(s) = local_storage() {
            let _ = s.remove_item(key);
        }
    }
}

// ---------- Typed accessors -------------------------------------------------

/// The three persisted UI state keys with their defaults. Owned by the
/// navigation controller; everything else reads through it.
#[derive(Clone)]
pub struct UiState {
    store: Rc<dyn StateStore>,
}

impl UiState {
    pub fn new(store: Rc<dyn StateStore>) -> Self {
        Self { store }
    }

    pub fn last_stock(&self) -> Option<String> {
        self.store
            .get(KEY_LAST_STOCK)
            .filter(|t| !t.trim().is_empty())
    }

    pub fn set_last_stock(&self, ticker: &str) {
        self.store.set(KEY_LAST_STOCK, ticker);
    }

    pub fn clear_last_stock(&self) {
        self.store.clear(KEY_LAST_STOCK);
    }

    /// Falls back to "All" when nothing was persisted.
    pub fn selected_category(&self) -> String {
        self.store
            .get(KEY_SELECTED_CATEGORY)
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
    }

    pub fn set_selected_category(&self, category: &str) {
        self.store.set(KEY_SELECTED_CATEGORY, category);
    }

    /// Stored as a stringified integer; anything unparseable reads as 0.
    pub fn nav_scroll(&self) -> i32 {
        self.store
            .get(KEY_NAV_SCROLL)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn set_nav_scroll(&self, offset: i32) {
        self.store.set(KEY_NAV_SCROLL, &offset.to_string());
    }

    pub fn clear_nav_scroll(&self) {
        self.store.clear(KEY_NAV_SCROLL);
    }

    /// Escape hatch for callers that need a key outside the typed trio.
    pub fn raw(&self) -> &Rc<dyn StateStore> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> UiState {
        UiState::new(Rc::new(MemoryStore::new()))
    }

    #[test]
    fn defaults_when_empty() {
        let s = state();
        assert_eq!(s.last_stock(), None);
        assert_eq!(s.selected_category(), "All");
        assert_eq!(s.nav_scroll(), 0);
    }

    #[test]
    fn last_stock_roundtrip_and_clear() {
        let s = state();
        s.set_last_stock("NVDA");
        assert_eq!(s.last_stock().as_deref(), Some("NVDA"));
        s.clear_last_stock();
        assert_eq!(s.last_stock(), None);
    }

    #[test]
    fn selected_category_roundtrip() {
        let s = state();
        s.set_selected_category("Energy");
        assert_eq!(s.selected_category(), "Energy");
    }

    #[test]
    fn nav_scroll_survives_garbage() {
        let s = state();
        s.set_nav_scroll(240);
        assert_eq!(s.nav_scroll(), 240);
        s.raw().set(KEY_NAV_SCROLL, "not-a-number");
        assert_eq!(s.nav_scroll(), 0);
        s.clear_nav_scroll();
        assert_eq!(s.nav_scroll(), 0);
    }

    #[test]
    fn blank_values_read_as_absent() {
        let s = state();
        s.raw().set(KEY_LAST_STOCK, "  ");
        assert_eq!(s.last_stock(), None);
        s.raw().set(KEY_SELECTED_CATEGORY, "");
        assert_eq!(s.selected_category(), "All");
    }
}
