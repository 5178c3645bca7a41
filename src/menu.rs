use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::content::MenuItem;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("no featured menu item with id `{0}`")]
    UnknownItem(String),
}

/// Featured menu items plus the guest's favorites.
#[derive(Debug, Clone)]
pub struct MenuGrid {
    items: Vec<MenuItem>,
    favorites: HashSet<String>,
}

impl MenuGrid {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            favorites: HashSet::new(),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites.len()
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, MenuError> {
        if !self.items.iter().any(|m| m.id == id) {
            return Err(MenuError::UnknownItem(id.to_string()));
        }
        let now_favorite = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        };
        debug!(item = id, favorite = now_favorite, "favorite toggled");
        Ok(now_favorite)
    }
}

/// `1150` -> `$11.50`
pub fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
