//! Inventory operations for the Garden.

use log::debug;

use super::Garden;
use crate::{
    models::Category,
    params::AddPlant,
};

impl Garden {
    /// Appends a plant name to a category.
    ///
    /// The name is stored exactly as given. Empty or whitespace-only names
    /// are ignored and `false` is returned. Duplicates are accepted and
    /// become separate rows.
    pub fn add_plant(&mut self, params: &AddPlant) -> bool {
        let name = &params.name;
        if name.trim().is_empty() {
            debug!("Ignoring empty plant name for {}", params.category.as_str());
            return false;
        }
        self.inventory.list_mut(params.category).push(name.clone());
        debug!("Added {name} to {}", params.category.document_key());
        true
    }

    /// Removes the first occurrence of `name` from a category.
    ///
    /// Returns whether a row was removed.
    pub fn remove_plant(&mut self, category: Category, name: &str) -> bool {
        let list = self.inventory.list_mut(category);
        match list.iter().position(|existing| existing == name) {
            Some(position) => {
                list.remove(position);
                debug!("Removed {name} from {}", category.document_key());
                true
            }
            None => false,
        }
    }

    /// Plant names of one category in insertion order.
    pub fn plants(&self, category: Category) -> &[String] {
        self.inventory.list(category)
    }

    /// Every plant name, category by category in the fixed order vegetables,
    /// fruits, greens, flowers.
    pub fn all_plants(&self) -> Vec<String> {
        Category::ALL
            .iter()
            .flat_map(|category| self.inventory.list(*category).iter().cloned())
            .collect()
    }
}
