//! Plant inventory grouped by category.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::coerce::null_as_default;

/// Type-safe enumeration of inventory categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetable,
    Fruit,
    Green,
    Flower,
}

impl Category {
    /// All categories in their fixed display order.
    pub const ALL: [Category; 4] = [
        Category::Vegetable,
        Category::Fruit,
        Category::Green,
        Category::Flower,
    ];

    /// Key of the category's list in the persisted document.
    pub fn document_key(&self) -> &'static str {
        match self {
            Category::Vegetable => "vegetables",
            Category::Fruit => "fruits",
            Category::Green => "greens",
            Category::Flower => "flowers",
        }
    }

    /// Singular lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetable => "vegetable",
            Category::Fruit => "fruit",
            Category::Green => "green",
            Category::Flower => "flower",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegetable" | "vegetables" | "veg" => Ok(Category::Vegetable),
            "fruit" | "fruits" => Ok(Category::Fruit),
            "green" | "greens" => Ok(Category::Green),
            "flower" | "flowers" => Ok(Category::Flower),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

/// Plant names grouped by category, each list kept in insertion order.
///
/// Names are not required to be unique; a duplicate is simply another row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Inventory {
    #[serde(default, deserialize_with = "null_as_default")]
    pub vegetables: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fruits: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub greens: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flowers: Vec<String>,
}

impl Inventory {
    /// The ordered plant names of one category.
    pub fn list(&self, category: Category) -> &[String] {
        match category {
            Category::Vegetable => &self.vegetables,
            Category::Fruit => &self.fruits,
            Category::Green => &self.greens,
            Category::Flower => &self.flowers,
        }
    }

    pub(crate) fn list_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Vegetable => &mut self.vegetables,
            Category::Fruit => &mut self.fruits,
            Category::Green => &mut self.greens,
            Category::Flower => &mut self.flowers,
        }
    }

    /// Total number of rows across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.list(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
