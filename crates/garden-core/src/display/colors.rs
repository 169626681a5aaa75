//! Stable display colors for planting batches.
//!
//! A batch's color is a pure function of its key, so the same batch gets the
//! same color in every session and on every machine. [`BatchPalette`] memoizes
//! the colors handed out during a session and carries the `batch_colors`
//! sidecar of exported documents.

use std::collections::{BTreeMap, BTreeSet};

use sha2::{Digest, Sha256};

/// Pastel `#rrggbb` color derived from the SHA-256 digest of `batch_key`.
///
/// Each channel is kept in the upper half of the range so text stays readable
/// on top of it.
///
/// ```rust
/// use garden_core::display::batch_color;
///
/// let color = batch_color("Tomato-Set-2024-05-01");
/// assert_eq!(color.len(), 7);
/// assert!(color.starts_with('#'));
/// assert_eq!(color, batch_color("Tomato-Set-2024-05-01"));
/// ```
pub fn batch_color(batch_key: &str) -> String {
    let digest = Sha256::digest(batch_key.as_bytes());
    let rgb = [digest[0], digest[1], digest[2]].map(|channel| 0x80 | (channel >> 1));
    format!("#{}", hex::encode(rgb))
}

/// Session memo of batch colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchPalette {
    colors: BTreeMap<String, String>,
}

impl BatchPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the palette with previously exported colors.
    pub fn from_map(colors: BTreeMap<String, String>) -> Self {
        Self { colors }
    }

    /// The color of `batch_key`, assigning one on first use.
    pub fn color_for(&mut self, batch_key: &str) -> &str {
        self.colors
            .entry(batch_key.to_string())
            .or_insert_with(|| batch_color(batch_key))
    }

    /// Assigns colors to every key not seen yet.
    pub fn assign_all<'a, I>(&mut self, batch_keys: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for key in batch_keys {
            self.color_for(key);
        }
    }

    /// Forgets the colors of every key not in `batch_keys`.
    pub fn retain_keys(&mut self, batch_keys: &BTreeSet<&str>) {
        self.colors.retain(|key, _| batch_keys.contains(key.as_str()));
    }

    /// The color already assigned to `batch_key`, if any.
    pub fn get(&self, batch_key: &str) -> Option<&str> {
        self.colors.get(batch_key).map(String::as_str)
    }

    /// Colors for exactly the given keys, assigning as needed.
    pub fn subset<'a, I>(&mut self, batch_keys: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        batch_keys
            .into_iter()
            .map(|key| (key.to_string(), self.color_for(key).to_string()))
            .collect()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.colors
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(color: &str) -> bool {
        color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_batch_color_shape() {
        for key in ["Tomato-Set-2024-05-01", "", "Basil 🌿"] {
            assert!(is_hex_color(&batch_color(key)), "bad color for {key:?}");
        }
    }

    #[test]
    fn test_palette_is_stable() {
        let mut palette = BatchPalette::new();
        let first = palette.color_for("T1").to_string();
        let second = palette.color_for("T1").to_string();
        assert_eq!(first, second);
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_palette_keeps_seeded_colors() {
        let seeded = BTreeMap::from([("T1".to_string(), "#123456".to_string())]);
        let mut palette = BatchPalette::from_map(seeded);
        assert_eq!(palette.color_for("T1"), "#123456");
        assert!(palette.get("T2").is_none());

        palette.assign_all(["T1", "T2"]);
        assert_eq!(palette.len(), 2);
        assert!(is_hex_color(palette.get("T2").unwrap_or_default()));
    }

    #[test]
    fn test_subset_only_contains_requested_keys() {
        let mut palette = BatchPalette::new();
        palette.color_for("old");
        let subset = palette.subset(["a", "b"]);
        assert_eq!(subset.len(), 2);
        assert!(!subset.contains_key("old"));
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_retain_keys_drops_unreferenced_colors() {
        let mut palette = BatchPalette::new();
        palette.assign_all(["T1", "gone"]);
        palette.retain_keys(&BTreeSet::from(["T1", "never-colored"]));
        assert_eq!(palette.len(), 1);
        assert!(palette.get("gone").is_none());
        assert!(palette.get("T1").is_some());
    }
}
