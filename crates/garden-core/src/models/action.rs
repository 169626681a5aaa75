//! Care actions recorded in the log.

use serde::{Deserialize, Serialize};

/// What was done to a batch on a given day.
///
/// The six well-known actions get their own variants; anything else typed by
/// the user is kept verbatim in [`Action::Other`] so that hand-edited logs
/// survive a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Sown,
    Transplanted,
    Watered,
    Fertilized,
    Measured,
    Harvested,
    Other(String),
}

impl Action {
    /// The well-known actions in the order they are offered to the user.
    pub const KNOWN: [Action; 6] = [
        Action::Sown,
        Action::Transplanted,
        Action::Watered,
        Action::Fertilized,
        Action::Measured,
        Action::Harvested,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Action::Sown => "Sown",
            Action::Transplanted => "Transplanted",
            Action::Watered => "Watered",
            Action::Fertilized => "Fertilized",
            Action::Measured => "Measured",
            Action::Harvested => "Harvested",
            Action::Other(text) => text,
        }
    }

    /// Parses user input, matching the well-known actions case-insensitively.
    ///
    /// Stored documents go through the exact-match `From<String>` instead so
    /// that their text is never rewritten.
    ///
    /// ```rust
    /// use garden_core::models::Action;
    ///
    /// assert_eq!(Action::from_input("watered"), Action::Watered);
    /// assert_eq!(Action::from_input("Pruned"), Action::Other("Pruned".to_string()));
    /// ```
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        Self::KNOWN
            .iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| Action::Other(trimmed.to_string()))
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::Other(String::new())
    }
}

impl From<String> for Action {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Sown" => Action::Sown,
            "Transplanted" => Action::Transplanted,
            "Watered" => Action::Watered,
            "Fertilized" => Action::Fertilized,
            "Measured" => Action::Measured,
            "Harvested" => Action::Harvested,
            _ => Action::Other(value),
        }
    }
}

impl From<Action> for String {
    fn from(value: Action) -> Self {
        match value {
            Action::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}
