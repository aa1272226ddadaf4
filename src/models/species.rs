//! Animal species model

use serde::{Deserialize, Serialize};

/// Patient species supported by the calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    /// Normalize a raw control value. Exactly "cat" (case-insensitive,
    /// trimmed) selects Cat; every other value, including empty or garbage,
    /// is Dog.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "cat" => Species::Cat,
            _ => Species::Dog,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
        }
    }
}

impl Default for Species {
    fn default() -> Self {
        Species::Dog
    }
}
