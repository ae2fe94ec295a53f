//! Group-to-color display mapping.
//!
//! Colors are purely presentational and play no part in conflict detection.
//! The mapping is explicit caller-supplied configuration, deserializable
//! from JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Explicit `{group_id: color}` mapping with a fallback for unknown groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPalette {
    #[serde(default)]
    colors: HashMap<String, String>,
    #[serde(default = "default_color")]
    fallback: String,
}

fn default_color() -> String {
    "#ffffff".to_string()
}

impl Default for GroupPalette {
    fn default() -> Self {
        GroupPalette {
            colors: HashMap::new(),
            fallback: default_color(),
        }
    }
}

impl GroupPalette {
    /// Build a palette from `(group_id, color)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        GroupPalette {
            colors: pairs
                .into_iter()
                .map(|(g, c)| (g.into(), c.into()))
                .collect(),
            fallback: default_color(),
        }
    }

    /// Override the fallback color for unmapped groups.
    pub fn with_fallback(mut self, color: impl Into<String>) -> Self {
        self.fallback = color.into();
        self
    }

    /// The display color for a group, or the fallback when unmapped.
    pub fn color_for(&self, group_id: &str) -> &str {
        self.colors
            .get(group_id)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}
