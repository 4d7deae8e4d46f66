//! Dimension selector.

use serde::{Deserialize, Serialize};

/// A world dimension.
///
/// Textual selectors recognize `"nether"` and `"end"`; every other string
/// resolves to [`Dimension::Overworld`]. As with version identifiers,
/// this is a documented fallback policy, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// The surface dimension.
    #[default]
    Overworld,
    /// The nether dimension.
    Nether,
    /// The end dimension.
    End,
}

impl Dimension {
    /// Resolves a textual dimension selector.
    ///
    /// Total mapping with an explicit default arm.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "nether" => Self::Nether,
            "end" => Self::End,
            _ => Self::Overworld,
        }
    }

    /// Canonical selector string.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overworld => "overworld",
            Self::Nether => "nether",
            Self::End => "end",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
