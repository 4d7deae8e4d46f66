//! Generation ruleset versions.

use serde::{Deserialize, Serialize};

/// A supported generation ruleset, one per game version.
///
/// Callers identify versions numerically (118, 119, 120, 121). Any other
/// identifier resolves to [`McVersion::DEFAULT`]; this leniency is a
/// documented fallback policy, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum McVersion {
    /// The 1.18 generation ruleset.
    V1_18,
    /// The 1.19 generation ruleset.
    V1_19,
    /// The 1.20 generation ruleset.
    V1_20,
    /// The 1.21 generation ruleset.
    V1_21,
}

impl McVersion {
    /// Version used when a caller supplies an unrecognized identifier.
    pub const DEFAULT: Self = Self::V1_20;

    /// Resolves a numeric version identifier.
    ///
    /// Total mapping: every input resolves to a version, unrecognized
    /// identifiers to [`McVersion::DEFAULT`].
    #[must_use]
    pub const fn from_id(id: i32) -> Self {
        match id {
            118 => Self::V1_18,
            119 => Self::V1_19,
            120 => Self::V1_20,
            121 => Self::V1_21,
            _ => Self::DEFAULT,
        }
    }

    /// The numeric identifier for this version.
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::V1_18 => 118,
            Self::V1_19 => 119,
            Self::V1_20 => 120,
            Self::V1_21 => 121,
        }
    }

    /// Human-readable version name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::V1_18 => "1.18",
            Self::V1_19 => "1.19",
            Self::V1_20 => "1.20",
            Self::V1_21 => "1.21",
        }
    }
}

impl Default for McVersion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for McVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for v in [
            McVersion::V1_18,
            McVersion::V1_19,
            McVersion::V1_20,
            McVersion::V1_21,
        ] {
            assert_eq!(McVersion::from_id(v.id()), v);
        }
    }

    #[test]
    fn test_version_ordering() {
        assert!(McVersion::V1_18 < McVersion::V1_19);
        assert!(McVersion::V1_20 < McVersion::V1_21);
    }

    #[test]
    fn test_display() {
        assert_eq!(McVersion::V1_20.to_string(), "1.20");
    }
}
