//! Feature (structure) type identifiers.

use crate::dimension::Dimension;
use serde::{Deserialize, Serialize};

/// A named world feature whose placements can be searched.
///
/// Each type belongs to exactly one dimension; ruined portals are modeled
/// as two types because the overworld and nether variants tile the world
/// on different grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    /// Desert pyramid.
    DesertPyramid,
    /// Jungle temple.
    JungleTemple,
    /// Swamp hut.
    SwampHut,
    /// Igloo.
    Igloo,
    /// Village.
    Village,
    /// Ocean ruin.
    OceanRuin,
    /// Shipwreck.
    Shipwreck,
    /// Ocean monument.
    Monument,
    /// Woodland mansion.
    Mansion,
    /// Pillager outpost.
    Outpost,
    /// Ruined portal (overworld variant).
    RuinedPortal,
    /// Ruined portal (nether variant).
    RuinedPortalN,
    /// Ancient city.
    AncientCity,
    /// Buried treasure.
    Treasure,
    /// Mineshaft.
    Mineshaft,
    /// Nether fortress.
    Fortress,
    /// Bastion remnant.
    Bastion,
    /// End city.
    EndCity,
    /// Trail ruins.
    TrailRuins,
    /// Trial chambers.
    TrialChambers,
}

impl FeatureType {
    /// All feature types, in declaration order.
    pub const ALL: [Self; 20] = [
        Self::DesertPyramid,
        Self::JungleTemple,
        Self::SwampHut,
        Self::Igloo,
        Self::Village,
        Self::OceanRuin,
        Self::Shipwreck,
        Self::Monument,
        Self::Mansion,
        Self::Outpost,
        Self::RuinedPortal,
        Self::RuinedPortalN,
        Self::AncientCity,
        Self::Treasure,
        Self::Mineshaft,
        Self::Fortress,
        Self::Bastion,
        Self::EndCity,
        Self::TrailRuins,
        Self::TrialChambers,
    ];

    /// Display name, as emitted in search results.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DesertPyramid => "desert_pyramid",
            Self::JungleTemple => "jungle_temple",
            Self::SwampHut => "swamp_hut",
            Self::Igloo => "igloo",
            Self::Village => "village",
            Self::OceanRuin => "ocean_ruin",
            Self::Shipwreck => "shipwreck",
            Self::Monument => "monument",
            Self::Mansion => "mansion",
            Self::Outpost => "outpost",
            Self::RuinedPortal => "ruined_portal",
            Self::RuinedPortalN => "ruined_portal_n",
            Self::AncientCity => "ancient_city",
            Self::Treasure => "treasure",
            Self::Mineshaft => "mineshaft",
            Self::Fortress => "fortress",
            Self::Bastion => "bastion",
            Self::EndCity => "end_city",
            Self::TrailRuins => "trail_ruins",
            Self::TrialChambers => "trial_chambers",
        }
    }

    /// The dimension this feature type generates in.
    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::Fortress | Self::Bastion | Self::RuinedPortalN => Dimension::Nether,
            Self::EndCity => Dimension::End,
            _ => Dimension::Overworld,
        }
    }
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
