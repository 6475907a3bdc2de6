use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a reward is handed over in the real world or on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    /// Redeemed in the real world (pizza night, park trip).
    Physical,
    /// Redeemed on a device (screen time, cosmetics).
    Digital,
}

impl fmt::Display for RewardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Physical => write!(f, "physical"),
            Self::Digital => write!(f, "digital"),
        }
    }
}

/// A catalog entry the hero can spend XP on.
///
/// The catalog is immutable: redeeming a reward is a spend request, not a
/// stock decrement, so entries are never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    /// Catalog identifier.
    pub id: String,
    /// Display name of the reward.
    pub name: String,
    /// XP cost to redeem.
    pub cost: u32,
    /// Physical or digital.
    pub kind: RewardKind,
    /// Emoji icon shown with the reward.
    pub icon: String,
    /// Carried from the catalog format; not consulted by any rule.
    pub unlocked: bool,
}

impl Reward {
    /// Create a catalog entry.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: u32,
        kind: RewardKind,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            kind,
            icon: icon.into(),
            unlocked: false,
        }
    }
}
