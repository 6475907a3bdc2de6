use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// Title used when quest creation omits one.
pub const DEFAULT_TITLE: &str = "New Quest";
/// Description used when quest creation omits one.
pub const DEFAULT_DESCRIPTION: &str = "A new decree from the realm.";
/// XP reward used when quest creation omits one.
pub const DEFAULT_XP_REWARD: u32 = 25;

/// Unique identifier for every quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestId(pub Uuid);

impl QuestId {
    /// Generate a new random quest ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The fixed set of chore categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestCategory {
    /// Personal care: hygiene, bedtime, health.
    Care,
    /// Study: homework, reading, practice.
    Study,
    /// Cleaning: tidying rooms, taking out trash.
    Clean,
    /// Special one-off tasks that fit nowhere else.
    #[default]
    Magic,
}

impl QuestCategory {
    /// Try to parse a category from a string.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "care" => Ok(Self::Care),
            "study" => Ok(Self::Study),
            "clean" => Ok(Self::Clean),
            "magic" => Ok(Self::Magic),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }

    /// Human-readable label for presentation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Care => "Personal Care",
            Self::Study => "Path of Wisdom",
            Self::Clean => "Realm Cleaning",
            Self::Magic => "Special Task",
        }
    }
}

impl fmt::Display for QuestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Care => write!(f, "care"),
            Self::Study => write!(f, "study"),
            Self::Clean => write!(f, "clean"),
            Self::Magic => write!(f, "magic"),
        }
    }
}

/// Lifecycle status of a quest.
///
/// Quests are created active, move to pending approval when the child
/// reports them done, and are completed when a parent approves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    /// Available for the child to work on.
    Active,
    /// Reported done, awaiting parent approval.
    PendingApproval,
    /// Approved; XP has been credited.
    Completed,
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::PendingApproval => write!(f, "pending approval"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A unit of assignable work with an XP reward and lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    /// Unique identifier for this quest.
    pub id: QuestId,
    /// Display title of the quest.
    pub title: String,
    /// Flavor description shown with the quest.
    pub description: String,
    /// XP credited to the hero on approval.
    pub xp_reward: u32,
    /// Chore category.
    pub category: QuestCategory,
    /// Current lifecycle status.
    pub status: QuestStatus,
    /// Timestamp when the quest was created.
    pub created_at: DateTime<Utc>,
}

impl Quest {
    /// Create an active quest from a draft, filling omitted fields with
    /// defaults and assigning a fresh random ID.
    pub fn new(draft: QuestDraft) -> Self {
        Self {
            id: QuestId::new(),
            title: draft.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: draft
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            xp_reward: draft.xp_reward.unwrap_or(DEFAULT_XP_REWARD),
            category: draft.category.unwrap_or_default(),
            status: QuestStatus::Active,
            created_at: Utc::now(),
        }
    }
}

/// Partial quest input for creation. Every field is optional; omitted
/// fields fall back to defaults when the quest is built.
#[derive(Debug, Clone, Default)]
pub struct QuestDraft {
    /// Quest title, if given.
    pub title: Option<String>,
    /// Quest description, if given.
    pub description: Option<String>,
    /// XP reward, if given.
    pub xp_reward: Option<u32>,
    /// Chore category, if given.
    pub category: Option<QuestCategory>,
}

impl QuestDraft {
    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the XP reward.
    pub fn with_xp_reward(mut self, xp: u32) -> Self {
        self.xp_reward = Some(xp);
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: QuestCategory) -> Self {
        self.category = Some(category);
        self
    }
}
