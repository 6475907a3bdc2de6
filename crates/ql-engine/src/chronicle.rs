//! Chronicle: an append-only log of everything that happened in the
//! household, with markdown and text export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ql_core::Guardian;

/// A record of a single engine event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChronicleEntry {
    /// A quest was added to the board.
    QuestAdded {
        /// Title of the new quest.
        title: String,
        /// When the quest was added.
        timestamp: DateTime<Utc>,
    },
    /// The hero reported a quest done.
    QuestReported {
        /// Title of the reported quest.
        title: String,
        /// When it was reported.
        timestamp: DateTime<Utc>,
    },
    /// A parent approved a quest and XP was credited.
    QuestApproved {
        /// Title of the approved quest.
        title: String,
        /// XP credited.
        xp: u32,
        /// When it was approved.
        timestamp: DateTime<Utc>,
    },
    /// The hero reached a new level.
    LevelUp {
        /// The level reached.
        level: u32,
        /// When the level was reached.
        timestamp: DateTime<Utc>,
    },
    /// A parent sent a blessing.
    BlessingSent {
        /// Which parent sent it.
        from: Guardian,
        /// XP credited.
        xp: u32,
        /// When it was sent.
        timestamp: DateTime<Utc>,
    },
    /// The hero spent XP on a reward.
    RewardRedeemed {
        /// Name of the redeemed reward.
        name: String,
        /// XP spent.
        cost: u32,
        /// When it was redeemed.
        timestamp: DateTime<Utc>,
    },
}

/// A chronological log of engine events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chronicle {
    entries: Vec<ChronicleEntry>,
}

impl Chronicle {
    /// Create an empty chronicle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: ChronicleEntry) {
        self.entries.push(entry);
    }

    /// Get all entries in order.
    pub fn entries(&self) -> &[ChronicleEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the chronicle is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the chronicle as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Household Chronicle\n\n");
        for entry in &self.entries {
            match entry {
                ChronicleEntry::QuestAdded { title, .. } => {
                    out.push_str(&format!("- **New quest**: {title}\n"));
                }
                ChronicleEntry::QuestReported { title, .. } => {
                    out.push_str(&format!("- **Reported done**: {title}\n"));
                }
                ChronicleEntry::QuestApproved { title, xp, .. } => {
                    out.push_str(&format!("- **Approved**: {title} (+{xp} XP)\n"));
                }
                ChronicleEntry::LevelUp { level, .. } => {
                    out.push_str(&format!("- **Level up!** Reached level {level}\n"));
                }
                ChronicleEntry::BlessingSent { from, xp, .. } => {
                    out.push_str(&format!("- **Blessing** from {from} (+{xp} XP)\n"));
                }
                ChronicleEntry::RewardRedeemed { name, cost, .. } => {
                    out.push_str(&format!("- **Redeemed**: {name} (-{cost} XP)\n"));
                }
            }
        }
        out
    }

    /// Export the chronicle as plain text, one line per entry.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Household Chronicle\n\n");
        for entry in &self.entries {
            let line = match entry {
                ChronicleEntry::QuestAdded { title, timestamp } => {
                    format!("[{}] new quest: {title}", timestamp.format("%Y-%m-%d %H:%M"))
                }
                ChronicleEntry::QuestReported { title, timestamp } => {
                    format!(
                        "[{}] reported done: {title}",
                        timestamp.format("%Y-%m-%d %H:%M")
                    )
                }
                ChronicleEntry::QuestApproved {
                    title,
                    xp,
                    timestamp,
                } => {
                    format!(
                        "[{}] approved: {title} (+{xp} XP)",
                        timestamp.format("%Y-%m-%d %H:%M")
                    )
                }
                ChronicleEntry::LevelUp { level, timestamp } => {
                    format!(
                        "[{}] level up: reached level {level}",
                        timestamp.format("%Y-%m-%d %H:%M")
                    )
                }
                ChronicleEntry::BlessingSent {
                    from,
                    xp,
                    timestamp,
                } => {
                    format!(
                        "[{}] blessing from {from} (+{xp} XP)",
                        timestamp.format("%Y-%m-%d %H:%M")
                    )
                }
                ChronicleEntry::RewardRedeemed {
                    name,
                    cost,
                    timestamp,
                } => {
                    format!(
                        "[{}] redeemed: {name} (-{cost} XP)",
                        timestamp.format("%Y-%m-%d %H:%M")
                    )
                }
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
