//! Core types for Questling: heroes, quests, and the reward catalog.
//!
//! This crate defines the data model the progression engine operates on.
//! It carries no rules of its own — XP crediting, quest lifecycle
//! transitions, and redemption all live in `ql-engine`.

/// Error types used throughout the crate.
pub mod error;
/// Hero state, hero classes, guardians, and the blessing marker.
pub mod hero;
/// Quest types, identifiers, categories, and lifecycle status.
pub mod quest;
/// Reward catalog entries.
pub mod reward;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export hero types.
pub use hero::{Blessing, Guardian, Hero, HeroClass};
/// Re-export quest types.
pub use quest::{Quest, QuestCategory, QuestDraft, QuestId, QuestStatus};
/// Re-export reward types.
pub use reward::{Reward, RewardKind};
