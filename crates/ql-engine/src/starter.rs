//! Hardcoded starter data used when no save file exists (or the one on
//! disk cannot be read).

use ql_core::{Hero, Quest, QuestCategory, QuestDraft, Reward, RewardKind};

/// Default hero name used by the starter save.
pub const DEFAULT_HERO_NAME: &str = "Robin";

/// A fresh level-1 hero.
pub fn starter_hero(name: &str) -> Hero {
    Hero::new(name)
}

/// The two quests every new household starts with.
pub fn starter_quests() -> Vec<Quest> {
    vec![
        Quest::new(
            QuestDraft::default()
                .with_title("Tooth-Brushing Ritual")
                .with_description("Polish your pearly-white shield until it gleams!")
                .with_xp_reward(20)
                .with_category(QuestCategory::Care),
        ),
        Quest::new(
            QuestDraft::default()
                .with_title("Room-Tidying Spell")
                .with_description("Banish the toy monsters back into their boxes.")
                .with_xp_reward(50)
                .with_category(QuestCategory::Clean),
        ),
    ]
}

/// The immutable reward catalog.
pub fn reward_catalog() -> Vec<Reward> {
    vec![
        Reward::new("1", "Legendary Pizza Night", 500, RewardKind::Physical, "🍕"),
        Reward::new(
            "2",
            "30 Minutes of Screen Time",
            150,
            RewardKind::Digital,
            "🎮",
        ),
        Reward::new("3", "Stay Up Late (1 Hour)", 300, RewardKind::Physical, "🌙"),
        Reward::new("4", "New Hero Outfit", 100, RewardKind::Digital, "🛡️"),
        Reward::new("5", "Park Adventure Pick", 400, RewardKind::Physical, "🌳"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ql_core::QuestStatus;

    #[test]
    fn starter_quests_are_active() {
        let quests = starter_quests();
        assert_eq!(quests.len(), 2);
        assert!(quests.iter().all(|q| q.status == QuestStatus::Active));
    }

    #[test]
    fn starter_quest_ids_are_unique() {
        let quests = starter_quests();
        assert_ne!(quests[0].id, quests[1].id);
    }

    #[test]
    fn catalog_has_five_rewards_with_positive_costs() {
        let catalog = reward_catalog();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.iter().all(|r| r.cost > 0));
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = reward_catalog();
        let mut ids: Vec<_> = catalog.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
