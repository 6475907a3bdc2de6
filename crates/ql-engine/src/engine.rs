//! The progression engine: owns hero and quest state and applies every
//! state-changing operation.
//!
//! Presentation surfaces read state through the accessors and express
//! intent through the operations; nothing else mutates the state. Lookup
//! failures on id-keyed operations are silent no-ops (the operation
//! reports `false`), with one exception: redeeming a reward the hero
//! cannot afford is a surfaced rejection.

use chrono::{DateTime, Duration, Utc};

use ql_core::{
    Blessing, Guardian, Hero, HeroClass, Quest, QuestDraft, QuestId, QuestStatus, Reward,
};

use crate::chronicle::{Chronicle, ChronicleEntry};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::leveling;
use crate::starter;

/// The reward/progression state machine.
#[derive(Debug, Clone)]
pub struct Engine {
    hero: Hero,
    quests: Vec<Quest>,
    rewards: Vec<Reward>,
    chronicle: Chronicle,
    config: EngineConfig,
    blessing_seq: u64,
}

impl Engine {
    /// Create an engine over existing state.
    pub fn new(hero: Hero, quests: Vec<Quest>, rewards: Vec<Reward>, config: EngineConfig) -> Self {
        // Resume the token sequence past any persisted marker so a stale
        // clear from a previous session cannot match a new blessing.
        let blessing_seq = hero.blessing.as_ref().map_or(0, |b| b.token);
        Self {
            hero,
            quests,
            rewards,
            chronicle: Chronicle::new(),
            config,
            blessing_seq,
        }
    }

    /// Create an engine over the hardcoded starter data.
    pub fn starter(name: &str, config: EngineConfig) -> Self {
        Self::new(
            starter::starter_hero(name),
            starter::starter_quests(),
            starter::reward_catalog(),
            config,
        )
    }

    /// The hero's current state.
    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    /// All quests, newest first.
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// The immutable reward catalog.
    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    /// The chronicle of everything that happened this session.
    pub fn chronicle(&self) -> &Chronicle {
        &self.chronicle
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Quests with the given status, in list order.
    pub fn with_status(&self, status: QuestStatus) -> Vec<&Quest> {
        self.quests.iter().filter(|q| q.status == status).collect()
    }

    /// Number of quests with the given status.
    pub fn count_with_status(&self, status: QuestStatus) -> usize {
        self.quests.iter().filter(|q| q.status == status).count()
    }

    // -----------------------------------------------------------------------
    // Quest lifecycle
    // -----------------------------------------------------------------------

    /// Report an active quest done: active → pending approval.
    ///
    /// Returns true if the transition happened. Unknown ids and quests in
    /// any other status are left unchanged.
    pub fn complete_quest(&mut self, id: QuestId) -> bool {
        let Some(quest) = self.quests.iter_mut().find(|q| q.id == id) else {
            return false;
        };
        if quest.status != QuestStatus::Active {
            return false;
        }
        quest.status = QuestStatus::PendingApproval;
        let title = quest.title.clone();
        self.chronicle.append(ChronicleEntry::QuestReported {
            title,
            timestamp: Utc::now(),
        });
        true
    }

    /// Approve a quest: mark it completed and credit its XP reward.
    ///
    /// Returns true if the quest was found. Unknown ids are ignored.
    pub fn approve_quest(&mut self, id: QuestId) -> bool {
        let Some(quest) = self.quests.iter_mut().find(|q| q.id == id) else {
            return false;
        };
        quest.status = QuestStatus::Completed;
        let title = quest.title.clone();
        let xp = quest.xp_reward;
        self.chronicle.append(ChronicleEntry::QuestApproved {
            title,
            xp,
            timestamp: Utc::now(),
        });
        self.credit_xp(xp);
        true
    }

    /// Add a quest built from the draft, prepending it to the list.
    /// Returns the new quest's id.
    pub fn add_quest(&mut self, draft: QuestDraft) -> QuestId {
        let quest = Quest::new(draft);
        let id = quest.id;
        self.chronicle.append(ChronicleEntry::QuestAdded {
            title: quest.title.clone(),
            timestamp: Utc::now(),
        });
        self.quests.insert(0, quest);
        id
    }

    /// Remove a quest by id. Returns true if one was removed; removing an
    /// unknown id leaves the list unchanged.
    pub fn delete_quest(&mut self, id: QuestId) -> bool {
        let len_before = self.quests.len();
        self.quests.retain(|q| q.id != id);
        self.quests.len() < len_before
    }

    // -----------------------------------------------------------------------
    // Blessings
    // -----------------------------------------------------------------------

    /// Send a blessing: credit the flat blessing XP and install the
    /// transient marker. Returns the marker's token, which keys the
    /// scheduled auto-clear.
    ///
    /// A newer blessing replaces the marker and its token, so a clear
    /// scheduled for the older one becomes a no-op.
    pub fn send_blessing(&mut self, from: Guardian) -> u64 {
        let xp = self.config.blessing_xp;
        self.chronicle.append(ChronicleEntry::BlessingSent {
            from,
            xp,
            timestamp: Utc::now(),
        });
        self.credit_xp(xp);

        self.blessing_seq += 1;
        let lifetime =
            Duration::milliseconds(self.config.blessing_lifetime_ms.try_into().unwrap_or(i64::MAX));
        self.hero.blessing = Some(Blessing {
            from,
            token: self.blessing_seq,
            expires_at: Utc::now() + lifetime,
        });
        self.blessing_seq
    }

    /// Clear the blessing marker, but only if it still carries `token`.
    /// Returns true if the marker was cleared.
    pub fn clear_blessing(&mut self, token: u64) -> bool {
        if self.hero.blessing.is_some_and(|b| b.token == token) {
            self.hero.blessing = None;
            return true;
        }
        false
    }

    /// Clear the blessing marker if its lifetime has elapsed at `now`.
    /// Returns true if the marker was cleared.
    pub fn expire_blessing(&mut self, now: DateTime<Utc>) -> bool {
        if self.hero.blessing.is_some_and(|b| now >= b.expires_at) {
            self.hero.blessing = None;
            return true;
        }
        false
    }

    // -----------------------------------------------------------------------
    // Rewards
    // -----------------------------------------------------------------------

    /// Spend XP on a catalog reward.
    ///
    /// Unknown ids are ignored (`Ok(false)`). A reward the hero cannot
    /// afford is rejected with [`EngineError::InsufficientXp`] and the
    /// hero's XP is left untouched. The catalog itself never changes.
    pub fn redeem_reward(&mut self, id: &str) -> EngineResult<bool> {
        let Some(reward) = self.rewards.iter().find(|r| r.id == id) else {
            return Ok(false);
        };
        if self.hero.xp < reward.cost {
            return Err(EngineError::InsufficientXp {
                cost: reward.cost,
                xp: self.hero.xp,
            });
        }
        let (name, cost) = (reward.name.clone(), reward.cost);
        self.hero.xp -= cost;
        self.chronicle.append(ChronicleEntry::RewardRedeemed {
            name,
            cost,
            timestamp: Utc::now(),
        });
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Profile
    // -----------------------------------------------------------------------

    /// Set the hero's avatar image reference.
    pub fn set_avatar(&mut self, reference: impl Into<String>) {
        self.hero.avatar = Some(reference.into());
    }

    /// Clear the hero's avatar.
    pub fn clear_avatar(&mut self) {
        self.hero.avatar = None;
    }

    /// Set the hero's class.
    pub fn set_hero_class(&mut self, class: HeroClass) {
        self.hero.hero_class = Some(class);
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Resolve user input to a quest id: exact title match
    /// (case-insensitive) first, then a prefix of the id.
    pub fn find_quest(&self, needle: &str) -> Option<QuestId> {
        let needle_lower = needle.to_lowercase();
        if let Some(quest) = self
            .quests
            .iter()
            .find(|q| q.title.to_lowercase() == needle_lower)
        {
            return Some(quest.id);
        }
        self.quests
            .iter()
            .find(|q| q.id.0.to_string().starts_with(&needle_lower))
            .map(|q| q.id)
    }

    /// Resolve user input to a catalog reward: exact id first, then
    /// case-insensitive name.
    pub fn find_reward(&self, needle: &str) -> Option<&Reward> {
        let needle_lower = needle.to_lowercase();
        self.rewards
            .iter()
            .find(|r| r.id == needle)
            .or_else(|| {
                self.rewards
                    .iter()
                    .find(|r| r.name.to_lowercase() == needle_lower)
            })
    }

    /// Credit XP through the leveling function and record any level-up.
    fn credit_xp(&mut self, delta: u32) {
        let before = self.hero.level;
        let (xp, level) = leveling::apply_xp(self.hero.xp, self.hero.level, delta);
        self.hero.xp = xp;
        self.hero.level = level;
        if level > before {
            self.chronicle.append(ChronicleEntry::LevelUp {
                level,
                timestamp: Utc::now(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_engine() -> Engine {
        Engine::starter("Robin", EngineConfig::default())
    }

    fn engine_with_hero(xp: u32, level: u32) -> Engine {
        let mut hero = Hero::new("Robin");
        hero.xp = xp;
        hero.level = level;
        Engine::new(
            hero,
            starter::starter_quests(),
            starter::reward_catalog(),
            EngineConfig::default(),
        )
    }

    #[test]
    fn complete_moves_active_to_pending() {
        let mut engine = test_engine();
        let id = engine.quests()[0].id;
        assert!(engine.complete_quest(id));
        assert_eq!(engine.quests()[0].status, QuestStatus::PendingApproval);
    }

    #[test]
    fn complete_ignores_non_active() {
        let mut engine = test_engine();
        let id = engine.quests()[0].id;
        engine.complete_quest(id);
        // Already pending: second report is a no-op.
        assert!(!engine.complete_quest(id));
        assert_eq!(engine.quests()[0].status, QuestStatus::PendingApproval);

        engine.approve_quest(id);
        assert!(!engine.complete_quest(id));
        assert_eq!(engine.quests()[0].status, QuestStatus::Completed);
    }

    #[test]
    fn complete_ignores_unknown_id() {
        let mut engine = test_engine();
        assert!(!engine.complete_quest(QuestId::new()));
    }

    #[test]
    fn approve_credits_xp() {
        let mut engine = engine_with_hero(85, 2);
        let id = engine.add_quest(QuestDraft::default().with_xp_reward(20));
        engine.complete_quest(id);
        assert!(engine.approve_quest(id));
        // 85 + 20 = 105, below the level-2 threshold of 200
        assert_eq!(engine.hero().xp, 105);
        assert_eq!(engine.hero().level, 2);
        assert_eq!(engine.quests()[0].status, QuestStatus::Completed);
    }

    #[test]
    fn approve_can_cross_multiple_levels() {
        let mut engine = engine_with_hero(90, 1);
        let id = engine.add_quest(QuestDraft::default().with_xp_reward(250));
        engine.complete_quest(id);
        engine.approve_quest(id);
        assert_eq!(engine.hero().xp, 40);
        assert_eq!(engine.hero().level, 4);
    }

    #[test]
    fn approve_ignores_unknown_id() {
        let mut engine = test_engine();
        let xp_before = engine.hero().xp;
        assert!(!engine.approve_quest(QuestId::new()));
        assert_eq!(engine.hero().xp, xp_before);
    }

    #[test]
    fn add_quest_prepends_with_defaults() {
        let mut engine = test_engine();
        let count_before = engine.quests().len();
        let id = engine.add_quest(QuestDraft::default());
        assert_eq!(engine.quests().len(), count_before + 1);
        let quest = &engine.quests()[0];
        assert_eq!(quest.id, id);
        assert_eq!(quest.xp_reward, 25);
        assert_eq!(quest.category, ql_core::QuestCategory::Magic);
        assert_eq!(quest.status, QuestStatus::Active);
    }

    #[test]
    fn add_quest_ids_are_unique() {
        let mut engine = test_engine();
        let a = engine.add_quest(QuestDraft::default());
        let b = engine.add_quest(QuestDraft::default());
        assert_ne!(a, b);
        // Newest first: b was added last and sits on top.
        assert_eq!(engine.quests()[0].id, b);
        assert_eq!(engine.quests()[1].id, a);
    }

    #[test]
    fn delete_quest_removes_by_id() {
        let mut engine = test_engine();
        let id = engine.quests()[0].id;
        assert!(engine.delete_quest(id));
        assert!(engine.quests().iter().all(|q| q.id != id));
    }

    #[test]
    fn delete_unknown_id_is_idempotent() {
        let mut engine = test_engine();
        let count = engine.quests().len();
        assert!(!engine.delete_quest(QuestId::new()));
        assert_eq!(engine.quests().len(), count);
    }

    #[test]
    fn blessing_credits_flat_xp_and_sets_marker() {
        let mut engine = test_engine();
        let token = engine.send_blessing(Guardian::Mom);
        assert_eq!(engine.hero().xp, 5);
        let marker = engine.hero().blessing.unwrap();
        assert_eq!(marker.from, Guardian::Mom);
        assert_eq!(marker.token, token);
    }

    #[test]
    fn blessing_can_level_up() {
        let mut engine = engine_with_hero(95, 1);
        engine.send_blessing(Guardian::Dad);
        assert_eq!(engine.hero().xp, 0);
        assert_eq!(engine.hero().level, 2);
    }

    #[test]
    fn stale_clear_does_not_cancel_newer_blessing() {
        let mut engine = test_engine();
        let first = engine.send_blessing(Guardian::Mom);
        let second = engine.send_blessing(Guardian::Dad);
        assert!(!engine.clear_blessing(first));
        assert_eq!(engine.hero().blessing.unwrap().from, Guardian::Dad);
        assert!(engine.clear_blessing(second));
        assert!(engine.hero().blessing.is_none());
    }

    #[test]
    fn expire_clears_after_lifetime() {
        let mut engine = test_engine();
        engine.send_blessing(Guardian::Mom);
        // Not yet expired right now.
        assert!(!engine.expire_blessing(Utc::now()));
        assert!(engine.hero().blessing.is_some());
        // Well past the 2.1s lifetime.
        assert!(engine.expire_blessing(Utc::now() + Duration::seconds(10)));
        assert!(engine.hero().blessing.is_none());
    }

    #[test]
    fn expire_is_independent_of_queued_count() {
        let mut engine = test_engine();
        engine.send_blessing(Guardian::Mom);
        engine.send_blessing(Guardian::Dad);
        engine.send_blessing(Guardian::Mom);
        assert!(engine.expire_blessing(Utc::now() + Duration::seconds(10)));
        assert!(engine.hero().blessing.is_none());
        // Nothing left to expire.
        assert!(!engine.expire_blessing(Utc::now() + Duration::seconds(20)));
    }

    #[test]
    fn redeem_rejects_when_unaffordable() {
        let mut engine = engine_with_hero(100, 2);
        // Catalog id "2" costs 150.
        let result = engine.redeem_reward("2");
        assert!(matches!(
            result,
            Err(EngineError::InsufficientXp { cost: 150, xp: 100 })
        ));
        assert_eq!(engine.hero().xp, 100);
    }

    #[test]
    fn redeem_debits_exact_cost() {
        let mut engine = engine_with_hero(500, 3);
        // Catalog id "1" costs 500.
        assert!(engine.redeem_reward("1").unwrap());
        assert_eq!(engine.hero().xp, 0);
        assert_eq!(engine.hero().level, 3);
    }

    #[test]
    fn redeem_ignores_unknown_id() {
        let mut engine = engine_with_hero(500, 3);
        assert!(!engine.redeem_reward("99").unwrap());
        assert_eq!(engine.hero().xp, 500);
    }

    #[test]
    fn redeem_never_mutates_catalog() {
        let mut engine = engine_with_hero(500, 3);
        engine.redeem_reward("1").unwrap();
        assert_eq!(engine.rewards().len(), 5);
        assert!(engine.rewards().iter().all(|r| !r.unlocked));
    }

    #[test]
    fn avatar_and_class() {
        let mut engine = test_engine();
        engine.set_avatar("portraits/robin.png");
        assert_eq!(engine.hero().avatar.as_deref(), Some("portraits/robin.png"));
        engine.clear_avatar();
        assert!(engine.hero().avatar.is_none());

        engine.set_hero_class(HeroClass::Ranger);
        assert_eq!(engine.hero().hero_class, Some(HeroClass::Ranger));
    }

    #[test]
    fn find_quest_by_title_case_insensitive() {
        let engine = test_engine();
        let id = engine.find_quest("tooth-brushing ritual").unwrap();
        assert_eq!(engine.quests().iter().find(|q| q.id == id).unwrap().title, "Tooth-Brushing Ritual");
    }

    #[test]
    fn find_quest_by_id_prefix() {
        let engine = test_engine();
        let id = engine.quests()[1].id;
        let prefix = id.to_string();
        assert_eq!(engine.find_quest(&prefix), Some(id));
    }

    #[test]
    fn find_reward_by_id_or_name() {
        let engine = test_engine();
        assert_eq!(engine.find_reward("1").unwrap().name, "Legendary Pizza Night");
        assert_eq!(engine.find_reward("new hero outfit").unwrap().id, "4");
        assert!(engine.find_reward("dragon").is_none());
    }

    #[test]
    fn operations_are_chronicled() {
        let mut engine = test_engine();
        let id = engine.add_quest(QuestDraft::default().with_title("Set the table"));
        engine.complete_quest(id);
        engine.approve_quest(id);
        engine.send_blessing(Guardian::Mom);
        assert_eq!(engine.chronicle().len(), 4);
    }

    #[test]
    fn status_counts() {
        let mut engine = test_engine();
        let id = engine.quests()[0].id;
        engine.complete_quest(id);
        assert_eq!(engine.count_with_status(QuestStatus::Active), 1);
        assert_eq!(engine.count_with_status(QuestStatus::PendingApproval), 1);
        assert_eq!(engine.count_with_status(QuestStatus::Completed), 0);
    }
}
