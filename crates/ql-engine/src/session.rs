//! Interactive household session.
//!
//! `Session` wraps an [`Engine`] and turns lines of user input into
//! engine operations, returning the text to show. Both roles share one
//! session: `done` is the child reporting a quest, `approve`/`bless` are
//! the parent responding.

use chrono::Utc;

use ql_core::{Guardian, HeroClass, QuestDraft, QuestStatus};

use crate::chronicle::Chronicle;
use crate::engine::Engine;
use crate::error::{EngineError, EngineResult};
use crate::greeting::{GreetingSource, TemplateGreeter, greet_or_fallback};

/// An interactive session over the progression engine.
pub struct Session {
    engine: Engine,
    greeter: Box<dyn GreetingSource>,
}

impl Session {
    /// Create a session with the shipped template greeter, seeded from
    /// the engine config.
    pub fn new(engine: Engine) -> Self {
        let greeter = Box::new(TemplateGreeter::seeded(engine.config().seed));
        Self { engine, greeter }
    }

    /// Create a session with a custom greeting source.
    pub fn with_greeter(engine: Engine, greeter: Box<dyn GreetingSource>) -> Self {
        Self { engine, greeter }
    }

    /// The engine behind this session (read-only).
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> EngineResult<String> {
        // Interaction drives the blessing-marker tick.
        self.engine.expire_blessing(Utc::now());

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "status" => self.do_status(),
            "quests" => self.do_quests(),
            "rewards" => self.do_rewards(),
            "done" | "report" => self.do_done(rest),
            "approve" => self.do_approve(rest),
            "add" => self.do_add(rest),
            "delete" => self.do_delete(rest),
            "bless" => self.do_bless(rest),
            "redeem" => self.do_redeem(rest),
            "class" => self.do_class(rest),
            "avatar" => self.do_avatar(rest),
            "greet" => self.do_greet(),
            "chronicle" => self.do_chronicle(),
            "export" => self.do_export(rest),
            "help" => Ok(self.do_help(rest)),
            "quit" | "q" => Ok("Farewell, hero!".to_string()),
            other => Err(EngineError::InvalidChoice(format!(
                "unknown command: {other} (try 'help')"
            ))),
        }
    }

    fn do_status(&self) -> EngineResult<String> {
        let hero = self.engine.hero();
        let class = hero
            .hero_class
            .map_or_else(|| "unchosen".to_string(), |c| c.to_string());

        let mut out = format!(
            "{} — level {} {} | streak {}\n",
            hero.name, hero.level, class, hero.streak
        );
        out.push_str(&format!("XP: {}/{}\n", hero.xp, hero.level_threshold()));

        if let Some(blessing) = hero.blessing {
            out.push_str(&format!("A blessing from {} is shining!\n", blessing.from));
        }

        out.push_str(&format!(
            "Quests: {} active, {} pending, {} completed",
            self.engine.count_with_status(QuestStatus::Active),
            self.engine.count_with_status(QuestStatus::PendingApproval),
            self.engine.count_with_status(QuestStatus::Completed),
        ));
        Ok(out)
    }

    fn do_quests(&self) -> EngineResult<String> {
        let active = self.engine.with_status(QuestStatus::Active);
        let pending = self.engine.with_status(QuestStatus::PendingApproval);

        if active.is_empty() && pending.is_empty() {
            return Ok("The quest board is clear. Victory!".to_string());
        }

        let mut out = String::new();
        if !active.is_empty() {
            out.push_str(&format!("Active quests ({}):\n", active.len()));
            for quest in &active {
                out.push_str(&format!(
                    "  [{}] {} (+{} XP, {})\n",
                    quest.id,
                    quest.title,
                    quest.xp_reward,
                    quest.category.label()
                ));
            }
        }
        if !pending.is_empty() {
            out.push_str(&format!("Awaiting approval ({}):\n", pending.len()));
            for quest in &pending {
                out.push_str(&format!(
                    "  [{}] {} (+{} XP)\n",
                    quest.id, quest.title, quest.xp_reward
                ));
            }
        }
        Ok(out.trim_end().to_string())
    }

    fn do_rewards(&self) -> EngineResult<String> {
        let xp = self.engine.hero().xp;
        let mut out = format!("Treasure room (you have {xp} XP):\n");
        for reward in self.engine.rewards() {
            let tag = if xp >= reward.cost { "" } else { " [locked]" };
            out.push_str(&format!(
                "  {} {} — {} XP ({}){}\n",
                reward.icon, reward.name, reward.cost, reward.kind, tag
            ));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_done(&mut self, rest: &str) -> EngineResult<String> {
        if rest.is_empty() {
            return Err(EngineError::InvalidChoice(
                "usage: done <quest title or id>".to_string(),
            ));
        }
        match self.engine.find_quest(rest) {
            Some(id) if self.engine.complete_quest(id) => {
                Ok("Quest reported! A parent will review it.".to_string())
            }
            _ => Ok(format!("No active quest matches: {rest}")),
        }
    }

    fn do_approve(&mut self, rest: &str) -> EngineResult<String> {
        if rest.is_empty() {
            return Err(EngineError::InvalidChoice(
                "usage: approve <quest title or id>".to_string(),
            ));
        }
        let Some(id) = self.engine.find_quest(rest) else {
            return Ok(format!("No quest matches: {rest}"));
        };
        let (title, xp) = self
            .engine
            .quests()
            .iter()
            .find(|q| q.id == id)
            .map(|q| (q.title.clone(), q.xp_reward))
            .unwrap_or_default();
        self.engine.approve_quest(id);
        let hero = self.engine.hero();
        Ok(format!(
            "Approved '{title}': +{xp} XP. {} is now level {} ({}/{} XP).",
            hero.name,
            hero.level,
            hero.xp,
            hero.level_threshold()
        ))
    }

    fn do_add(&mut self, rest: &str) -> EngineResult<String> {
        if rest.is_empty() {
            return Err(EngineError::InvalidChoice(
                "usage: add <quest title>".to_string(),
            ));
        }
        let id = self.engine.add_quest(QuestDraft::default().with_title(rest));
        Ok(format!("Quest posted: {rest} [{id}]"))
    }

    fn do_delete(&mut self, rest: &str) -> EngineResult<String> {
        if rest.is_empty() {
            return Err(EngineError::InvalidChoice(
                "usage: delete <quest title or id>".to_string(),
            ));
        }
        match self.engine.find_quest(rest) {
            Some(id) if self.engine.delete_quest(id) => Ok(format!("Quest removed: {rest}")),
            _ => Ok(format!("No quest matches: {rest}")),
        }
    }

    fn do_bless(&mut self, rest: &str) -> EngineResult<String> {
        if rest.is_empty() {
            return Err(EngineError::InvalidChoice(
                "usage: bless <mom|dad>".to_string(),
            ));
        }
        let guardian = Guardian::parse(rest)?;
        self.engine.send_blessing(guardian);
        let xp = self.engine.config().blessing_xp;
        Ok(format!(
            "A blessing from {guardian} lights up the screen! +{xp} XP"
        ))
    }

    fn do_redeem(&mut self, rest: &str) -> EngineResult<String> {
        if rest.is_empty() {
            return Err(EngineError::InvalidChoice(
                "usage: redeem <reward name or id>".to_string(),
            ));
        }
        let Some((id, name, cost)) = self
            .engine
            .find_reward(rest)
            .map(|r| (r.id.clone(), r.name.clone(), r.cost))
        else {
            return Ok(format!("No reward matches: {rest}"));
        };
        self.engine.redeem_reward(&id)?;
        Ok(format!(
            "Request sent to the council: {name} (-{cost} XP). {} XP left.",
            self.engine.hero().xp
        ))
    }

    fn do_class(&mut self, rest: &str) -> EngineResult<String> {
        if rest.is_empty() {
            return Err(EngineError::InvalidChoice(
                "usage: class <knight|mage|ranger>".to_string(),
            ));
        }
        let class = HeroClass::parse(rest)?;
        self.engine.set_hero_class(class);
        Ok(format!("You are now a {class}!"))
    }

    fn do_avatar(&mut self, rest: &str) -> EngineResult<String> {
        match rest {
            "" => Err(EngineError::InvalidChoice(
                "usage: avatar <reference> | avatar clear".to_string(),
            )),
            "clear" => {
                self.engine.clear_avatar();
                Ok("Avatar cleared.".to_string())
            }
            reference => {
                self.engine.set_avatar(reference);
                Ok("Avatar updated.".to_string())
            }
        }
    }

    fn do_greet(&mut self) -> EngineResult<String> {
        let (name, level) = {
            let hero = self.engine.hero();
            (hero.name.clone(), hero.level)
        };
        Ok(greet_or_fallback(self.greeter.as_mut(), &name, level))
    }

    fn do_chronicle(&self) -> EngineResult<String> {
        let chronicle = self.engine.chronicle();
        if chronicle.is_empty() {
            return Ok("Nothing has happened yet.".to_string());
        }
        // Show the last 10 entries.
        let entries = chronicle.entries();
        let start = entries.len().saturating_sub(10);
        let mut recent = Chronicle::new();
        for entry in &entries[start..] {
            recent.append(entry.clone());
        }
        Ok(recent.export_text().trim_end().to_string())
    }

    fn do_export(&self, format: &str) -> EngineResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.engine.chronicle().export_markdown()),
            "text" | "txt" => Ok(self.engine.chronicle().export_text()),
            other => Err(EngineError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn do_help(&self, topic: &str) -> String {
        match topic.to_lowercase().as_str() {
            "quests" | "quest" => "\
Quest Commands:
  quests                        List active and pending quests
  done <quest>                  Report a quest finished (child)
  approve <quest>               Approve a reported quest (parent)
  add <title>                   Post a new quest (parent)
  delete <quest>                Remove a quest (parent)

Quests can be named by title or by id prefix."
                .to_string(),
            "rewards" | "reward" | "redeem" => "\
Treasure Commands:
  rewards                       Show the reward catalog
  redeem <reward>               Spend XP on a reward

Redemption is refused if you cannot afford the reward."
                .to_string(),
            "bless" | "blessing" => "\
Blessing Commands:
  bless mom|dad                 Send a small XP boost with a flashy marker

The marker fades on its own after a moment."
                .to_string(),
            "profile" | "class" | "avatar" => "\
Profile Commands:
  class knight|mage|ranger      Choose a hero class
  avatar <reference>            Set the avatar image reference
  avatar clear                  Remove the avatar
  greet                         Hear the sage's welcome"
                .to_string(),
            _ => "\
Questling Commands:
  status                        Hero summary
  quests                        List quests
  done <quest>                  Report a quest finished
  approve <quest>               Approve a reported quest
  add <title>                   Post a new quest
  delete <quest>                Remove a quest
  bless mom|dad                 Send a blessing (+XP)
  rewards                       Show the reward catalog
  redeem <reward>               Spend XP on a reward
  class / avatar / greet        Profile commands
  chronicle                     Recent events
  export [markdown|text]        Export the full chronicle
  help [topic]                  Show help (quests, rewards, bless, profile)
  quit                          Exit"
                .to_string(),
        }
    }
}
