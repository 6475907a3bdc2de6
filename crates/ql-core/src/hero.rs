use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The fixed set of hero classes a child can pick for their avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroClass {
    /// Sword-and-shield frontliner.
    Knight,
    /// Spellcaster.
    Mage,
    /// Bow-wielding scout.
    Ranger,
}

impl HeroClass {
    /// Try to parse a hero class from a string.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "knight" => Ok(Self::Knight),
            "mage" => Ok(Self::Mage),
            "ranger" => Ok(Self::Ranger),
            other => Err(CoreError::UnknownHeroClass(other.to_string())),
        }
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Knight => write!(f, "knight"),
            Self::Mage => write!(f, "mage"),
            Self::Ranger => write!(f, "ranger"),
        }
    }
}

/// Which parent sent a blessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guardian {
    /// The hero's mother.
    Mom,
    /// The hero's father.
    Dad,
}

impl Guardian {
    /// Try to parse a guardian from a string.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "mom" => Ok(Self::Mom),
            "dad" => Ok(Self::Dad),
            other => Err(CoreError::UnknownGuardian(other.to_string())),
        }
    }
}

impl fmt::Display for Guardian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mom => write!(f, "mom"),
            Self::Dad => write!(f, "dad"),
        }
    }
}

/// Transient marker left on the hero by a blessing.
///
/// The token identifies which blessing installed the marker, so a clear
/// scheduled for an older blessing cannot cancel a newer one. The marker
/// is cleared by the engine once `expires_at` has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blessing {
    /// Which parent sent the blessing.
    pub from: Guardian,
    /// Token keying the scheduled auto-clear.
    pub token: u64,
    /// When the marker stops being shown.
    pub expires_at: DateTime<Utc>,
}

/// The child's progression state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    /// Display name of the hero.
    pub name: String,
    /// XP accumulated toward the next level.
    pub xp: u32,
    /// Current level, starting at 1.
    pub level: u32,
    /// Consecutive-day streak counter.
    pub streak: u32,
    /// Chosen hero class, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_class: Option<HeroClass>,
    /// Opaque reference to an avatar image, if one has been set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Live blessing marker, if one has not yet expired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blessing: Option<Blessing>,
}

impl Hero {
    /// Create a fresh level-1 hero with no XP.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            xp: 0,
            level: 1,
            streak: 0,
            hero_class: None,
            avatar: None,
            blessing: None,
        }
    }

    /// XP needed to reach the next level from the current one.
    pub fn level_threshold(&self) -> u32 {
        self.level.saturating_mul(100)
    }

    /// Fraction of the way to the next level (0.0 to 1.0).
    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.xp) / f64::from(self.level_threshold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_hero_starts_at_level_one() {
        let hero = Hero::new("Robin");
        assert_eq!(hero.name, "Robin");
        assert_eq!(hero.xp, 0);
        assert_eq!(hero.level, 1);
        assert_eq!(hero.streak, 0);
        assert!(hero.hero_class.is_none());
        assert!(hero.avatar.is_none());
        assert!(hero.blessing.is_none());
    }

    #[test]
    fn threshold_scales_with_level() {
        let mut hero = Hero::new("Robin");
        assert_eq!(hero.level_threshold(), 100);
        hero.level = 4;
        assert_eq!(hero.level_threshold(), 400);
    }

    #[test]
    fn progress_fraction() {
        let mut hero = Hero::new("Robin");
        hero.level = 2;
        hero.xp = 50;
        assert!((hero.progress_fraction() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn hero_class_parse() {
        assert_eq!(HeroClass::parse("Knight").unwrap(), HeroClass::Knight);
        assert_eq!(HeroClass::parse("mage").unwrap(), HeroClass::Mage);
        assert!(HeroClass::parse("bard").is_err());
    }

    #[test]
    fn guardian_parse() {
        assert_eq!(Guardian::parse("mom").unwrap(), Guardian::Mom);
        assert_eq!(Guardian::parse("DAD").unwrap(), Guardian::Dad);
        assert!(Guardian::parse("uncle").is_err());
    }

    #[test]
    fn hero_serde_skips_absent_options() {
        let hero = Hero::new("Robin");
        let json = serde_json::to_string(&hero).unwrap();
        assert!(!json.contains("hero_class"));
        assert!(!json.contains("avatar"));
        assert!(!json.contains("blessing"));
    }

    #[test]
    fn hero_serde_roundtrip_with_blessing() {
        let mut hero = Hero::new("Robin");
        hero.blessing = Some(Blessing {
            from: Guardian::Mom,
            token: 3,
            expires_at: Utc::now(),
        });
        let json = serde_json::to_string(&hero).unwrap();
        let back: Hero = serde_json::from_str(&json).unwrap();
        let blessing = back.blessing.unwrap();
        assert_eq!(blessing.from, Guardian::Mom);
        assert_eq!(blessing.token, 3);
    }
}
