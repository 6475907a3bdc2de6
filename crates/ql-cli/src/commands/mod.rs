pub mod add;
pub mod approve;
pub mod bless;
pub mod complete;
pub mod delete;
pub mod init;
pub mod play;
pub mod quests;
pub mod redeem;
pub mod rewards;
pub mod status;

use std::path::Path;

use ql_engine::{Engine, EngineConfig, starter, store};

/// Load the saved state from `file`, falling back to starter data when
/// the file is absent or malformed.
pub fn load_engine(file: &Path) -> Engine {
    match store::load(file) {
        Some(snapshot) => Engine::new(
            snapshot.hero,
            snapshot.quests,
            starter::reward_catalog(),
            EngineConfig::default(),
        ),
        None => Engine::starter(starter::DEFAULT_HERO_NAME, EngineConfig::default()),
    }
}

/// Persist the engine's state back to `file`.
pub fn persist(file: &Path, engine: &Engine) -> Result<(), String> {
    store::save(file, engine.hero(), engine.quests()).map_err(|e| e.to_string())
}
