use std::path::Path;

use ql_engine::{Engine, EngineConfig};

pub fn run(file: &Path, name: &str) -> Result<(), String> {
    if file.exists() {
        return Err(format!("save file '{}' already exists", file.display()));
    }

    let engine = Engine::starter(name, EngineConfig::default());
    super::persist(file, &engine)?;

    println!("Created save for hero '{name}' in {}", file.display());
    println!();
    println!("Get started:");
    println!("  ql status          # Hero panel");
    println!("  ql quests          # See the quest board");
    println!("  ql play            # Interactive session");

    Ok(())
}
