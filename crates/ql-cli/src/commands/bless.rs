use std::path::Path;

use colored::Colorize;

use ql_core::Guardian;

pub fn run(file: &Path, guardian: &str) -> Result<(), String> {
    let guardian = Guardian::parse(guardian).map_err(|e| e.to_string())?;

    let mut engine = super::load_engine(file);
    engine.send_blessing(guardian);
    super::persist(file, &engine)?;

    let xp = engine.config().blessing_xp;
    println!(
        "{} A blessing from {guardian} lights up the screen! +{xp} XP",
        "✦".yellow()
    );
    Ok(())
}
