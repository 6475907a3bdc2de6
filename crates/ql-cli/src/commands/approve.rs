use std::path::Path;

use colored::Colorize;

pub fn run(file: &Path, quest: &str) -> Result<(), String> {
    let mut engine = super::load_engine(file);

    let Some(id) = engine.find_quest(quest) else {
        println!("No quest matches '{quest}'.");
        return Ok(());
    };

    let (title, xp) = engine
        .quests()
        .iter()
        .find(|q| q.id == id)
        .map(|q| (q.title.clone(), q.xp_reward))
        .unwrap_or_default();

    engine.approve_quest(id);
    super::persist(file, &engine)?;

    let hero = engine.hero();
    println!(
        "{} '{title}': +{xp} XP — {} is level {} ({}/{} XP)",
        "Approved".bold(),
        hero.name,
        hero.level,
        hero.xp,
        hero.level_threshold()
    );
    Ok(())
}
