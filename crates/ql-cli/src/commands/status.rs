use std::path::Path;

use chrono::Utc;
use colored::Colorize;

use ql_core::QuestStatus;
use ql_engine::greeting::{TemplateGreeter, greet_or_fallback};

pub fn run(file: &Path) -> Result<(), String> {
    let mut engine = super::load_engine(file);
    // The marker fades on its own; persist only if it just did.
    if engine.expire_blessing(Utc::now()) {
        super::persist(file, &engine)?;
    }

    let hero = engine.hero();
    let class = hero
        .hero_class
        .map_or_else(|| "unchosen class".to_string(), |c| c.to_string());

    println!("  {} — level {} {}", hero.name.bold(), hero.level, class);
    println!(
        "  {} {}/{} XP | streak {}",
        xp_bar(hero.progress_fraction(), 20),
        hero.xp,
        hero.level_threshold(),
        hero.streak
    );

    if let Some(blessing) = hero.blessing {
        println!(
            "  {} A blessing from {} is shining!",
            "✦".yellow(),
            blessing.from
        );
    }

    println!(
        "  Quests: {} active, {} pending, {} completed",
        engine.count_with_status(QuestStatus::Active),
        engine.count_with_status(QuestStatus::PendingApproval),
        engine.count_with_status(QuestStatus::Completed),
    );

    let mut greeter = TemplateGreeter::seeded(engine.config().seed);
    let greeting = greet_or_fallback(&mut greeter, &hero.name, hero.level);
    println!();
    println!("  {}", format!("\"{greeting}\"").italic());

    Ok(())
}

/// Render a progress bar like `[████░░░░]`.
fn xp_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}
