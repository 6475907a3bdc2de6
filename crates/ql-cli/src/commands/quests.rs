use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use ql_core::QuestStatus;

pub fn run(file: &Path, all: bool) -> Result<(), String> {
    let engine = super::load_engine(file);

    let quests: Vec<_> = engine
        .quests()
        .iter()
        .filter(|q| all || q.status != QuestStatus::Completed)
        .collect();

    if quests.is_empty() {
        println!("  The quest board is clear.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Category", "XP", "Status"]);

    for quest in &quests {
        table.add_row(vec![
            quest.id.to_string(),
            quest.title.clone(),
            quest.category.label().to_string(),
            format!("+{}", quest.xp_reward),
            quest.status.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} quests", quests.len());

    Ok(())
}
