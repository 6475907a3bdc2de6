use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path) -> Result<(), String> {
    let engine = super::load_engine(file);
    let xp = engine.hero().xp;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Reward", "Cost", "Kind", ""]);

    for reward in engine.rewards() {
        let affordable = if xp >= reward.cost { "✔" } else { "locked" };
        table.add_row(vec![
            reward.id.clone(),
            format!("{} {}", reward.icon, reward.name),
            reward.cost.to_string(),
            reward.kind.to_string(),
            affordable.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  You have {xp} XP to spend.");

    Ok(())
}
