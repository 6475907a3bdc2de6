use std::path::Path;

use ql_core::{QuestCategory, QuestDraft};

pub fn run(
    file: &Path,
    title: &str,
    desc: Option<&str>,
    xp: Option<u32>,
    category: Option<&str>,
) -> Result<(), String> {
    let mut draft = QuestDraft::default().with_title(title);
    if let Some(desc) = desc {
        draft = draft.with_description(desc);
    }
    if let Some(xp) = xp {
        draft = draft.with_xp_reward(xp);
    }
    if let Some(category) = category {
        let category = QuestCategory::parse(category).map_err(|e| e.to_string())?;
        draft = draft.with_category(category);
    }

    let mut engine = super::load_engine(file);
    let id = engine.add_quest(draft);
    super::persist(file, &engine)?;

    println!("Posted quest '{title}' [{id}]");
    Ok(())
}
