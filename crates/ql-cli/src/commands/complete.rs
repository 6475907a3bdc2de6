use std::path::Path;

pub fn run(file: &Path, quest: &str) -> Result<(), String> {
    let mut engine = super::load_engine(file);

    match engine.find_quest(quest) {
        Some(id) if engine.complete_quest(id) => {
            super::persist(file, &engine)?;
            println!("Quest reported! A parent will review it.");
        }
        _ => println!("No active quest matches '{quest}'."),
    }
    Ok(())
}
