use std::path::Path;

pub fn run(file: &Path, quest: &str) -> Result<(), String> {
    let mut engine = super::load_engine(file);

    match engine.find_quest(quest) {
        Some(id) if engine.delete_quest(id) => {
            super::persist(file, &engine)?;
            println!("Quest removed.");
        }
        _ => println!("No quest matches '{quest}'."),
    }
    Ok(())
}
