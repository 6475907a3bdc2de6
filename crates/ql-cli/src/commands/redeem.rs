use std::path::Path;

pub fn run(file: &Path, reward: &str) -> Result<(), String> {
    let mut engine = super::load_engine(file);

    let Some((id, name, cost)) = engine
        .find_reward(reward)
        .map(|r| (r.id.clone(), r.name.clone(), r.cost))
    else {
        println!("No reward matches '{reward}'.");
        return Ok(());
    };

    // Insufficient XP is the one rejection the caller must see.
    engine.redeem_reward(&id).map_err(|e| e.to_string())?;
    super::persist(file, &engine)?;

    println!(
        "Request sent to the council: {name} (-{cost} XP). {} XP left.",
        engine.hero().xp
    );
    Ok(())
}
