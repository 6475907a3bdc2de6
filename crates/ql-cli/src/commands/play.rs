use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use ql_engine::Session;

pub fn run(file: &Path) -> Result<(), String> {
    let engine = super::load_engine(file);
    let mut session = Session::new(engine);

    println!("  {} Questling session", "Starting".bold());
    println!("  Hero: {}", session.engine().hero().name);
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                super::persist(file, session.engine())?;
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
