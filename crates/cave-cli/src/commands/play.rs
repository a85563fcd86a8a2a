use std::path::Path;

use colored::Colorize;

use cave_fiction::{Ending, FictionSession, SessionConfig, StdConsole};

pub fn run(content: Option<&Path>, seed: u64) -> Result<(), String> {
    let content = super::load_content(content)?;
    let config = SessionConfig::default().with_seed(seed);

    println!("{}", "=".repeat(60));
    println!("    {}", content.title().bold());
    println!("{}", "=".repeat(60));
    println!();

    let mut session = FictionSession::new(content, config);
    let mut console = StdConsole::new();
    let ending = session.play(&mut console).map_err(|e| e.to_string())?;

    if ending == Ending::Defeated {
        println!("{}", "You have been defeated.".red());
    }
    Ok(())
}
