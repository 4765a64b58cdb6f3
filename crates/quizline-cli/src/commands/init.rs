//! The `quizline init` command.

use std::path::Path;

use anyhow::Result;

use quizline_core::store::{builtin_questions, questions_to_json};

pub fn execute() -> Result<()> {
    if Path::new("quizline.toml").exists() {
        println!("quizline.toml already exists, skipping.");
    } else {
        std::fs::write("quizline.toml", SAMPLE_CONFIG)?;
        println!("Created quizline.toml");
    }

    // Seed the question file with the built-in set so it can be edited
    let questions_path = Path::new("questions.json");
    if questions_path.exists() {
        println!("questions.json already exists, skipping.");
    } else {
        std::fs::write(questions_path, questions_to_json(&builtin_questions())?)?;
        println!("Created questions.json");
    }

    println!("\nNext steps:");
    println!("  1. Add your own questions to questions.json");
    println!("  2. Run: quizline validate --questions questions.json");
    println!("  3. Run: quizline");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizline configuration

# Question file; the built-in questions are used if it is missing or malformed.
questions_path = "questions.json"

# Where the high score is kept.
highscore_path = "quiz_highscore.json"

# Name used when the player just presses Enter.
default_player_name = "Player"

# Column width for wrapping question text.
wrap_width = 72
"#;
