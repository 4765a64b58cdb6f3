//! The `quizline validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizline_core::store::{parse_questions, validate_questions};

pub fn execute(questions_path: PathBuf) -> Result<()> {
    let questions = parse_questions(&questions_path)?;

    println!(
        "Question set: {} ({} questions)",
        questions_path.display(),
        questions.len()
    );

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Answer"]);
    for (i, q) in questions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&q.prompt),
            Cell::new(format!("{}) {}", q.correct, q.correct_text())),
        ]);
    }
    println!("{table}");

    let warnings = validate_questions(&questions);
    for w in &warnings {
        let prefix = w
            .question
            .map(|n| format!("  [Q{n}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All questions valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
