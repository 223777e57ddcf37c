use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Asks for a 1-based choice among `count` items. An empty answer cancels.
pub fn select(question: &str, count: usize) -> Result<Option<usize>> {
    println!("{question}");
    let mut rl = DefaultEditor::new()?;
    loop {
        let line = match rl.readline(&format!("Enter number (1-{count}): ")) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match parse_choice(&line, count) {
            Choice::Cancel => return Ok(None),
            Choice::Index(i) => return Ok(Some(i)),
            Choice::Invalid => println!("Please enter a number between 1 and {count}."),
        }
    }
}

pub fn confirm(question: &str) -> bool {
    println!("{question} [y/N] ");

    let Ok(mut rl) = DefaultEditor::new() else {
        return false;
    };
    loop {
        let input = rl.readline("").unwrap_or_default();
        let input = input.trim().to_lowercase();

        if input == "y" || input == "yes" {
            return true;
        } else if input == "n" || input == "no" || input.is_empty() {
            return false;
        } else {
            println!("Please enter 'y' or 'n'.");
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Cancel,
    Index(usize),
    Invalid,
}

fn parse_choice(input: &str, count: usize) -> Choice {
    let input = input.trim();
    if input.is_empty() {
        return Choice::Cancel;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Choice::Index(n - 1),
        _ => Choice::Invalid,
    }
}
