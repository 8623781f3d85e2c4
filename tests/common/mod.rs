#![allow(dead_code)]

use std::io::Cursor;

use taskman::collection::TaskList;
use taskman::locale::Language;
use taskman::shell::Shell;
use taskman::task::RenderStyle;

/// Final state of a scripted shell session.
pub struct Session {
    pub output: String,
    pub len: usize,
    pub completed: usize,
    pub percentage: f64,
}

/// Drive a shell over `script` (one answer per line) and collect its output.
pub fn run_session(language: Language, script: impl AsRef<[u8]>) -> Session {
    let tasks = TaskList::with_style(RenderStyle::new(language, "%Y-%m-%d"));
    let mut shell = Shell::new(
        tasks,
        language.messages(),
        Cursor::new(script.as_ref()),
        Vec::new(),
    );
    shell.run().unwrap();
    let len = shell.tasks().len();
    let completed = shell.tasks().completed_count();
    let percentage = shell.tasks().completion_percentage();
    let out = shell.into_output();
    Session {
        output: String::from_utf8(out).unwrap(),
        len,
        completed,
        percentage,
    }
}

/// Script lines that add a simple task.
pub fn add_simple(description: &str, category: &str) -> String {
    format!("1\n{description}\n{category}\n1\n")
}
