//! Interactive decision points.
//!
//! Workflow code never reads the terminal directly. It asks a [`Prompter`],
//! so the same code paths run under tests with scripted answers.

use std::collections::VecDeque;
use std::io::{self, Write};

pub trait Prompter {
    /// Display `prompt` and read one line of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// `y/N` confirmation; anything but `y`/`yes` means no.
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.read_line(&format!("{prompt} (y/N): "))?;
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    /// Confirmation that requires the operator to type `yes` in full.
    fn confirm_word(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.read_line(&format!("{prompt} (yes/no): "))?;
        Ok(answer.trim().eq_ignore_ascii_case("yes"))
    }

    /// Numeric menu selection in `1..=max`; `None` for anything else.
    fn choose(&mut self, prompt: &str, max: u32) -> io::Result<Option<u32>> {
        let answer = self.read_line(prompt)?;
        Ok(answer
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| (1..=max).contains(n)))
    }
}

/// Reads answers from the operator's terminal.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line)
    }
}

/// Canned answers, consumed in order. Exhausting the script yields empty
/// lines, which every provided method treats as a refusal.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}
