//! Line-based text session the game talks through.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// A sequential prompt/print interface.
pub trait Console {
    /// Prints one line.
    fn say(&mut self, line: &str);

    /// Prints `prompt` and blocks for one line of input.
    ///
    /// The returned line has its trailing newline removed. Read failures
    /// produce an empty line.
    fn ask(&mut self, prompt: &str) -> String;
}

/// Console on the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn say(&mut self, line: &str) {
        println!("{line}");
    }

    fn ask(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input).is_err() {
            return String::new();
        }
        input.trim_end_matches(['\r', '\n']).to_string()
    }
}

/// Console that replays queued answers and records everything shown.
///
/// Once the queue runs dry every prompt gets an empty line.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
    prompts: usize,
}

impl ScriptedConsole {
    /// Creates a console answering prompts with `inputs` in order.
    #[must_use]
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: 0,
        }
    }

    /// Returns every line printed, prompts included.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Returns how many prompts were issued.
    #[must_use]
    pub const fn prompts(&self) -> usize {
        self.prompts
    }

    /// Returns whether any printed line contains `needle`.
    #[must_use]
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn ask(&mut self, prompt: &str) -> String {
        self.prompts += 1;
        self.output.push(prompt.to_string());
        self.inputs.pop_front().unwrap_or_default()
    }
}
