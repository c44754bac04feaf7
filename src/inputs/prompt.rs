use std::io::{self, BufRead, Write};

use super::{EntrySource, InputReply};
use crate::round::RoundEntry;
use crate::rules::in_trick_range;
use crate::score::{round_score, signed};
use crate::state::SessionView;
use crate::visualize::render_state;

/// Interactive source that asks for every player's bet and tricks won.
pub struct PromptSource<R: BufRead, W: Write> {
    input: R,
    output: W,
    show_state: bool,
}

impl PromptSource<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

enum Field {
    Value(String),
    NewGame,
    Quit,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            show_state: false,
        }
    }

    /// Print the full snapshot before asking for a round.
    pub fn with_state(mut self, show_state: bool) -> Self {
        self.show_state = show_state;
        self
    }

    fn say(&mut self, text: &str) {
        if write!(self.output, "{text}")
            .and_then(|()| self.output.flush())
            .is_err()
        {
            eprintln!("failed to write prompt");
        }
    }

    fn read_field(&mut self, label: &str) -> Field {
        loop {
            self.say(label);
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Field::Quit,
                Ok(_) => {}
                Err(_) => {
                    eprintln!("failed to read input");
                    continue;
                }
            }
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                return Field::Quit;
            }
            if trimmed.eq_ignore_ascii_case("new") {
                return Field::NewGame;
            }
            if trimmed.eq_ignore_ascii_case("help") {
                self.say("Enter a number from 0 to 10, 'new' to start over or 'q' to quit.\n");
                continue;
            }
            return Field::Value(trimmed.to_string());
        }
    }

    /// Reads a yes/no answer; anything but `y`/`yes` means no.
    pub fn confirm(&mut self, question: &str) -> bool {
        self.say(&format!("{question} [y/N] "));
        let mut line = String::new();
        if self.input.read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

impl<R: BufRead, W: Write> EntrySource for PromptSource<R, W> {
    fn next_entries(&mut self, view: &SessionView) -> InputReply {
        if self.show_state {
            let text = render_state(view);
            self.say(&format!("{text}\n"));
        }
        self.say(&format!("=== Round {} ===\n", view.current_round));
        let mut entries = Vec::with_capacity(view.players.len());
        for player in &view.players {
            let bet = match self.read_field(&format!("{} bet: ", player.name)) {
                Field::Value(text) => text,
                Field::NewGame => return InputReply::NewGame,
                Field::Quit => return InputReply::Quit,
            };
            let won = match self.read_field(&format!("{} won: ", player.name)) {
                Field::Value(text) => text,
                Field::NewGame => return InputReply::NewGame,
                Field::Quit => return InputReply::Quit,
            };
            let entry = RoundEntry::from_text(&bet, &won);
            if let (Some(b), Some(w)) = (entry.bet, entry.tricks_won) {
                if in_trick_range(b) && in_trick_range(w) {
                    let score = round_score(b as u8, w as u8, view.current_round);
                    let total = player.total_score + score;
                    self.say(&format!("  {} -> TOTAL: {total}\n", signed(score)));
                }
            }
            entries.push(entry);
        }
        InputReply::Entries(entries)
    }

    fn confirm_reset(&mut self) -> bool {
        self.confirm("Start a new game? All scores will be reset.")
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.say(prompt);
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn ask(&mut self, question: &str) -> bool {
        self.confirm(question)
    }
}
