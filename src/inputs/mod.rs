pub mod prompt;
pub mod random;
pub mod registry;

pub use prompt::PromptSource;
pub use random::RandomSource;
pub use registry::{create_source_from_spec, label_for_spec};

use crate::round::RoundEntry;
use crate::state::SessionView;

/// What an input source hands back when asked for a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputReply {
    /// One entry per player, in roster order.
    Entries(Vec<RoundEntry>),
    /// The user asked to abandon this game and start over.
    NewGame,
    Quit,
}

/// Interface for anything that supplies bets and tricks won for a round.
pub trait EntrySource {
    fn next_entries(&mut self, view: &SessionView) -> InputReply;

    /// Asked before a destructive reset; `true` confirms.
    fn confirm_reset(&mut self) -> bool {
        true
    }

    /// Reads one trimmed line of free text, e.g. a player name. `None` when
    /// the source has no line input or the input is exhausted.
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        None
    }

    /// Yes/no question; sources without a user answer no.
    fn ask(&mut self, _question: &str) -> bool {
        false
    }
}
