//! Skull King scorekeeping engine: roster, round scoring, leaderboard,
//! history and a running score graph for one in-memory game session.

pub mod chart;
pub mod command;
pub mod error;
pub mod graph;
pub mod inputs;
pub mod palette;
pub mod presenter;
pub mod roster;
pub mod round;
pub mod rules;
pub mod score;
pub mod session;
pub mod state;
pub mod tracker;
pub mod views;
pub mod visualize;

pub use crate::chart::{ChartError, ChartFormat, ChartOptions, render_svg, render_to_file};
pub use crate::command::{Command, CommandOutcome};
pub use crate::error::{GameError, InvalidEntry};
pub use crate::graph::{GraphGeometry, GraphLayout, ScoreGraph, ScoreSeries};
pub use crate::inputs::{EntrySource, InputReply, PromptSource, RandomSource};
pub use crate::inputs::{create_source_from_spec, label_for_spec};
pub use crate::palette::{EmptyPalette, Palette, PlayerColor, Rgb};
pub use crate::presenter::{ChartTarget, Presenter, TerminalPresenter};
pub use crate::roster::{Player, PlayerId, Roster};
pub use crate::round::{RoundEntry, RoundResult};
pub use crate::score::{ScorePreview, round_score};
pub use crate::session::{RoundOutcome, Session, SessionBuilder};
pub use crate::state::{FinalStanding, GamePhase, PlayerView, SessionView};
pub use crate::tracker::run_tracker;
pub use crate::views::{HistoryEntry, HistoryRound, LeaderboardEntry};
pub use crate::visualize::{VisualOptions, describe_command, render_standing, render_state};
