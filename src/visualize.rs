use std::fmt::Write;

use crate::command::Command;
use crate::rules::MAX_ROUNDS;
use crate::score::signed;
use crate::state::{FinalStanding, GamePhase, SessionView};

/// Customize snapshot rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_history: bool,
    pub show_colors: bool,
    /// Only print this many of the most recent rounds.
    pub history_limit: Option<usize>,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_history: true,
            show_colors: false,
            history_limit: None,
        }
    }
}

/// Leaderboard position marker: a star for the leader, the number otherwise.
pub fn rank_label(rank: usize) -> String {
    if rank == 1 {
        String::from("★")
    } else {
        rank.to_string()
    }
}

pub fn render_state(view: &SessionView) -> String {
    render_state_with_options(view, VisualOptions::default())
}

pub fn render_state_with_options(view: &SessionView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match view.phase {
        GamePhase::Setup => String::from("Setup"),
        GamePhase::InProgress => format!("Round {} of {MAX_ROUNDS}", view.current_round),
        GamePhase::Ended { winner } => {
            let name = view
                .players
                .get(winner)
                .map(|p| p.name.as_str())
                .unwrap_or("?");
            format!("Finished (winner: {name})")
        }
    };
    let _ = writeln!(out, "Game status: {status}");

    if matches!(view.phase, GamePhase::Setup) {
        if view.players.is_empty() {
            let _ = writeln!(out, "Players: (none)");
        } else {
            let _ = writeln!(out, "Players:");
            for player in &view.players {
                let _ = write!(out, "  [{}] {}", player.id, player.name);
                if options.show_colors {
                    let _ = write!(out, " ({})", player.color.primary.hex());
                }
                let _ = writeln!(out);
            }
        }
        if view.can_start {
            let _ = writeln!(out, "Ready to start.");
        }
        return out;
    }

    let _ = writeln!(out, "Leaderboard:");
    for entry in &view.leaderboard {
        let _ = write!(
            out,
            "  {:>2}  {:<16} {:>5}",
            rank_label(entry.rank),
            entry.name,
            entry.total_score
        );
        if options.show_colors {
            let _ = write!(out, "  {}", entry.color.primary.hex());
        }
        let _ = writeln!(out);
    }

    if options.show_history {
        let _ = writeln!(out, "History:");
        if view.history.is_empty() {
            let _ = writeln!(out, "  NO ROUNDS COMPLETED YET");
        }
        let limit = options.history_limit.unwrap_or(view.history.len());
        for round in view.history.iter().take(limit) {
            let _ = writeln!(out, "  R{} ROUND {}", round.round, round.round);
            for entry in &round.entries {
                let mark = if entry.hit_bet { "✓" } else { "✗" };
                let _ = writeln!(
                    out,
                    "    {mark} {:<16} BET {} · WON {}  {}",
                    entry.name,
                    entry.bet,
                    entry.tricks_won,
                    signed(entry.score)
                );
            }
        }
    }
    out
}

/// Winner banner followed by the full ranking.
pub fn render_standing(standing: &FinalStanding) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "*** {} WINS ***", standing.winner.name);
    let _ = writeln!(out, "{} POINTS", standing.winner.total_score);
    for entry in &standing.ranking {
        let position = if entry.rank == 1 {
            rank_label(1)
        } else {
            format!("{}.", entry.rank)
        };
        let _ = writeln!(
            out,
            "  {position:>3} {:<16} {:>5}",
            entry.name, entry.total_score
        );
    }
    out
}

pub fn describe_command(command: &Command) -> String {
    match command {
        Command::AddPlayer(name) => format!("Add player {name}"),
        Command::RemovePlayer(index) => format!("Remove player [{index}]"),
        Command::StartGame => String::from("Start game"),
        Command::AdvanceRound(entries) => {
            let parts = entries
                .iter()
                .map(|entry| {
                    let bet = entry.bet.map_or_else(|| String::from("-"), |v| v.to_string());
                    let won = entry
                        .tricks_won
                        .map_or_else(|| String::from("-"), |v| v.to_string());
                    format!("{bet}/{won}")
                })
                .collect::<Vec<_>>()
                .join(" ");
            format!("Score round (bet/won): {parts}")
        }
        Command::Reset => String::from("Reset session"),
    }
}
