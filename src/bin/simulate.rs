use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use skullscore::{
    ChartFormat, ChartOptions, GraphLayout, RandomSource, RoundOutcome, Session, render_standing,
    render_to_file,
};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Play Skull King games with random rounds and summarize the results."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 200)]
    games: usize,

    /// Base RNG seed (per-game seeds are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of generated players when no names are given
    #[arg(short = 'n', long = "num-players", default_value_t = 4)]
    num_players: usize,

    /// Output chart of the last game's scores (png or svg)
    #[arg(short = 'o', long = "out", default_value = "scores.png")]
    out: PathBuf,

    /// Explicit output format (inferred from --out when omitted)
    #[arg(long = "format", value_enum)]
    format: Option<ChartFormat>,

    /// Show a textual summary only (no chart)
    #[arg(long = "no-chart", action = ArgAction::SetTrue)]
    no_chart: bool,

    /// Chart width in pixels
    #[arg(long = "width", default_value_t = 1000)]
    width: u32,

    /// Chart height in pixels
    #[arg(long = "height", default_value_t = 400)]
    height: u32,

    /// Enable verbose logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Player names (at least 2); generated when omitted
    players: Vec<String>,
}

/// Aggregated results for one seat.
#[derive(Default)]
struct SeatStats {
    wins: usize,
    total_points: i64,
    best: Option<i32>,
    exact_bets: usize,
    rounds: usize,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let names: Vec<String> = if args.players.is_empty() {
        (1..=args.num_players).map(|i| format!("Player {i}")).collect()
    } else {
        args.players.clone()
    };
    if args.games == 0 {
        return Err("games must be positive".into());
    }

    let mut stats: Vec<SeatStats> = names.iter().map(|_| SeatStats::default()).collect();
    let mut last_game: Option<Session> = None;

    for game_idx in 0..args.games {
        let mut session = Session::builder()
            .with_players(names.iter().cloned())
            .started()
            .build()?;
        let mut source = RandomSource::new(StdRng::seed_from_u64(mix_seed(
            args.seed,
            game_idx as u64,
        )));

        let standing = loop {
            let entries = source.deal(names.len(), session.current_round());
            if let RoundOutcome::GameEnded(standing) = session.advance_round(&entries)? {
                break standing;
            }
        };
        debug!(game = game_idx, winner = %standing.winner.name, "game finished");

        stats[standing.winner.player].wins += 1;
        for (seat, player) in session.players().iter().enumerate() {
            let seat_stats = &mut stats[seat];
            seat_stats.total_points += i64::from(player.total_score());
            seat_stats.best = Some(
                seat_stats
                    .best
                    .map_or(player.total_score(), |best| best.max(player.total_score())),
            );
            seat_stats.exact_bets += player.rounds().iter().filter(|r| r.hit_bet()).count();
            seat_stats.rounds += player.rounds().len();
        }
        last_game = Some(session);
    }
    info!(games = args.games, "simulation complete");

    println!("Results over {} games:", args.games);
    for (name, seat) in names.iter().zip(&stats) {
        let win_rate = seat.wins as f64 / args.games as f64 * 100.0;
        let avg_points = seat.total_points as f64 / args.games as f64;
        let hit_rate = if seat.rounds > 0 {
            seat.exact_bets as f64 / seat.rounds as f64 * 100.0
        } else {
            0.0
        };
        println!(
            "  {name:<12}  wins {:>5} ({win_rate:>6.2}%)  avg pts {avg_points:>8.2}  best {:>5}  exact bets {hit_rate:>6.2}%",
            seat.wins,
            seat.best.unwrap_or(0),
        );
    }

    let Some(session) = last_game else {
        return Ok(());
    };
    if let Some(standing) = session.final_standing() {
        println!("\nLast game:\n{}", render_standing(&standing));
    }

    if !args.no_chart {
        let format = args
            .format
            .or_else(|| ChartFormat::from_path(&args.out))
            .unwrap_or(ChartFormat::Png);
        let layout = GraphLayout::new(f64::from(args.width), f64::from(args.height));
        let geometry = session.score_graph().plot(&layout);
        render_to_file(&args.out, format, &geometry, ChartOptions::default())?;
        println!("Chart written to {}", args.out.display());
    }
    Ok(())
}

fn mix_seed(base: u64, game: u64) -> u64 {
    // Simple xorshift-style mix so neighbouring games get unrelated streams.
    let mut z = base ^ game.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}
