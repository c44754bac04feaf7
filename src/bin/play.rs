use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use skullscore::{
    ChartFormat, ChartOptions, ChartTarget, GraphLayout, Session, TerminalPresenter,
    VisualOptions, create_source_from_spec, label_for_spec, run_tracker,
};

const DEFAULT_SEED: u64 = 0x5EED_5C0E_u64;

#[derive(Parser, Debug)]
#[command(name = "play", about = "Keep score for a game of Skull King.")]
struct Args {
    /// Round input source: prompt or random[:seed]
    #[arg(short = 'i', long = "input", default_value = "prompt")]
    input: String,

    /// Seed for the random input source
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Keep a score graph (png or svg) up to date after every round
    #[arg(short = 'o', long = "graph")]
    graph: Option<PathBuf>,

    /// Graph width in pixels
    #[arg(long = "width", default_value_t = 800)]
    width: u32,

    /// Graph height in pixels
    #[arg(long = "height", default_value_t = 320)]
    height: u32,

    /// Skip axis labels in the graph (useful where no fonts are installed)
    #[arg(long = "no-labels", action = ArgAction::SetTrue)]
    no_labels: bool,

    /// Print snapshots as JSON lines instead of text
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Only print this many recent rounds of history
    #[arg(long = "history")]
    history: Option<usize>,

    /// Show player colors next to names
    #[arg(long = "colors", action = ArgAction::SetTrue)]
    colors: bool,

    /// Enable verbose logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Player names; prompted for when omitted
    players: Vec<String>,
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
    if let Some(path) = &args.graph {
        if ChartFormat::from_path(path).is_none() {
            return Err(format!("graph output must end in .png or .svg: {}", path.display()).into());
        }
    }
    let interactive = label_for_spec(&args.input) == "prompt";
    if !interactive && args.players.is_empty() {
        return Err("non-interactive input needs player names on the command line".into());
    }

    let mut source = create_source_from_spec(&args.input, args.seed)?;
    let mut presenter = TerminalPresenter::stdout()
        .with_json(args.json)
        .with_visual_options(VisualOptions {
            show_history: true,
            show_colors: args.colors,
            history_limit: args.history,
        });
    if let Some(path) = args.graph.clone() {
        presenter = presenter.with_chart(ChartTarget {
            path,
            layout: GraphLayout::new(f64::from(args.width), f64::from(args.height)),
            options: ChartOptions {
                draw_labels: !args.no_labels,
            },
        });
    }

    let mut session = Session::new();
    run_tracker(&mut session, source.as_mut(), &mut presenter, &args.players)?;
    Ok(())
}
