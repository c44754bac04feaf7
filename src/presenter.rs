use std::io::{self, Write};
use std::path::PathBuf;

use tracing::warn;

use crate::chart::{ChartOptions, render_to_path};
use crate::error::GameError;
use crate::graph::GraphLayout;
use crate::state::{FinalStanding, SessionView};
use crate::visualize::{VisualOptions, render_standing, render_state_with_options};

/// Receives snapshots after every mutation and the final standing at game end.
///
/// Implementations only display; they never change session state.
pub trait Presenter {
    fn show(&mut self, view: &SessionView);
    fn celebrate(&mut self, standing: &FinalStanding);
    fn notify(&mut self, error: &GameError);
}

/// Where and how the score graph is written after each update.
#[derive(Clone, Debug)]
pub struct ChartTarget {
    pub path: PathBuf,
    pub layout: GraphLayout,
    pub options: ChartOptions,
}

/// Prints text (or JSON) snapshots to a writer and optionally keeps a chart file current.
pub struct TerminalPresenter<W: Write> {
    out: W,
    visual: VisualOptions,
    json: bool,
    chart: Option<ChartTarget>,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            visual: VisualOptions::default(),
            json: false,
            chart: None,
        }
    }

    pub fn with_visual_options(mut self, visual: VisualOptions) -> Self {
        self.visual = visual;
        self
    }

    /// Emit snapshots as JSON lines instead of text.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_chart(mut self, chart: ChartTarget) -> Self {
        self.chart = Some(chart);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_chart(&self, view: &SessionView) {
        let Some(target) = &self.chart else {
            return;
        };
        let geometry = view.graph.plot(&target.layout);
        if let Err(err) = render_to_path(&target.path, &geometry, target.options) {
            warn!(path = %target.path.display(), error = %err, "failed to write score graph");
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show(&mut self, view: &SessionView) {
        let result = if self.json {
            serde_json::to_string(view)
                .map_err(io::Error::other)
                .and_then(|line| writeln!(self.out, "{line}"))
        } else {
            writeln!(
                self.out,
                "{}",
                render_state_with_options(view, self.visual)
            )
        };
        if let Err(err) = result {
            warn!(error = %err, "failed to write snapshot");
        }
        self.write_chart(view);
    }

    fn celebrate(&mut self, standing: &FinalStanding) {
        let result = if self.json {
            serde_json::to_string(standing)
                .map_err(io::Error::other)
                .and_then(|line| writeln!(self.out, "{line}"))
        } else {
            writeln!(self.out, "\n{}", render_standing(standing))
        };
        if let Err(err) = result {
            warn!(error = %err, "failed to write final standing");
        }
    }

    fn notify(&mut self, error: &GameError) {
        if let Err(err) = writeln!(self.out, "! {error}") {
            warn!(error = %err, "failed to write notification");
        }
    }
}
