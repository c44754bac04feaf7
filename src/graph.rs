//! Cumulative score trajectories and their plot geometry.
//!
//! The graph is a pure function of the roster and the round counter. It can
//! be recomputed at any time, e.g. whenever the drawing surface is resized.

use serde::{Deserialize, Serialize};

use crate::palette::PlayerColor;
use crate::roster::{PlayerId, Roster};

/// The vertical axis always spans at least `-AXIS_FLOOR..=AXIS_FLOOR`.
pub const AXIS_FLOOR: i32 = 50;
/// Number of equal bands between horizontal gridlines.
pub const GRID_DIVISIONS: usize = 4;
/// Shown instead of a graph until the first round has been scored.
pub const PLACEHOLDER: &str = "SCORE DATA WILL APPEAR AFTER ROUND 1";

/// Blank space between the drawing surface edge and the plot area, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Size of the drawing surface.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphLayout {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl GraphLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    fn plot_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    fn plot_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }
}

impl Default for GraphLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 320.0,
            padding: Padding {
                top: 40.0,
                right: 30.0,
                bottom: 50.0,
                left: 50.0,
            },
        }
    }
}

/// Cumulative scores for one player: index 0 is the 0 before round 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSeries {
    pub player: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    pub scores: Vec<i32>,
}

/// Sample data and axis bounds for the running score graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreGraph {
    pub series: Vec<ScoreSeries>,
    /// Number of samples per series; equals the current round counter.
    pub samples: usize,
    pub max_score: i32,
    pub min_score: i32,
    pub range: i32,
}

impl ScoreGraph {
    pub fn from_roster(roster: &Roster, current_round: u8) -> Self {
        let samples = usize::from(current_round.max(1));
        let series: Vec<ScoreSeries> = roster
            .players()
            .iter()
            .enumerate()
            .map(|(id, player)| {
                let mut scores = player.cumulative_scores();
                scores.truncate(samples);
                ScoreSeries {
                    player: id,
                    name: player.name().to_string(),
                    color: roster.color_of(player),
                    scores,
                }
            })
            .collect();

        let all_scores = || series.iter().flat_map(|s| s.scores.iter().copied());
        let max_score = all_scores().fold(AXIS_FLOOR, i32::max);
        let min_score = all_scores().fold(-AXIS_FLOOR, i32::min);
        let range = match max_score - min_score {
            0 => 100,
            range => range,
        };

        Self {
            series,
            samples,
            max_score,
            min_score,
            range,
        }
    }

    /// True until at least one round has been scored.
    pub fn is_empty(&self) -> bool {
        self.samples < 2
    }

    /// Vertical position of `value` as a fraction of the plot height from the top.
    pub fn fraction_from_top(&self, value: f64) -> f64 {
        1.0 - (value - f64::from(self.min_score)) / f64::from(self.range)
    }

    /// Value printed beside gridline `index` (0 is the top line).
    pub fn gridline_value(&self, index: usize) -> i32 {
        let value = f64::from(self.max_score)
            - f64::from(self.range) / GRID_DIVISIONS as f64 * index as f64;
        // Halves round toward positive infinity.
        (value + 0.5).floor() as i32
    }

    /// Maps every sample onto `layout` in pixel coordinates.
    pub fn plot(&self, layout: &GraphLayout) -> GraphGeometry {
        if self.is_empty() {
            return GraphGeometry {
                width: layout.width,
                height: layout.height,
                placeholder: Some(PLACEHOLDER.to_string()),
                lines: Vec::new(),
                gridlines: Vec::new(),
                zero_line: None,
                x_labels: Vec::new(),
                y_labels: Vec::new(),
                plot_left: layout.padding.left,
                plot_right: layout.width - layout.padding.right,
            };
        }

        let pad = layout.padding;
        let step = layout.plot_width() / (self.samples - 1) as f64;
        let x_at = |index: usize| pad.left + step * index as f64;
        let y_at = |value: f64| pad.top + layout.plot_height() * self.fraction_from_top(value);

        let lines = self
            .series
            .iter()
            .map(|series| PlotLine {
                player: series.player,
                color: series.color,
                points: series
                    .scores
                    .iter()
                    .enumerate()
                    .map(|(index, &score)| (x_at(index), y_at(f64::from(score))))
                    .collect(),
            })
            .collect();

        let band = layout.plot_height() / GRID_DIVISIONS as f64;
        let gridlines: Vec<f64> = (0..=GRID_DIVISIONS)
            .map(|index| pad.top + band * index as f64)
            .collect();

        let x_labels = (0..self.samples)
            .map(|index| AxisLabel {
                text: format!("R{index}"),
                x: x_at(index),
                y: layout.height - pad.bottom + 20.0,
            })
            .collect();

        let y_labels = gridlines
            .iter()
            .enumerate()
            .map(|(index, &y)| AxisLabel {
                text: self.gridline_value(index).to_string(),
                x: pad.left - 12.0,
                y: y + 4.0,
            })
            .collect();

        GraphGeometry {
            width: layout.width,
            height: layout.height,
            placeholder: None,
            lines,
            gridlines,
            zero_line: Some(y_at(0.0)),
            x_labels,
            y_labels,
            plot_left: pad.left,
            plot_right: layout.width - pad.right,
        }
    }
}

/// Polyline for one player; each point also carries a marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotLine {
    pub player: PlayerId,
    pub color: PlayerColor,
    pub points: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Everything needed to paint the graph, in pixel coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphGeometry {
    pub width: f64,
    pub height: f64,
    pub placeholder: Option<String>,
    pub lines: Vec<PlotLine>,
    /// Y coordinates of the horizontal gridlines, top to bottom.
    pub gridlines: Vec<f64>,
    /// Y coordinate of the dashed reference line at score 0.
    pub zero_line: Option<f64>,
    pub x_labels: Vec<AxisLabel>,
    pub y_labels: Vec<AxisLabel>,
    pub plot_left: f64,
    pub plot_right: f64,
}
