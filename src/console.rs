/// Console reporting — prints contribution stats and a colored rendition of
/// the grid.  Each function receives a mutable writer and an immutable view
/// of the data; no logic is performed, only queued terminal commands.

use std::io::Write;

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::graph::ContributionGraph;

// Terminal rendition of the dark-mode cell palette; index = level.
const LEVEL_COLORS: [Color; 5] = [
    Color::Rgb { r: 45, g: 51, b: 59 },
    Color::Rgb { r: 14, g: 68, b: 41 },
    Color::Rgb { r: 0, g: 109, b: 50 },
    Color::Rgb { r: 38, g: 166, b: 65 },
    Color::Rgb { r: 57, g: 211, b: 83 },
];

/// Print username and contribution totals.
pub fn print_stats<W: Write>(out: &mut W, graph: &ContributionGraph) -> std::io::Result<()> {
    if !graph.username.is_empty() {
        out.queue(SetForegroundColor(Color::Cyan))?;
        out.queue(Print(format!("{}\n", graph.username)))?;
    }
    out.queue(SetForegroundColor(Color::Yellow))?;
    out.queue(Print(format!(
        "{} contributions across {} weeks\n",
        graph.total_contributions,
        graph.num_weeks()
    )))?;
    out.queue(ResetColor)?;
    out.flush()
}

/// Print the grid as colored cells, one terminal row per weekday.
pub fn print_graph<W: Write>(out: &mut W, graph: &ContributionGraph) -> std::io::Result<()> {
    let last = LEVEL_COLORS.len() - 1;
    for day in 0..graph.num_days() {
        for week in &graph.weeks {
            let level = (week.days[day].level.max(0) as usize).min(last);
            out.queue(SetForegroundColor(LEVEL_COLORS[level]))?;
            out.queue(Print("■ "))?;
        }
        out.queue(Print("\n"))?;
    }
    out.queue(ResetColor)?;
    out.flush()
}
