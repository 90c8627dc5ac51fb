/// Contribution-grid data model — the immutable input the whole run is
/// derived from.
///
/// The JSON shape matches the raw-data files: `weeks` is an ordered list of
/// weeks, each holding one record per day.  The simulation only ever reads
/// `level`; `count`, `date` and the top-level metadata are carried through
/// untouched for reporting.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Nominal grid width (weeks shown on a profile page).
pub const NUM_WEEKS: usize = 52;
/// Days per week, Sun-Sat.
pub const NUM_DAYS: usize = 7;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Day {
    pub level: i32,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Week {
    pub days: Vec<Day>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContributionGraph {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub total_contributions: i64,
    pub weeks: Vec<Week>,
}

impl ContributionGraph {
    /// Build a graph from week records, failing fast on malformed input.
    pub fn new(weeks: Vec<Week>) -> Result<Self> {
        let total = weeks
            .iter()
            .flat_map(|w| &w.days)
            .map(|d| d.count)
            .sum();
        let graph = ContributionGraph {
            username: String::new(),
            total_contributions: total,
            weeks,
        };
        graph.validate()?;
        Ok(graph)
    }

    /// Validation invariants: at least one week, every week the same length,
    /// no negative levels or counts.  No partial grid is ever produced.
    pub fn validate(&self) -> Result<()> {
        if self.weeks.is_empty() {
            return Err(Error::MalformedGrid("no weeks".into()));
        }
        let days = self.weeks[0].days.len();
        if days == 0 {
            return Err(Error::MalformedGrid("week 0 has no days".into()));
        }
        for (wi, week) in self.weeks.iter().enumerate() {
            if week.days.len() != days {
                return Err(Error::MalformedGrid(format!(
                    "week {} has {} days, expected {}",
                    wi,
                    week.days.len(),
                    days
                )));
            }
            for (di, day) in week.days.iter().enumerate() {
                if day.level < 0 {
                    return Err(Error::MalformedGrid(format!(
                        "negative level {} at week {}, day {}",
                        day.level, wi, di
                    )));
                }
                if day.count < 0 {
                    return Err(Error::MalformedGrid(format!(
                        "negative count {} at week {}, day {}",
                        day.count, wi, di
                    )));
                }
            }
        }
        Ok(())
    }

    /// Grid width in weeks (columns).
    pub fn num_weeks(&self) -> usize {
        self.weeks.len()
    }

    /// Grid height in days (rows).
    pub fn num_days(&self) -> usize {
        self.weeks.first().map_or(0, |w| w.days.len())
    }

    /// Intensity level of one cell.  Pure; errors on out-of-bounds indices.
    pub fn level_at(&self, week: usize, day: usize) -> Result<u32> {
        let (weeks, days) = (self.num_weeks(), self.num_days());
        if week >= weeks || day >= days {
            return Err(Error::OutOfRange {
                week,
                day,
                weeks,
                days,
            });
        }
        Ok(self.weeks[week].days[day].level as u32)
    }

    /// Load and validate a graph from a raw-data JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let graph: ContributionGraph = serde_json::from_str(&text)
            .map_err(|e| Error::MalformedGrid(format!("invalid JSON: {e}")))?;
        graph.validate()?;
        Ok(graph)
    }

    /// Save the graph as a raw-data JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| Error::MalformedGrid(format!("serialize failed: {e}")))?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Generate a plausible 52-week grid for running without a data file.
    /// Weekdays contribute more often than weekends.
    pub fn demo(rng: &mut impl Rng) -> Self {
        let weeks: Vec<Week> = (0..NUM_WEEKS)
            .map(|_| Week {
                days: (0..NUM_DAYS)
                    .map(|day| {
                        let weekend = day == 0 || day == NUM_DAYS - 1;
                        let chance = if weekend { 0.25 } else { 0.6 };
                        let level = if rng.gen_bool(chance) {
                            rng.gen_range(1..=4)
                        } else {
                            0
                        };
                        Day {
                            level,
                            count: level as i64 * 2,
                            date: String::new(),
                        }
                    })
                    .collect(),
            })
            .collect();
        let total = weeks.iter().flat_map(|w| &w.days).map(|d| d.count).sum();
        ContributionGraph {
            username: "demo".into(),
            total_contributions: total,
            weeks,
        }
    }
}
