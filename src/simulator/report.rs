//! Simulation report generation.

use super::runner::{rank, Tally};
use crate::board::RoundResult;
use crate::camel::CamelColor;
use crossterm::style::Stylize;
use std::time::Duration;

/// Probability that one camel leads (next turn) or wins (final turn).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CamelStat {
    pub camel: CamelColor,
    pub win_probability: f64,
}

/// Aggregated results from many simulated races.
#[derive(Debug, Clone)]
pub struct SimulatorOutput {
    /// Who leads after the next leg, highest probability first
    pub next_turn_stats: Vec<CamelStat>,
    /// Who wins the race, highest probability first
    pub final_turn_stats: Vec<CamelStat>,
    pub iteration_count: u32,
    pub simulation_duration: Duration,
    /// Mean race length in legs
    pub avg_legs: f64,
}

impl SimulatorOutput {
    pub fn from_tally(tally: &Tally, iteration_count: u32, simulation_duration: Duration) -> Self {
        Self {
            next_turn_stats: rank(&tally.next_turn, iteration_count),
            final_turn_stats: rank(&tally.final_turn, iteration_count),
            iteration_count,
            simulation_duration,
            avg_legs: tally.total_legs as f64 / iteration_count.max(1) as f64,
        }
    }

    pub fn next_turn_probability(&self, camel: CamelColor) -> f64 {
        probability_of(&self.next_turn_stats, camel)
    }

    pub fn final_turn_probability(&self, camel: CamelColor) -> f64 {
        probability_of(&self.final_turn_stats, camel)
    }

    /// Generate a text report. `colored` paints each camel in its own color.
    pub fn to_text(&self, colored: bool) -> String {
        let rule = "-----------------------------------------------";
        let gray = |s: String| if colored { s.dark_grey().to_string() } else { s };

        let mut report = String::new();
        report.push_str(&gray(rule.to_string()));
        report.push('\n');
        report.push_str(&gray(format!(
            "Finished simulating {} games in {}ms (avg {:.1} legs per race)",
            self.iteration_count,
            self.simulation_duration.as_millis(),
            self.avg_legs
        )));
        report.push_str("\n\n");

        report.push_str("Next turn prediction:\n");
        push_stats(&mut report, &self.next_turn_stats, colored);
        report.push('\n');

        report.push_str("Final turn prediction:\n");
        push_stats(&mut report, &self.final_turn_stats, colored);
        report.push('\n');

        report.push_str(&gray(rule.to_string()));
        report.push('\n');
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn probability_of(stats: &[CamelStat], camel: CamelColor) -> f64 {
    stats
        .iter()
        .find(|s| s.camel == camel)
        .map(|s| s.win_probability)
        .unwrap_or(0.0)
}

/// Percentage rounded to two decimals, e.g. 0.12346 -> "12.35%".
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

fn push_stats(report: &mut String, stats: &[CamelStat], colored: bool) {
    for stat in stats {
        let line = format!("{}:\t{}", stat.camel, format_percent(stat.win_probability));
        if colored {
            report.push_str(&line.with(stat.camel.terminal_color()).to_string());
        } else {
            report.push_str(&line);
        }
        report.push('\n');
    }
}

/// Pretty JSON dump of one race, leg by leg, for eyeballing a single run.
pub fn rounds_to_json(rounds: &[RoundResult]) -> String {
    serde_json::to_string_pretty(rounds).unwrap_or_else(|_| "[]".to_string())
}

impl serde::Serialize for SimulatorOutput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimulatorOutput", 5)?;
        state.serialize_field("iteration_count", &self.iteration_count)?;
        state.serialize_field(
            "simulation_duration_ms",
            &(self.simulation_duration.as_millis() as u64),
        )?;
        state.serialize_field("avg_legs", &self.avg_legs)?;
        state.serialize_field("next_turn_stats", &self.next_turn_stats)?;
        state.serialize_field("final_turn_stats", &self.final_turn_stats)?;
        state.end()
    }
}
