// src/chart.rs
use serde::{Deserialize, Serialize};

/// Slice weight shared by every participant. Only equal-probability
/// visualization matters, so the actual number is arbitrary.
pub const SLICE_VALUE: f64 = 10.0;

/// Fraction of the radius the winning slice is pulled out from the center.
pub const WINNER_PULL: f64 = 0.2;

/// Hole size as a fraction of the radius; turns the pie into a donut.
pub const HOLE_FRACTION: f64 = 0.3;

/// Fixed color theme, cycled across slices in participant order.
pub const PALETTE: [&str; 5] = ["#FFC300", "#FF5733", "#C70039", "#900C3F", "#581845"];

/// Declarative description of the annotated donut chart, handed to the
/// rendering layer. Derived from the participant list and the winner,
/// never mutated; rebuilt whenever the winner changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub pull: Vec<f64>,
    pub hole_fraction: f64,
    pub colors: Vec<String>,
    pub title: String,
    pub center_annotation: String,
}

impl ChartSpec {
    /// Builds the chart description for a finished spin.
    ///
    /// `winner` is expected to be a member of `participants`; exactly that
    /// slice gets a nonzero pull. Colors wrap around the palette with a
    /// modulo index when there are more than five participants.
    pub fn build(participants: &[String], winner: &str) -> Self {
        let winner_index = participants.iter().position(|name| name == winner);

        Self {
            labels: participants.to_vec(),
            values: vec![SLICE_VALUE; participants.len()],
            pull: (0..participants.len())
                .map(|i| if Some(i) == winner_index { WINNER_PULL } else { 0.0 })
                .collect(),
            hole_fraction: HOLE_FRACTION,
            colors: (0..participants.len())
                .map(|i| PALETTE[i % PALETTE.len()].to_string())
                .collect(),
            title: format!("✨ Today's winner: {} ✨", winner),
            center_annotation: "Result".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exactly_one_slice_is_pulled() {
        let spec = ChartSpec::build(&names(&["Alice", "Bob", "Carol"]), "Bob");

        assert_eq!(spec.pull, vec![0.0, WINNER_PULL, 0.0]);
        assert_eq!(spec.pull.iter().filter(|p| **p > 0.0).count(), 1);
    }

    #[test]
    fn all_slices_share_the_same_value() {
        let spec = ChartSpec::build(&names(&["Alice", "Bob", "Carol"]), "Bob");

        assert_eq!(spec.labels, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(spec.values, vec![SLICE_VALUE; 3]);
        assert_eq!(spec.hole_fraction, HOLE_FRACTION);
    }

    #[test]
    fn title_names_the_winner() {
        let spec = ChartSpec::build(&names(&["Alice", "Bob"]), "Alice");
        assert!(spec.title.contains("Alice"));
    }

    #[test]
    fn palette_wraps_past_five_slices() {
        let participants = names(&["a", "b", "c", "d", "e", "f", "g"]);
        let spec = ChartSpec::build(&participants, "a");

        assert_eq!(spec.colors.len(), 7);
        assert_eq!(spec.colors[5], PALETTE[0]);
        assert_eq!(spec.colors[6], PALETTE[1]);
    }

    #[test]
    fn duplicate_winner_pulls_the_first_occurrence() {
        let spec = ChartSpec::build(&names(&["Bob", "Alice", "Bob"]), "Bob");
        assert_eq!(spec.pull, vec![WINNER_PULL, 0.0, 0.0]);
    }
}
