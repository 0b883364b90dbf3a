//! Ordering transport options for comparison.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::TransportOption;

/// What the user wants to minimise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    /// Shortest duration first.
    #[default]
    Time,
    /// Cheapest average cost first.
    Cost,
    /// Lowest carbon impact first.
    Environmental,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::Time,
        SortCriterion::Cost,
        SortCriterion::Environmental,
    ];

    /// Label for sort controls.
    pub fn label(&self) -> &'static str {
        match self {
            SortCriterion::Time => "Time",
            SortCriterion::Cost => "Cost",
            SortCriterion::Environmental => "Eco-Friendly",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::Time => "time",
            SortCriterion::Cost => "cost",
            SortCriterion::Environmental => "environmental",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort criterion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort criterion: {0} (expected time, cost or environmental)")]
pub struct InvalidSortCriterion(String);

impl FromStr for SortCriterion {
    type Err = InvalidSortCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" => Ok(SortCriterion::Time),
            "cost" => Ok(SortCriterion::Cost),
            "environmental" => Ok(SortCriterion::Environmental),
            _ => Err(InvalidSortCriterion(s.to_string())),
        }
    }
}

/// Return the options ordered by `criterion`, ascending.
///
/// The sort is stable: options with equal keys keep their input order.
/// The input slice is left untouched.
pub fn sort_options(options: &[TransportOption], criterion: SortCriterion) -> Vec<TransportOption> {
    let mut sorted = options.to_vec();

    match criterion {
        SortCriterion::Time => sorted.sort_by_key(|o| o.duration()),
        SortCriterion::Cost => {
            sorted.sort_by(|a, b| a.cost().midpoint().total_cmp(&b.cost().midpoint()))
        }
        SortCriterion::Environmental => sorted.sort_by_key(|o| o.carbon_impact().rank()),
    }

    sorted
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{CarbonImpact, CostRange, TransportMode};
    use proptest::prelude::*;

    const MODES: [TransportMode; 5] = [
        TransportMode::Driving,
        TransportMode::Rideshare,
        TransportMode::Public,
        TransportMode::Walking,
        TransportMode::Auto,
    ];
    const IMPACTS: [CarbonImpact; 3] = [CarbonImpact::Low, CarbonImpact::Medium, CarbonImpact::High];

    fn arb_option() -> impl Strategy<Value = TransportOption> {
        (0usize..5, 0u32..60, 0u32..50, 0u32..50, 0usize..3).prop_map(
            |(mode, mins, min, spread, impact)| {
                TransportOption::new(
                    MODES[mode],
                    mins,
                    CostRange::new(min, min + spread).unwrap(),
                    IMPACTS[impact],
                )
            },
        )
    }

    fn key(option: &TransportOption, criterion: SortCriterion) -> f64 {
        match criterion {
            SortCriterion::Time => f64::from(option.duration()),
            SortCriterion::Cost => option.cost().midpoint(),
            SortCriterion::Environmental => f64::from(option.carbon_impact().rank()),
        }
    }

    proptest! {
        #[test]
        fn keys_are_non_decreasing(options in prop::collection::vec(arb_option(), 0..12)) {
            for criterion in SortCriterion::ALL {
                let sorted = sort_options(&options, criterion);
                prop_assert_eq!(sorted.len(), options.len());
                for pair in sorted.windows(2) {
                    prop_assert!(key(&pair[0], criterion) <= key(&pair[1], criterion));
                }
            }
        }

        #[test]
        fn ties_keep_input_order(options in prop::collection::vec(arb_option(), 0..12)) {
            for criterion in SortCriterion::ALL {
                // Reference: stably sort input positions by key.
                let mut positions: Vec<usize> = (0..options.len()).collect();
                positions.sort_by(|&a, &b| {
                    key(&options[a], criterion).total_cmp(&key(&options[b], criterion))
                });
                let expected: Vec<_> = positions.iter().map(|&i| options[i].clone()).collect();

                prop_assert_eq!(sort_options(&options, criterion), expected);
            }
        }

        #[test]
        fn low_impact_never_after_high(options in prop::collection::vec(arb_option(), 0..12)) {
            let sorted = sort_options(&options, SortCriterion::Environmental);
            let last_low = sorted.iter().rposition(|o| o.carbon_impact() == CarbonImpact::Low);
            let first_high = sorted.iter().position(|o| o.carbon_impact() == CarbonImpact::High);
            if let (Some(low), Some(high)) = (last_low, first_high) {
                prop_assert!(low < high);
            }
        }
    }
}
