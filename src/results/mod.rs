//! Display-layer derivations for a finished search: podium split, top
//! amenities and score tiers. No scoring happens here.

use crate::domain::{AmenityCounts, AmenityType, NeighborhoodResult, SearchResult};

pub const PODIUM_SIZE: usize = 3;
pub const PODIUM_AMENITIES: usize = 3;
pub const LIST_AMENITIES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodiumPosition {
    First,
    Second,
    Third,
}

impl PodiumPosition {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PodiumPosition::First),
            1 => Some(PodiumPosition::Second),
            2 => Some(PodiumPosition::Third),
            _ => None,
        }
    }

    pub fn rank(self) -> usize {
        match self {
            PodiumPosition::First => 1,
            PodiumPosition::Second => 2,
            PodiumPosition::Third => 3,
        }
    }
}

/// Four color bands over the 0..=100 match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::Excellent
        } else if score >= 60.0 {
            ScoreTier::Good
        } else if score >= 40.0 {
            ScoreTier::Fair
        } else {
            ScoreTier::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PodiumEntry<'a> {
    pub position: PodiumPosition,
    pub neighborhood: &'a NeighborhoodResult,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub neighborhood: &'a NeighborhoodResult,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView<'a> {
    Empty,
    Ranked {
        podium: Vec<PodiumEntry<'a>>,
        others: Vec<RankedEntry<'a>>,
    },
}

impl<'a> ResultsView<'a> {
    /// Ranks 1..=3 go to the podium, the rest to the list, both in input order.
    pub fn from_result(result: &'a SearchResult) -> Self {
        if result.is_empty() {
            return ResultsView::Empty;
        }

        let split = result.neighborhoods.len().min(PODIUM_SIZE);
        let (top, rest) = result.neighborhoods.split_at(split);

        let podium = top
            .iter()
            .enumerate()
            .filter_map(|(i, neighborhood)| {
                PodiumPosition::from_index(i).map(|position| PodiumEntry {
                    position,
                    neighborhood,
                })
            })
            .collect();

        let others = rest
            .iter()
            .enumerate()
            .map(|(i, neighborhood)| RankedEntry {
                rank: PODIUM_SIZE + i + 1,
                neighborhood,
            })
            .collect();

        ResultsView::Ranked { podium, others }
    }
}

/// Highest counts first. The sort is stable, so equal counts keep the
/// order the backend sent them in.
pub fn top_amenities(counts: &AmenityCounts, n: usize) -> Vec<(AmenityType, u32)> {
    let mut ranked: Vec<_> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Scores print without decimals, like the backend's integer scores.
pub fn format_score(score: f64) -> String {
    format!("{:.0}", score)
}
