//! Team-wide stress statistics derived from a member snapshot.
//!
//! Nothing here holds state; a summary is recomputed from `list_members`
//! output whenever it is needed.

use crate::domain::entities::TeamMember;
use serde::Serialize;

/// Classification of a single stress level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressBand {
    Low,
    Moderate,
    High,
}

impl StressBand {
    pub fn of(stress_level: i64) -> Self {
        if stress_level <= 3 {
            StressBand::Low
        } else if stress_level <= 6 {
            StressBand::Moderate
        } else {
            StressBand::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub low_count: usize,
    pub moderate_count: usize,
    pub high_count: usize,
    pub total_count: usize,
    /// Mean stress level rounded to one decimal, 0.0 for an empty team.
    pub average_stress_level: f64,
    pub low_percentage: f64,
    pub moderate_percentage: f64,
    pub high_percentage: f64,
}

pub fn summarize(members: &[TeamMember]) -> TeamSummary {
    let (mut low, mut moderate, mut high) = (0usize, 0usize, 0usize);
    let mut sum: i64 = 0;

    for member in members {
        match StressBand::of(member.stress_level) {
            StressBand::Low => low += 1,
            StressBand::Moderate => moderate += 1,
            StressBand::High => high += 1,
        }
        sum += member.stress_level;
    }

    let total = members.len();
    let share = |count: usize| {
        if total == 0 {
            0.0
        } else {
            round_to_tenth(count as f64 * 100.0 / total as f64)
        }
    };

    let average_stress_level = if total == 0 {
        0.0
    } else {
        round_to_tenth(sum as f64 / total as f64)
    };

    TeamSummary {
        low_count: low,
        moderate_count: moderate,
        high_count: high,
        total_count: total,
        average_stress_level,
        low_percentage: share(low),
        moderate_percentage: share(moderate),
        high_percentage: share(high),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn member(id: i64, stress_level: i64) -> TeamMember {
        TeamMember {
            id,
            name: format!("Member {}", id),
            role: "Engineer".to_string(),
            stress_level,
            last_update: Utc::now(),
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(StressBand::of(1), StressBand::Low);
        assert_eq!(StressBand::of(3), StressBand::Low);
        assert_eq!(StressBand::of(4), StressBand::Moderate);
        assert_eq!(StressBand::of(6), StressBand::Moderate);
        assert_eq!(StressBand::of(7), StressBand::High);
        assert_eq!(StressBand::of(10), StressBand::High);
    }

    #[test]
    fn test_summarize_empty_team() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.low_count + summary.moderate_count + summary.high_count, 0);
        assert_eq!(summary.average_stress_level, 0.0);
        assert!(!summary.average_stress_level.is_nan());
        assert_eq!(summary.high_percentage, 0.0);
    }

    #[test]
    fn test_summarize_seed_like_roster() {
        let members: Vec<TeamMember> = [5, 3, 5, 2, 4, 6]
            .iter()
            .enumerate()
            .map(|(i, level)| member(i as i64 + 1, *level))
            .collect();

        let summary = summarize(&members);
        assert_eq!(summary.low_count, 2);
        assert_eq!(summary.moderate_count, 4);
        assert_eq!(summary.high_count, 0);
        assert_eq!(summary.total_count, 6);
        // 25 / 6 = 4.1666...
        assert_eq!(summary.average_stress_level, 4.2);
        assert_eq!(summary.low_percentage, 33.3);
        assert_eq!(summary.moderate_percentage, 66.7);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let json = serde_json::to_value(summarize(&[member(1, 9)])).unwrap();
        assert_eq!(json["highCount"], 1);
        assert_eq!(json["totalCount"], 1);
        assert_eq!(json["averageStressLevel"], 9.0);
    }

    proptest! {
        #[test]
        fn prop_every_member_lands_in_one_band(levels in prop::collection::vec(1i64..=10, 0..64)) {
            let members: Vec<TeamMember> = levels
                .iter()
                .enumerate()
                .map(|(i, level)| member(i as i64 + 1, *level))
                .collect();

            let summary = summarize(&members);

            prop_assert_eq!(summary.total_count, members.len());
            prop_assert_eq!(
                summary.low_count + summary.moderate_count + summary.high_count,
                summary.total_count
            );
            prop_assert_eq!(summary.low_count, levels.iter().filter(|l| **l <= 3).count());
            prop_assert_eq!(summary.high_count, levels.iter().filter(|l| **l >= 7).count());
            prop_assert!(!summary.average_stress_level.is_nan());
            if !members.is_empty() {
                prop_assert!(summary.average_stress_level >= 1.0);
                prop_assert!(summary.average_stress_level <= 10.0);
            }
        }
    }
}
