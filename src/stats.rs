//! Base composition statistics.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::model::{BaseCounts, Sequence};
use crate::validate::{validate, ValidateResult};

/// Timestamp pattern used in reports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Statistics for one sequence, as persisted in a JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    /// Creation instant, local time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    /// Number of bases
    pub length: usize,
    /// Percentage of G and C, rounded to 2 decimals
    pub gc_percentage: f64,
    /// Per-base counts
    pub counts: BaseCounts,
}

/// Computes statistics, timestamped with the current local time.
///
/// The input is validated again, so any failure of
/// [`validate`] is returned unchanged.
pub fn compute_stats(sequence: &str) -> ValidateResult<StatsReport> {
    compute_stats_at(sequence, &Local::now())
}

/// Same as [`compute_stats`] with an explicit timestamp.
pub fn compute_stats_at<Tz>(sequence: &str, at: &DateTime<Tz>) -> ValidateResult<StatsReport>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let seq = validate(sequence)?;
    Ok(stats_for(&seq, at.format(TIMESTAMP_FORMAT).to_string()))
}

fn stats_for(seq: &Sequence, timestamp: String) -> StatsReport {
    let counts = BaseCounts::from_sequence(seq);
    let length = seq.len();
    StatsReport {
        timestamp,
        length,
        gc_percentage: gc_percentage(counts.gc(), length),
        counts,
    }
}

/// `gc / length * 100` rounded to 2 decimals; 0 for an empty sequence.
pub fn gc_percentage(gc: usize, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    round2(gc as f64 / length as f64 * 100.0)
}

/// Rounds to 2 decimals, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    use crate::validate::InvalidSequence;

    #[test]
    fn test_gc_only() {
        let stats = compute_stats("GGCC").unwrap();
        assert_eq!(stats.length, 4);
        assert_eq!(stats.gc_percentage, 100.0);
        let expected = BaseCounts {
            a: 0,
            c: 2,
            g: 2,
            t: 0,
            u: 0,
            n: 0,
        };
        assert_eq!(stats.counts, expected);
    }

    #[test]
    fn test_gc_rounding() {
        // 1/3 -> 33.33
        assert_eq!(compute_stats("GAA").unwrap().gc_percentage, 33.33);
        // 2/3 -> 66.67
        assert_eq!(compute_stats("GCA").unwrap().gc_percentage, 66.67);
        assert_eq!(compute_stats("ATUN").unwrap().gc_percentage, 0.0);
    }

    #[test]
    fn test_gc_ties_round_to_even() {
        let with_gc = |gc: usize| format!("{}{}", "G".repeat(gc), "A".repeat(32 - gc));
        // 3.125, 15.625 and 9.375 are exact ties
        assert_eq!(compute_stats(&with_gc(1)).unwrap().gc_percentage, 3.12);
        assert_eq!(compute_stats(&with_gc(5)).unwrap().gc_percentage, 15.62);
        assert_eq!(compute_stats(&with_gc(3)).unwrap().gc_percentage, 9.38);
        assert_eq!(gc_percentage(1, 8), 12.5);
    }

    #[test]
    fn test_zero_length_guard() {
        assert_eq!(gc_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_validation_is_propagated() {
        assert_eq!(compute_stats("  "), Err(InvalidSequence::Empty));
        assert!(matches!(
            compute_stats("ACGZ"),
            Err(InvalidSequence::InvalidBases(_))
        ));
    }

    #[test]
    fn test_raw_input_is_cleaned() {
        let stats = compute_stats("gg cc\n").unwrap();
        assert_eq!(stats.length, 4);
        assert_eq!(stats.counts.g, 2);
    }

    #[test]
    fn test_timestamp_format() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 2))
            .unwrap()
            .and_utc();
        let stats = compute_stats_at("ACGT", &at).unwrap();
        assert_eq!(stats.timestamp, "2024-03-07 09:05:02");
    }

    #[test]
    fn test_local_timestamp_shape() {
        let stats = compute_stats("A").unwrap();
        assert_eq!(stats.timestamp.len(), 19);
        assert_eq!(&stats.timestamp[4..5], "-");
        assert_eq!(&stats.timestamp[10..11], " ");
        assert_eq!(&stats.timestamp[13..14], ":");
    }

    proptest! {
        #[test]
        fn counts_sum_to_length(seq in "[ACGTUN]{1,200}") {
            let stats = compute_stats(&seq).unwrap();
            prop_assert_eq!(stats.counts.total(), stats.length);
            prop_assert!(stats.gc_percentage >= 0.0 && stats.gc_percentage <= 100.0);
        }
    }
}
