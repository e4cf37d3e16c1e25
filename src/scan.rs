use crate::record::{DailyRecord, PairResult, PeriodResult};

/// Which way a contiguous-extremum scan pushes the running sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Gain,
    Loss,
}

impl Direction {
    /// True when `sum` still moves in this direction (strictly).
    fn extends(self, sum: f64) -> bool {
        match self {
            Direction::Gain => sum > 0.0,
            Direction::Loss => sum < 0.0,
        }
    }

    fn improves(self, candidate: f64, best: f64) -> bool {
        match self {
            Direction::Gain => candidate > best,
            Direction::Loss => candidate < best,
        }
    }
}

/// Kadane scan over day-over-day close deltas of an already sorted series.
///
/// The running sum is reset whenever adding the next delta would stop it
/// moving in `direction`; the candidate window then restarts at that day.
/// The committed window only changes on strict improvement, so the earliest
/// of several equally extreme windows wins.
///
/// # Returns
/// * `PeriodResult` - Records `start..=end` and the summed delta, or the empty
///   default when no window beats zero (including series shorter than 2).
pub fn extreme_period(series: &[DailyRecord], direction: Direction) -> PeriodResult {
    let mut current = 0.0;
    let mut best = 0.0;
    let mut candidate_start = 0;
    let mut window: Option<(usize, usize)> = None;

    for i in 1..series.len() {
        let delta = series[i].close - series[i - 1].close;
        if direction.extends(current + delta) {
            current += delta;
        } else {
            current = 0.0;
            candidate_start = i;
        }

        if direction.improves(current, best) {
            best = current;
            window = Some((candidate_start, i));
        }
    }

    match window {
        Some((start, end)) => PeriodResult {
            records: series[start..=end].to_vec(),
            total: best,
        },
        None => PeriodResult::default(),
    }
}

/// Window with the largest cumulative close gain.
pub fn max_gain_period(series: &[DailyRecord]) -> PeriodResult {
    extreme_period(series, Direction::Gain)
}

/// Window with the largest cumulative close loss (most negative total).
pub fn max_loss_period(series: &[DailyRecord]) -> PeriodResult {
    extreme_period(series, Direction::Loss)
}

/// Adjacent pair with the smallest absolute close change.
///
/// `None` when the series has fewer than two records.
pub fn closest_pair(series: &[DailyRecord]) -> Option<PairResult> {
    let mut min_diff = f64::INFINITY;
    let mut closest = None;
    for pair in series.windows(2) {
        let diff = pair[0].close_diff(&pair[1]);
        if diff < min_diff {
            min_diff = diff;
            closest = Some(PairResult { first: pair[0], second: pair[1], diff });
        }
    }
    closest
}

/// Adjacent pair with the largest absolute close change.
///
/// `None` when the series has fewer than two records, or when no adjacent
/// close differs at all.
pub fn farthest_pair(series: &[DailyRecord]) -> Option<PairResult> {
    let mut max_diff = 0.0;
    let mut farthest = None;
    for pair in series.windows(2) {
        let diff = pair[0].close_diff(&pair[1]);
        if diff > max_diff {
            max_diff = diff;
            farthest = Some(PairResult { first: pair[0], second: pair[1], diff });
        }
    }
    farthest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::series;

    const EPS: f64 = 1e-9;

    fn delta_sum(window: &[DailyRecord]) -> f64 {
        window.windows(2).map(|w| w[1].close - w[0].close).sum()
    }

    /// Most extreme sum over every sub-window of at least two records, or 0.
    fn brute_force(series: &[DailyRecord], direction: Direction) -> f64 {
        let mut best = 0.0;
        for start in 0..series.len() {
            for end in start + 1..series.len() {
                let sum = delta_sum(&series[start..=end]);
                if direction.improves(sum, best) {
                    best = sum;
                }
            }
        }
        best
    }

    /// Deterministic pseudo-random closes in [50, 150) with whole-cent steps.
    fn lcg_closes(seed: u64, n: usize) -> Vec<f64> {
        let mut state = seed;
        (0..n)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                50.0 + ((state >> 33) % 10_000) as f64 / 100.0
            })
            .collect()
    }

    /// Index of `record` inside `series`, matched by date.
    fn position(series: &[DailyRecord], record: &DailyRecord) -> usize {
        series.iter().position(|r| r.date == record.date).unwrap()
    }

    #[test]
    fn worked_example() {
        let s = series(&[10.0, 12.0, 9.0, 15.0, 8.0]);

        let gain = max_gain_period(&s);
        assert_eq!(gain.records, s[2..=3].to_vec());
        assert!((gain.total - 6.0).abs() < EPS);

        let loss = max_loss_period(&s);
        assert_eq!(loss.records, s[3..=4].to_vec());
        assert!((loss.total + 7.0).abs() < EPS);

        let closest = closest_pair(&s).unwrap();
        assert_eq!((closest.first, closest.second), (s[0], s[1]));
        assert!((closest.diff - 2.0).abs() < EPS);

        let farthest = farthest_pair(&s).unwrap();
        assert_eq!((farthest.first, farthest.second), (s[3], s[4]));
        assert!((farthest.diff - 7.0).abs() < EPS);
    }

    #[test]
    fn multi_day_windows() {
        let s = series(&[5.0, 6.0, 4.0, 7.0, 8.0, 3.0, 2.0, 1.0, 9.0]);

        let gain = max_gain_period(&s);
        assert_eq!(gain.records, s[7..=8].to_vec());
        assert!((gain.total - 8.0).abs() < EPS);

        let loss = max_loss_period(&s);
        assert_eq!(loss.records, s[4..=7].to_vec());
        assert!((loss.total + 7.0).abs() < EPS);
    }

    #[test]
    fn degenerate_series() {
        for s in [series(&[]), series(&[100.0])] {
            assert_eq!(max_gain_period(&s), PeriodResult::default());
            assert_eq!(max_loss_period(&s), PeriodResult::default());
            assert!(closest_pair(&s).is_none());
            assert!(farthest_pair(&s).is_none());
        }
    }

    #[test]
    fn monotone_series_has_no_opposite_period() {
        let rising = series(&[1.0, 2.0, 3.0, 4.0]);
        assert!(max_loss_period(&rising).records.is_empty());
        assert!((max_gain_period(&rising).total - 3.0).abs() < EPS);

        let falling = series(&[4.0, 3.0, 2.0, 1.0]);
        assert!(max_gain_period(&falling).records.is_empty());
        assert_eq!(max_loss_period(&falling).records, falling);
    }

    #[test]
    fn flat_series() {
        let flat = series(&[7.0, 7.0, 7.0]);
        assert!(max_gain_period(&flat).records.is_empty());
        assert!(max_loss_period(&flat).records.is_empty());
        assert_eq!(closest_pair(&flat).unwrap().diff, 0.0);
        assert!(farthest_pair(&flat).is_none());
    }

    #[test]
    fn periods_match_brute_force() {
        for seed in 0..200 {
            let n = (seed % 20) as usize + 1;
            let s = series(&lcg_closes(seed, n));

            for direction in [Direction::Gain, Direction::Loss] {
                let period = extreme_period(&s, direction);
                let expected = brute_force(&s, direction);
                assert!(
                    (period.total - expected).abs() < 1e-6,
                    "seed {seed} {direction:?}: got {} want {expected}",
                    period.total
                );

                if let Some((first, last)) = period.bounds() {
                    let start = position(&s, first);
                    let end = position(&s, last);
                    assert!(start < end && end < s.len());
                    assert_eq!(period.records, s[start..=end].to_vec());
                    assert!((delta_sum(&period.records) - period.total).abs() < 1e-6);
                } else {
                    assert_eq!(period.total, 0.0);
                }
            }
        }
    }

    #[test]
    fn pair_extrema_bound_every_adjacent_diff() {
        for seed in 0..50 {
            let s = series(&lcg_closes(seed, 2 + (seed % 18) as usize));
            let closest = closest_pair(&s).unwrap();
            for w in s.windows(2) {
                let diff = w[0].close_diff(&w[1]);
                assert!(closest.diff <= diff);
                if let Some(farthest) = farthest_pair(&s) {
                    assert!(diff <= farthest.diff);
                }
            }
            assert_eq!(position(&s, &closest.second), position(&s, &closest.first) + 1);
        }
    }

    #[test]
    fn reversed_then_sorted_scans_identically() {
        let s = series(&lcg_closes(7, 15));
        let mut reversed = s.clone();
        reversed.reverse();
        let resorted = crate::sort::sort_by_date(&reversed);

        assert_eq!(max_gain_period(&resorted), max_gain_period(&s));
        assert_eq!(max_loss_period(&resorted), max_loss_period(&s));
        assert_eq!(closest_pair(&resorted), closest_pair(&s));
        assert_eq!(farthest_pair(&resorted), farthest_pair(&s));
    }
}
