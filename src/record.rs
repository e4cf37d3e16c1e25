/// A single trading day of price data.
///
/// Built once by the loader and never mutated afterwards. The OHLC fields are
/// assumed consistent (`low <= open, close <= high`); nothing here checks it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRecord {
    pub date: chrono::NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl DailyRecord {
    /// Absolute close-price change between `self` and `other`.
    pub fn close_diff(&self, other: &DailyRecord) -> f64 {
        (other.close - self.close).abs()
    }
}

/// Contiguous window of the sorted series together with its summed
/// day-over-day close change.
///
/// The default (empty records, total 0) means no gain or loss period exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodResult {
    pub records: Vec<DailyRecord>,
    pub total: f64,
}

impl PeriodResult {
    /// First and last day of the window, if any.
    pub fn bounds(&self) -> Option<(&DailyRecord, &DailyRecord)> {
        Some((self.records.first()?, self.records.last()?))
    }
}

/// Two records that are consecutive in the sorted series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairResult {
    pub first: DailyRecord,
    pub second: DailyRecord,
    pub diff: f64,
}
