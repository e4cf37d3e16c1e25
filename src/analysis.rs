use crate::record::{DailyRecord, PairResult, PeriodResult};
use crate::scan;
use crate::sort;

/// Anything that can hand over one series of daily records.
///
/// The analysis never touches files itself; callers inject the source.
pub trait RecordSource {
    /// Label used in status and report output.
    fn name(&self) -> String;

    fn load(&self) -> anyhow::Result<Vec<DailyRecord>>;
}

impl RecordSource for Vec<DailyRecord> {
    fn name(&self) -> String {
        "in-memory series".to_string()
    }

    fn load(&self) -> anyhow::Result<Vec<DailyRecord>> {
        Ok(self.clone())
    }
}

/// The four results of one run, plus the sorted series they were computed on.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub series: Vec<DailyRecord>,
    pub max_gain: PeriodResult,
    pub max_loss: PeriodResult,
    pub closest: Option<PairResult>,
    pub farthest: Option<PairResult>,
}

/// Sorts `records` by date and runs the four scans over the result.
///
/// The scans only read the sorted series, so they run side by side on the
/// current Rayon pool.
pub fn analyze(records: &[DailyRecord]) -> Analysis {
    let series = sort::sort_by_date(records);

    let ((max_gain, max_loss), (closest, farthest)) = rayon::join(
        || {
            rayon::join(
                || scan::max_gain_period(&series),
                || scan::max_loss_period(&series),
            )
        },
        || {
            rayon::join(
                || scan::closest_pair(&series),
                || scan::farthest_pair(&series),
            )
        },
    );

    Analysis {
        series,
        max_gain,
        max_loss,
        closest,
        farthest,
    }
}

/// Loads the series from `source` and analyzes it.
pub fn run<S: RecordSource + ?Sized>(source: &S) -> anyhow::Result<Analysis> {
    let records = source.load()?;
    Ok(analyze(&records))
}
