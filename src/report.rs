use crate::analysis::Analysis;
use crate::record::{DailyRecord, PairResult, PeriodResult};
use crate::utils::format_date;

fn period_lines(label: &str, period: &PeriodResult) -> String {
    match period.bounds() {
        Some((first, last)) => format!(
            "Max {label} Period: ${:.2} at {} to ${:.2} at {}\nMax {label}: ${:.2}\n",
            first.close,
            format_date(first.date),
            last.close,
            format_date(last.date),
            period.total,
        ),
        None => format!("Max {label} Period: none found\nMax {label}: ${:.2}\n", period.total),
    }
}

fn pair_line(label: &str, pair: &Option<PairResult>) -> String {
    match pair {
        Some(p) => format!(
            "{label} Pair Anomaly: {} - {}, Difference: ${:.2}\n",
            format_date(p.first.date),
            format_date(p.second.date),
            p.diff,
        ),
        None => format!("{label} Pair Anomaly: none found\n"),
    }
}

/// Renders the four results as the plain-text report.
///
/// # Example Output
/// ```text
/// Max Profit Period: $9.00 at 01/04/2024 to $15.00 at 01/05/2024
/// Max Profit: $6.00
/// Max Loss Period: $15.00 at 01/05/2024 to $8.00 at 01/06/2024
/// Max Loss: $-7.00
/// Closest Pair Anomaly: 01/02/2024 - 01/03/2024, Difference: $2.00
/// Farthest Pair Anomaly: 01/05/2024 - 01/06/2024, Difference: $7.00
/// ```
pub fn format_report(analysis: &Analysis) -> String {
    let mut out = String::new();
    out.push_str(&period_lines("Profit", &analysis.max_gain));
    out.push_str(&period_lines("Loss", &analysis.max_loss));
    out.push_str(&pair_line("Closest", &analysis.closest));
    out.push_str(&pair_line("Farthest", &analysis.farthest));
    out
}

/// Formats the first `count` records of a sorted series, one per line.
///
/// ```text
///  - date: 01/02/2024, open: 250.08, high: 251.25, low: 244.41, close: 248.42, vol: 104654200
/// ```
pub fn format_records(records: &[DailyRecord], count: usize) -> String {
    records
        .iter()
        .take(count)
        .map(|r| {
            format!(
                " - date: {}, open: {:.2}, high: {:.2}, low: {:.2}, close: {:.2}, vol: {}\n",
                format_date(r.date),
                r.open,
                r.high,
                r.low,
                r.close,
                r.volume,
            )
        })
        .collect()
}
