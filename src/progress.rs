use crate::analysis::{self, RecordSource};
use crate::csv_processor;
use crate::report;

use rayon::prelude::*;

/// Options shared by every file analyzed in one invocation.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub date_format: String,
    pub preview: Option<usize>,
}

/// Analysis of one input file together with its source label.
#[derive(Debug)]
pub struct FileReport {
    pub name: String,
    pub analysis: analysis::Analysis,
}

fn progress_bar(len: usize) -> anyhow::Result<indicatif::ProgressBar> {
    if len < 2 {
        return Ok(indicatif::ProgressBar::hidden());
    }
    let pb = indicatif::ProgressBar::new(len as u64);
    pb.set_style(
        indicatif::ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}",
        )?
        .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Analyzes every file in parallel on the current Rayon pool.
///
/// Results come back in the order of `files`. The first failing file aborts
/// the run with its error.
pub fn analyze_files(
    files: &[std::path::PathBuf],
    options: &RunOptions,
) -> anyhow::Result<Vec<FileReport>> {
    let pb = progress_bar(files.len())?;

    let reports = files
        .par_iter()
        .map(|path| {
            let source = csv_processor::CsvSource::new(path, &options.date_format);
            let result = analysis::run(&source)?;
            pb.inc(1);
            Ok::<_, anyhow::Error>(FileReport {
                name: source.name(),
                analysis: result,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>();

    pb.finish_and_clear();
    reports
}

/// Analyzes `files` and prints one report per file.
///
/// Reports are printed after all files finish so parallel output never interleaves.
pub fn process_files(files: &[std::path::PathBuf], options: &RunOptions) -> anyhow::Result<()> {
    let reports = analyze_files(files, options)?;

    for file_report in &reports {
        println!("📄 {} ({} records)", file_report.name, file_report.analysis.series.len());
        if let Some(count) = options.preview {
            print!("{}", report::format_records(&file_report.analysis.series, count));
        }
        print!("{}", report::format_report(&file_report.analysis));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(dir: &std::path::Path, name: &str, rows: &[(&str, &str)]) -> std::path::PathBuf {
        let mut body = String::from("Date,Close/Last,Volume,Open,High,Low\n");
        for (date, close) in rows {
            body.push_str(&format!("{date},{close},100,{close},{close},{close}\n"));
        }
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    fn options() -> RunOptions {
        RunOptions {
            date_format: csv_processor::DEFAULT_DATE_FORMAT.to_string(),
            preview: None,
        }
    }

    #[test]
    fn analyzes_each_file_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_csv(
            dir.path(),
            "A.csv",
            &[("01/03/2024", "$12"), ("01/02/2024", "$10"), ("01/04/2024", "$9")],
        );
        let b = write_csv(dir.path(), "B.csv", &[("01/02/2024", "$5")]);

        let reports = analyze_files(&[a, b], &options()).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].name.ends_with("A.csv"));
        assert!((reports[0].analysis.max_gain.total - 2.0).abs() < 1e-9);
        assert!((reports[0].analysis.max_loss.total + 3.0).abs() < 1e-9);
        assert!(reports[1].name.ends_with("B.csv"));
        assert!(reports[1].analysis.closest.is_none());
    }

    #[test]
    fn bad_file_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_csv(dir.path(), "good.csv", &[("01/02/2024", "$1")]);
        let bad = write_csv(dir.path(), "bad.csv", &[("not-a-date", "$1")]);

        let err = analyze_files(&[good, bad], &options()).unwrap_err();
        assert!(err.to_string().contains("bad.csv"));
    }
}
