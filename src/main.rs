mod analysis;
mod cli;
mod csv_processor;
mod file_processing;
mod progress;
mod record;
mod report;
mod scan;
mod sort;
mod utils;

/// Main entry point of the application.
///
/// This function orchestrates the entire workflow:
/// 1. Parses command-line arguments.
/// 2. Resolves the input into one or more CSV files.
/// 3. Determines the number of threads to use.
/// 4. Loads, sorts and scans every series, then prints the reports.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Success or an error if any step fails.
fn main() -> anyhow::Result<()> {
    let total_start = std::time::Instant::now();
    let args = cli::Args::parse();

    file_processing::check_path(&args.input)?;
    let files = file_processing::collect_input_files(&args.input)?;
    println!("Start analysis of {} file(s)...", files.len());

    let options = progress::RunOptions {
        date_format: args.date_format.clone(),
        preview: args.preview,
    };

    if let Some(n) = args.threads {
        let (threads, capped) = utils::effective_threads(n);
        if capped {
            println!("⚠️ Warning: Limiting thread count to {} (max available)", threads);
        }
        println!("🚀 Using {} thread(s)", threads);
        let local_pool = utils::configure_thread_pool(threads)?;
        local_pool.install(|| progress::process_files(&files, &options))?;
    } else {
        println!("🚀 Using {} thread(s)", rayon::current_num_threads());
        progress::process_files(&files, &options)?;
    }

    println!(
        "✅ Analysis completed in {:?} seconds",
        total_start.elapsed().as_secs_f64()
    );
    Ok(())
}
