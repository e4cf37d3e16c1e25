/// Configures a custom Rayon thread pool with specified size.
///
/// Used in directory mode so that `--threads` bounds the per-file parallelism
/// independently of the global Rayon pool.
///
/// # Arguments
/// * `num_threads` - Desired number of threads for the pool.
///
/// # Returns
/// * `Result<ThreadPool>` - Created thread pool or an error if creation fails.
pub fn configure_thread_pool(num_threads: usize) -> anyhow::Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build thread pool: {}", e))
}

/// Caps a requested thread count at the number of logical CPUs.
///
/// # Returns
/// * `(usize, bool)` - The effective count and whether it was capped.
pub fn effective_threads(requested: usize) -> (usize, bool) {
    let max_threads = num_cpus::get();
    if requested > max_threads {
        (max_threads, true)
    } else {
        (requested, false)
    }
}

/// Parses a price cell, dropping a leading currency symbol and thousands separators.
///
/// `"$1,234.50"`, `"€ 12"` and `" 1234.5 "` parse. Letters, exponents, signs
/// and commas that are not 3-digit groups are rejected with `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let body = raw
        .trim()
        .trim_start_matches(|c: char| {
            !c.is_ascii() || (c.is_ascii_punctuation() && c != '-' && c != '.')
        })
        .trim_start();

    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (body, None),
    };
    let mut number = strip_thousands(int_part)?;
    match frac_part {
        Some(frac) if !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()) => {
            number.push('.');
            number.push_str(frac);
        }
        Some(_) => return None,
        None if number.is_empty() => return None,
        None => {}
    }

    let value = number.parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Digits of an integer part, with commas allowed only between 3-digit groups.
fn strip_thousands(int_part: &str) -> Option<String> {
    let mut groups = int_part.split(',');
    let head = groups.next().unwrap_or_default();
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut digits = head.to_string();
    for group in groups {
        let grouped = !head.is_empty() && head.len() <= 3 && group.len() == 3;
        if !grouped || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

/// Formats a date the way the report prints it: `MM/DD/YYYY`.
pub fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}
