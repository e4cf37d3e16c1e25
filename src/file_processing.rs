/// Validates that the input path exists.
///
/// # Errors
/// * If `path` is neither a file nor a directory.
pub fn check_path<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(anyhow::anyhow!("Input path does not exist: {}", path.display()));
    }
    if !path.is_file() && !path.is_dir() {
        return Err(anyhow::anyhow!("Input path is not a file or directory: {}", path.display()));
    }
    Ok(())
}

fn is_csv(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Resolves the input argument into the list of CSV files to analyze.
///
/// A file is taken as-is whatever its extension. A directory contributes its
/// `*.csv` entries (non-recursive), ordered by path so reports come out in a
/// stable order.
///
/// # Errors
/// * If the directory cannot be read or holds no CSV files.
pub fn collect_input_files<P: AsRef<std::path::Path>>(input: P) -> anyhow::Result<Vec<std::path::PathBuf>> {
    let input = input.as_ref();
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut paths = std::fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_csv(path))
        .collect::<Vec<_>>();
    paths.sort();

    if paths.is_empty() {
        return Err(anyhow::anyhow!("No CSV files found in {}", input.display()));
    }
    Ok(paths)
}
