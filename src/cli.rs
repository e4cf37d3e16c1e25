use crate::csv_processor;

/// Structure representing command-line arguments.
#[derive(Debug)]
pub struct Args {
    pub input: std::path::PathBuf,
    pub threads: Option<usize>,
    pub date_format: String,
    pub preview: Option<usize>,
}

fn command() -> clap::Command {
    clap::Command::new("stock-period-analyzer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find max gain/loss periods and adjacent-day price anomalies in daily stock CSVs")
        .arg(
            clap::Arg::new("input")
                .short('i')
                .long("input")
                .help("Path to a CSV file, or a directory of CSV files")
                .required(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of threads to use (default: all available)")
                .num_args(1)
                .value_parser(clap::builder::ValueParser::new(parse_usize_positive)),
        )
        .arg(
            clap::Arg::new("date-format")
                .short('d')
                .long("date-format")
                .help("chrono format of the Date column")
                .num_args(1)
                .default_value(csv_processor::DEFAULT_DATE_FORMAT),
        )
        .arg(
            clap::Arg::new("preview")
                .short('p')
                .long("preview")
                .help("Print the first N records of each series after sorting")
                .num_args(1)
                .value_parser(clap::builder::ValueParser::new(parse_usize_positive)),
        )
}

impl Args {
    /// Parses command-line arguments using `clap`.
    ///
    /// Exits the process with usage help if they are missing or invalid.
    pub fn parse() -> Self {
        Self::try_parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parses an explicit argument list, for tests and embedding.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::from_matches(&command().try_get_matches_from(args)?))
    }

    fn from_matches(matches: &clap::ArgMatches) -> Self {
        Args {
            input: matches
                .get_one::<String>("input")
                .map(std::path::PathBuf::from)
                .unwrap_or_default(),
            threads: matches.get_one::<usize>("threads").cloned(),
            date_format: matches
                .get_one::<String>("date-format")
                .cloned()
                .unwrap_or_else(|| csv_processor::DEFAULT_DATE_FORMAT.to_string()),
            preview: matches.get_one::<usize>("preview").cloned(),
        }
    }
}

/// Validates that a count argument is a positive integer.
///
/// # Arguments
/// * `s` - String representation of the number.
///
/// # Returns
/// * `Result<usize>` - Validated number.
fn parse_usize_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("Must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("Not a valid number: {}", e)),
    }
}
