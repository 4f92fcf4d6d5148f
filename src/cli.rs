use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_OUTPUT_DIR;

#[derive(Parser, Debug)]
#[command(name = "academic_screener")]
#[command(about = "Deduplicate an academic search export and tag moral-theory keywords")]
#[command(version)]
pub struct Cli {
    /// Input CSV file
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Output directory, created if missing
    #[arg(long = "output_dir", short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Optional TOML file overriding report limits
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["academic_screener", "--input", "in.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.csv"));
        assert_eq!(cli.output_dir, PathBuf::from("output"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["academic_screener", "-i", "a.csv", "-o", "out", "-c", "s.toml"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("a.csv"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.config, Some(PathBuf::from("s.toml")));
    }

    #[test]
    fn test_underscore_long_flag() {
        let cli = Cli::try_parse_from(["academic_screener", "-i", "a.csv", "--output_dir", "results"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("results"));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["academic_screener"]).is_err());
    }
}
