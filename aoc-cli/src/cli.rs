//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run an Advent of Code solver", version)]
pub struct Args {
    /// Puzzle year
    pub year: u16,

    /// Puzzle day
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub part: Option<u8>,

    /// Run against the worked example instead of the real input
    #[arg(short, long)]
    pub test: bool,

    /// Read the input from this file instead, `-` for stdin
    #[arg(short, long, value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Directory holding `{year}/day{DD}.txt` inputs [env: AOC_INPUT_DIR, default: inputs]
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Copy an input given with --input-file into the input directory
    #[arg(long, requires = "input_file")]
    pub save: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_year_and_day() {
        let args = Args::try_parse_from(["aoc", "2019", "7", "--test", "-p", "2"]).unwrap();
        assert_eq!((args.year, args.day), (2019, 7));
        assert_eq!(args.part, Some(2));
        assert!(args.test);
        assert!(args.input_file.is_none());
    }

    #[test]
    fn test_day_out_of_range() {
        assert!(Args::try_parse_from(["aoc", "2019", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "2019", "0"]).is_err());
        assert!(Args::try_parse_from(["aoc", "2019"]).is_err());
        assert!(Args::try_parse_from(["aoc", "2019", "1", "--save"]).is_err());
    }

    #[test]
    fn test_stdin_input() {
        let args = Args::try_parse_from(["aoc", "2024", "13", "--input-file", "-"]).unwrap();
        assert_eq!(args.input_file, Some(PathBuf::from("-")));
    }
}
