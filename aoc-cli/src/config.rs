//! Configuration resolution from CLI args

use crate::cli::Args;
use aoc_solver::InputKind;
use std::path::{Path, PathBuf};

/// Environment variable naming the input directory
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";
/// Input directory used when neither flag nor environment name one
pub const DEFAULT_INPUT_DIR: &str = "inputs";

/// Where the puzzle input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    /// The input store rooted at this directory
    Store(PathBuf),
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub year: u16,
    pub day: u8,
    /// Part filter (None = all parts)
    pub part: Option<u8>,
    pub kind: InputKind,
    pub source: InputSource,
    /// Root of the input store, whatever the source
    pub input_dir: PathBuf,
    /// Copy an input read from a file or stdin into the store
    pub save: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args and the process environment
    pub fn from_args(args: Args) -> Self {
        Self::resolve(args, std::env::var_os(INPUT_DIR_ENV).map(PathBuf::from))
    }

    /// Build config from CLI args, with `env_dir` standing in for `AOC_INPUT_DIR`
    fn resolve(args: Args, env_dir: Option<PathBuf>) -> Self {
        let kind = if args.test {
            InputKind::Sample
        } else {
            InputKind::Real
        };

        let input_dir = expand_tilde(
            &args
                .input_dir
                .or(env_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
        );
        let source = match args.input_file {
            Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(expand_tilde(&path)),
            None => InputSource::Store(input_dir.clone()),
        };

        Config {
            year: args.year,
            day: args.day,
            part: args.part,
            kind,
            source,
            input_dir,
            save: args.save,
            quiet: args.quiet,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use proptest::prelude::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_store() {
        let config = Config::resolve(args(&["2020", "3"]), None);
        assert_eq!(config.kind, InputKind::Real);
        assert_eq!(config.source, InputSource::Store(PathBuf::from("inputs")));
        assert_eq!(config.part, None);
    }

    #[test]
    fn test_flag_beats_environment() {
        let env = Some(PathBuf::from("/from/env"));
        let config = Config::resolve(args(&["2020", "3"]), env.clone());
        assert_eq!(config.source, InputSource::Store(PathBuf::from("/from/env")));

        let config = Config::resolve(args(&["2020", "3", "--input-dir", "/from/flag"]), env);
        assert_eq!(config.source, InputSource::Store(PathBuf::from("/from/flag")));
    }

    #[test]
    fn test_input_file_overrides_store() {
        let config = Config::resolve(args(&["2020", "3", "-i", "-", "--test"]), None);
        assert_eq!(config.source, InputSource::Stdin);
        assert_eq!(config.kind, InputKind::Sample);

        let config = Config::resolve(args(&["2020", "3", "-i", "day3.txt", "--save"]), None);
        assert_eq!(config.source, InputSource::File(PathBuf::from("day3.txt")));
        assert_eq!(config.input_dir, PathBuf::from("inputs"));
        assert!(config.save);
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("/abs/path")), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde(Path::new("~user/x")), PathBuf::from("~user/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }

    proptest! {
        #[test]
        fn prop_plain_paths_unchanged(path in "[a-z/._-]{1,24}") {
            prop_assert_eq!(expand_tilde(Path::new(&path)), PathBuf::from(&path));
        }

        #[test]
        fn prop_env_dir_used_without_flag(dir in "/[a-z]{1,12}") {
            let config = Config::resolve(args(&["2022", "23"]), Some(PathBuf::from(&dir)));
            prop_assert_eq!(config.source, InputSource::Store(PathBuf::from(&dir)));
        }
    }
}
