//! Puzzle inputs stored on disk

use crate::config::InputSource;
use crate::error::CliError;
use aoc_solver::InputKind;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// File-based store for puzzle inputs
///
/// Directory structure: `{base_dir}/{year}/day{day:02}.txt`, with the worked
/// example next to it as `day{day:02}.sample.txt`.
pub struct InputStore {
    base_dir: PathBuf,
}

impl InputStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8, kind: InputKind) -> PathBuf {
        let file = match kind {
            InputKind::Real => format!("day{day:02}.txt"),
            InputKind::Sample => format!("day{day:02}.sample.txt"),
        };
        self.base_dir.join(year.to_string()).join(file)
    }

    /// Check if the input exists
    pub fn contains(&self, year: u16, day: u8, kind: InputKind) -> bool {
        self.input_path(year, day, kind).exists()
    }

    /// Read the stored input
    pub fn get(&self, year: u16, day: u8, kind: InputKind) -> Result<String, CliError> {
        let path = self.input_path(year, day, kind);
        if !self.contains(year, day, kind) {
            return Err(CliError::MissingInput(path));
        }
        read_file(&path)
    }

    /// Store an input, creating the year directory if needed
    pub fn put(&self, year: u16, day: u8, kind: InputKind, input: &str) -> Result<(), CliError> {
        let path = self.input_path(year, day, kind);
        let write = |path: &Path| -> std::io::Result<()> {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(path, input)
        };
        write(&path).map_err(|source| CliError::Write { path, source })
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the input a run asked for
pub fn load(source: &InputSource, year: u16, day: u8, kind: InputKind) -> Result<String, CliError> {
    match source {
        InputSource::Stdin => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(CliError::Stdin)?;
            Ok(input)
        }
        InputSource::File(path) => read_file(path),
        InputSource::Store(dir) => InputStore::new(dir.clone()).get(year, day, kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let path = store.input_path(2024, 1, InputKind::Real);
        assert_eq!(path, temp.path().join("2024").join("day01.txt"));

        let path = store.input_path(2023, 25, InputKind::Sample);
        assert_eq!(path, temp.path().join("2023").join("day25.sample.txt"));
    }

    #[test]
    fn test_store_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2024, 1, InputKind::Real));
        assert!(matches!(
            store.get(2024, 1, InputKind::Real),
            Err(CliError::MissingInput(_))
        ));

        let input = "test input\nline 2\n";
        store.put(2024, 1, InputKind::Real, input).unwrap();

        assert!(store.contains(2024, 1, InputKind::Real));
        assert!(!store.contains(2024, 1, InputKind::Sample));
        assert_eq!(store.get(2024, 1, InputKind::Real).unwrap(), input);
    }

    #[test]
    fn test_load_sources() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        store.put(2019, 9, InputKind::Sample, "104,1,99\n").unwrap();

        let from_store = load(
            &InputSource::Store(temp.path().to_path_buf()),
            2019,
            9,
            InputKind::Sample,
        )
        .unwrap();
        assert_eq!(from_store, "104,1,99\n");

        let file = temp.path().join("custom.txt");
        fs::write(&file, "custom").unwrap();
        let from_file = load(&InputSource::File(file), 2019, 9, InputKind::Real).unwrap();
        assert_eq!(from_file, "custom");

        let missing = load(
            &InputSource::File(temp.path().join("nope.txt")),
            2019,
            9,
            InputKind::Real,
        );
        assert!(matches!(missing, Err(CliError::Read { .. })));
    }

    #[test]
    fn test_put_reports_write_failure() {
        let temp = TempDir::new().unwrap();
        // The store root is a plain file, so the year directory cannot be created
        let root = temp.path().join("not-a-dir");
        fs::write(&root, "").unwrap();
        let store = InputStore::new(root);

        let err = store.put(2020, 3, InputKind::Real, "..#\n").unwrap_err();
        assert!(matches!(err, CliError::Write { .. }));
    }
}
