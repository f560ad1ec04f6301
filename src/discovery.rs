//! Candidate input file discovery.
//!
//! Recursively scans an input directory for files whose names match a
//! configurable pattern (`.*\.cnv` by convention). Discovery only selects
//! candidates; classifying each file is the detector's job.

use crate::error::{Error, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Recursively collect files under `input_dir` whose names match `pattern`.
///
/// The pattern is applied to the bare file name and anchored at its start.
/// Results are sorted for reproducible processing order.
pub fn find_input_files(input_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Regex::new(&format!("^(?:{pattern})"))
        .map_err(|e| Error::configuration(format!("invalid input pattern '{pattern}': {e}")))?;

    let mut files = Vec::new();
    for entry in WalkDir::new(input_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if matcher.is_match(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(
        "found {} candidate files under {}",
        files.len(),
        input_dir.display()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_INPUT_PATTERN;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree(temp_dir: &TempDir) -> PathBuf {
        let root = temp_dir.path().join("profiles");
        let cruise = root.join("cruise-2019").join("leg1");
        fs::create_dir_all(&cruise).unwrap();

        fs::write(root.join("sta0001.cnv"), "data").unwrap();
        fs::write(cruise.join("sta0002.cnv"), "data").unwrap();
        fs::write(cruise.join("sta0003.cnv"), "data").unwrap();
        fs::write(cruise.join("readme.txt"), "notes").unwrap();

        root
    }

    #[test]
    fn test_find_input_files_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let root = create_test_tree(&temp_dir);

        let files = find_input_files(&root, DEFAULT_INPUT_PATTERN).unwrap();
        assert_eq!(files.len(), 3);

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert!(names.contains(&"sta0001.cnv".to_string()));
        assert!(names.contains(&"sta0002.cnv".to_string()));
        assert!(!names.contains(&"readme.txt".to_string()));
    }

    #[test]
    fn test_results_are_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = create_test_tree(&temp_dir);

        let files = find_input_files(&root, DEFAULT_INPUT_PATTERN).unwrap();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_custom_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let root = create_test_tree(&temp_dir);

        let files = find_input_files(&root, r"sta0001.*").unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("sta0001.cnv"));
    }

    #[test]
    fn test_pattern_is_anchored_at_name_start() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("input");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("cast.cnv"), "data").unwrap();
        fs::write(root.join("old_cast.cnv"), "data").unwrap();

        let files = find_input_files(&root, r"cast.*\.cnv").unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("cast.cnv"));
    }

    #[test]
    fn test_invalid_pattern_is_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = find_input_files(temp_dir.path(), "(");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let files = find_input_files(temp_dir.path(), DEFAULT_INPUT_PATTERN).unwrap();
        assert!(files.is_empty());
    }
}
