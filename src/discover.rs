//! Recursive discovery of test files under a root directory

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffix that marks a file as a test file. Matching is
/// case-sensitive.
pub const TEST_FILE_SUFFIX: &str = ".test.js";

/// Recursively collect every file under `root` whose name ends in
/// [`TEST_FILE_SUFFIX`], at any depth.
///
/// Returned paths are relative to `root`, in the order the directory walk
/// yields them (not sorted). Any traversal failure aborts the whole search;
/// callers never observe a partial result.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::Generic(format!(
            "Tests root does not exist: {}",
            root.display()
        )));
    }
    if !root.is_dir() {
        return Err(Error::Generic(format!(
            "Tests root is not a directory: {}",
            root.display()
        )));
    }

    let mut found = Vec::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() {
            if let Some(file_name) = entry.file_name().to_str() {
                if file_name.ends_with(TEST_FILE_SUFFIX) {
                    let relative = entry.path().strip_prefix(root).map_err(|_| {
                        Error::Generic(format!(
                            "Discovered file escapes tests root: {}",
                            entry.path().display()
                        ))
                    })?;
                    found.push(relative.to_path_buf());
                }
            }
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn suffix_match_is_exact_and_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("match.test.js"), "").unwrap();
        fs::write(root.join("MATCH.TEST.JS"), "").unwrap();
        fs::write(root.join("match.test.ts"), "").unwrap();
        fs::write(root.join("matchtest.js"), "").unwrap();

        let found = discover_files(root).unwrap();
        assert_eq!(found, vec![PathBuf::from("match.test.js")]);
    }

    #[test]
    fn returned_paths_are_relative() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let nested = root.join("deep").join("deeper");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("leaf.test.js"), "").unwrap();

        let found = discover_files(root).unwrap();
        assert_eq!(found, vec![PathBuf::from("deep/deeper/leaf.test.js")]);
        assert!(found.iter().all(|p| p.is_relative()));
    }
}
