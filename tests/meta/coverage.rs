//! Tests for the layout and conventions of the test suite itself

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    /// Files that only declare modules or start a binary
    const WIRING_FILES: [&str; 3] = ["lib.rs", "main.rs", "mod.rs"];

    /// Every `.rs` file under `root`, relative to it
    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path.strip_prefix(root).map_err(|_| {
                        io::Error::other(format!("{} is outside {}", path.display(), root.display()))
                    })?;
                    found.insert(relative.to_path_buf());
                }
            }
        }
        Ok(found)
    }

    fn is_wiring(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| WIRING_FILES.contains(&name))
    }

    /// Source modules and unit test files that hold real code
    fn modules_and_unit_tests() -> (BTreeSet<PathBuf>, BTreeSet<PathBuf>) {
        let keep = |files: io::Result<BTreeSet<PathBuf>>, root: &str| -> BTreeSet<PathBuf> {
            match files {
                Ok(files) => files.into_iter().filter(|path| !is_wiring(path)).collect(),
                Err(error) => panic!("cannot scan {root}: {error}"),
            }
        };
        (
            keep(rust_files(Path::new("src")), "src"),
            keep(rust_files(Path::new("tests/unit")), "tests/unit"),
        )
    }

    fn listing<'a>(paths: impl Iterator<Item = &'a PathBuf>) -> String {
        paths
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests each source module has a unit test file at the same path
    // Verified by deleting tests/unit/life/raster.rs
    #[test]
    fn test_modules_have_unit_tests() {
        let (modules, unit_tests) = modules_and_unit_tests();
        let untested: Vec<&PathBuf> = modules.difference(&unit_tests).collect();
        assert!(
            untested.is_empty(),
            "modules under src/ without a file in tests/unit/:\n{}",
            listing(untested.into_iter())
        );
    }

    // Tests no unit test file outlives the module it covers
    // Verified by adding tests/unit/search/orphan.rs
    #[test]
    fn test_unit_tests_have_modules() {
        let (modules, unit_tests) = modules_and_unit_tests();
        let orphaned: Vec<&PathBuf> = unit_tests.difference(&modules).collect();
        assert!(
            orphaned.is_empty(),
            "files under tests/unit/ with no module in src/:\n{}",
            listing(orphaned.into_iter())
        );
    }

    // Tests every test file declares at least one test
    // Verified by emptying tests/census.rs
    #[test]
    fn test_test_files_declare_tests() {
        let root = Path::new("tests");
        let files = rust_files(root).unwrap_or_else(|error| panic!("cannot scan tests: {error}"));
        let empty: Vec<PathBuf> = files
            .into_iter()
            .filter(|path| !is_wiring(path))
            .filter(|path| {
                !fs::read_to_string(root.join(path)).is_ok_and(|text| text.contains("#[test]"))
            })
            .collect();
        assert!(
            empty.is_empty(),
            "test files without a #[test]:\n{}",
            listing(empty.iter())
        );
    }

    // Tests each unit test names the mutation it catches on the line above
    // Verified by dropping one `// Verified by` comment in tests/unit/search/census.rs
    #[test]
    fn test_unit_tests_name_their_mutation() {
        let root = Path::new("tests/unit");
        let (_, unit_tests) = modules_and_unit_tests();
        let mut unverified = Vec::new();
        for path in &unit_tests {
            let text = fs::read_to_string(root.join(path))
                .unwrap_or_else(|error| panic!("cannot read {}: {error}", path.display()));
            let lines: Vec<&str> = text.lines().collect();
            for (number, window) in lines.windows(2).enumerate() {
                if window[1].trim() == "#[test]" && !window[0].trim().starts_with("// Verified by") {
                    unverified.push(format!("  - {}:{}", path.display(), number + 2));
                }
            }
        }
        assert!(
            unverified.is_empty(),
            "tests without a `// Verified by` line:\n{}",
            unverified.join("\n")
        );
    }
}
