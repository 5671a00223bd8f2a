//! Tests for command-line parsing and the search runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use soupcensus::io::cli::{Cli, SearchRunner, generate_root};
    use soupcensus::io::configuration::{
        DEFAULT_HAULS, DEFAULT_PAGE_SIZE, DEFAULT_SOUPS, ROOT_ALPHABET, ROOT_LENGTH,
    };
    use soupcensus::io::record::record_file_name;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests CLI parsing with no arguments uses the defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.rule, "B3/S23");
        assert_eq!(cli.symmetry, "C1");
        assert_eq!(cli.soups, DEFAULT_SOUPS);
        assert_eq!(cli.hauls, DEFAULT_HAULS);
        assert_eq!(cli.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(cli.output, PathBuf::from("."));
        assert_eq!(cli.root, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.quiet);
        assert!(!cli.no_error_correction);
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming the symmetry short flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "-r",
            "b36s23",
            "-y",
            "D8_4",
            "-n",
            "500",
            "--hauls",
            "3",
            "--root",
            "abc",
            "-s",
            "9",
            "-p",
            "6",
            "-o",
            "out",
            "--no-error-correction",
            "--quiet",
        ]);

        assert_eq!(cli.rule, "b36s23");
        assert_eq!(cli.symmetry, "D8_4");
        assert_eq!(cli.soups, 500);
        assert_eq!(cli.hauls, 3);
        assert_eq!(cli.root.as_deref(), Some("abc"));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.page_size, 6);
        assert_eq!(cli.output, PathBuf::from("out"));
        assert!(cli.quiet);
        assert!(!cli.engine_config().error_correction);
    }

    // Tests progress display based on --quiet flag
    // Verified by inverting quiet flag logic
    #[test]
    fn test_should_show_progress() {
        assert!(Cli::parse_from(["program"]).should_show_progress());
        assert!(!Cli::parse_from(["program", "-q"]).should_show_progress());
    }

    // Tests generated roots use the root alphabet and are reproducible
    // Verified by drawing from the full alphanumeric range
    #[test]
    fn test_generate_root() {
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        let root = generate_root(&mut a);
        assert_eq!(root.chars().count(), ROOT_LENGTH);
        assert!(root.chars().all(|c| ROOT_ALPHABET.contains(c)));
        assert_eq!(root, generate_root(&mut b));
    }

    // Tests invalid arguments are rejected before searching
    // Verified by accepting zero soups
    #[test]
    fn test_runner_rejects_invalid_arguments() {
        for args in [
            vec!["program", "-r", "B0/S2"],
            vec!["program", "-y", "C7"],
            vec!["program", "-n", "0"],
            vec!["program", "--hauls", "0"],
            vec!["program", "-p", "0"],
            vec!["program", "--root", "bad root"],
        ] {
            assert!(SearchRunner::new(Cli::parse_from(args)).is_err());
        }
    }

    // Tests a tiny haul writes a census record named after its root
    // Verified by writing the record under the raw root
    #[test]
    fn test_runner_writes_record() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("records");
        let cli = Cli::parse_from([
            "program",
            "-n",
            "1",
            "--root",
            "k",
            "-q",
            "--no-error-correction",
            "-o",
            output.to_str().unwrap(),
        ]);

        let mut runner = SearchRunner::new(cli).unwrap();
        let written = runner.run().unwrap();
        assert_eq!(written, vec![output.join(record_file_name("k"))]);

        let text = fs::read_to_string(&written[0]).unwrap();
        assert!(text.starts_with("@VERSION"));
        assert!(text.contains("@ROOT k\n"));
        assert!(text.contains("@NUM_SOUPS 1\n"));
    }
}
