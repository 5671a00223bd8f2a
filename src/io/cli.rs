//! Command-line interface: hauls of soups searched and written as census
//! records

use crate::analysis::soup::SymmetrySpec;
use crate::io::configuration::{
    DEFAULT_HAULS, DEFAULT_PAGE_SIZE, DEFAULT_RULE, DEFAULT_SOUPS, DEFAULT_SYMMETRY, EngineConfig,
    ROOT_ALPHABET, ROOT_LENGTH, TOP_SCORES,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::record::{HaulHeader, log_summary, render, write_record};
use crate::life::rule::Rule;
use crate::search::engine::CensusEngine;
use crate::search::scheduler::PageScheduler;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "soupcensus")]
#[command(
    author,
    version,
    about = "Search random soups and census the objects they leave behind"
)]
/// Command-line arguments for the soup search
pub struct Cli {
    /// Outer-totalistic rule, as B3/S23 or b3s23
    #[arg(short, long, default_value = DEFAULT_RULE)]
    pub rule: String,

    /// Soup symmetry, e.g. C1, D8_4, iC1 or Pseudo_C1_Test
    #[arg(short = 'y', long, default_value = DEFAULT_SYMMETRY)]
    pub symmetry: String,

    /// Soups searched per haul
    #[arg(short = 'n', long, default_value_t = DEFAULT_SOUPS)]
    pub soups: u64,

    /// Number of hauls; each gets a fresh root and census record
    #[arg(long, default_value_t = DEFAULT_HAULS)]
    pub hauls: u64,

    /// Root of the first haul instead of a random one
    #[arg(long)]
    pub root: Option<String>,

    /// Seed for generating roots reproducibly
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Initial square root of the soups per page
    #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Directory census records are written to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Accept pages with pathological objects without reprocessing them
    #[arg(long)]
    pub no_error_correction: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine configuration selected by the flags
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            error_correction: !self.no_error_correction,
            ..EngineConfig::default()
        }
    }
}

/// Draw a haul root from the unambiguous root alphabet
pub fn generate_root(rng: &mut impl Rng) -> String {
    let alphabet: Vec<char> = ROOT_ALPHABET.chars().collect();
    (0..ROOT_LENGTH)
        .filter_map(|_| alphabet.get(rng.random_range(0..alphabet.len())))
        .collect()
}

/// Runs hauls and writes their census records
pub struct SearchRunner {
    cli: Cli,
    rule: Rule,
    symmetry: SymmetrySpec,
    rng: StdRng,
    progress_manager: Option<ProgressManager>,
}

impl SearchRunner {
    /// Validate the arguments and prepare a run
    ///
    /// # Errors
    ///
    /// Returns an error if the rule or symmetry is invalid, a count is
    /// zero, or the root is empty or not alphanumeric.
    pub fn new(cli: Cli) -> Result<Self> {
        let rule = Rule::parse(&cli.rule)?;
        let symmetry: SymmetrySpec = cli.symmetry.parse()?;

        if cli.soups == 0 {
            return Err(invalid_parameter("soups", &cli.soups, &"must be positive"));
        }
        if cli.hauls == 0 {
            return Err(invalid_parameter("hauls", &cli.hauls, &"must be positive"));
        }
        if cli.page_size == 0 {
            return Err(invalid_parameter(
                "page-size",
                &cli.page_size,
                &"must be positive",
            ));
        }
        if let Some(root) = &cli.root {
            if root.is_empty() || !root.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid_parameter(
                    "root",
                    root,
                    &"must be non-empty and alphanumeric",
                ));
            }
        }

        let rng = cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            rule,
            symmetry,
            rng,
            progress_manager,
        })
    }

    /// Run every haul, returning the paths of the records written
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects its configuration or a record
    /// cannot be written.
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        let mut engine = CensusEngine::new(self.rule, self.symmetry, self.cli.engine_config())?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.hauls);
        }

        let mut written = Vec::new();
        for haul in 0..self.cli.hauls {
            let root = match (&self.cli.root, haul) {
                (Some(root), 0) => root.clone(),
                _ => generate_root(&mut self.rng),
            };
            written.push(self.run_haul(&mut engine, &root)?);
            // Caches stay valid across hauls of the same rule
            engine.reset_epoch(false);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        Ok(written)
    }

    fn run_haul(&mut self, engine: &mut CensusEngine, root: &str) -> Result<PathBuf> {
        info!(
            "Searching {} soups of {} in {} from root {root}",
            self.cli.soups, self.symmetry, self.rule
        );
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_haul(root, self.cli.soups);
        }

        let started = Instant::now();
        let mut scheduler = PageScheduler::new(self.cli.page_size, self.cli.soups);
        while let Some(page) = scheduler.next_page() {
            let report = engine.process_page(root, page.first, page.side);
            if scheduler.complete(page, report.mean_delay) {
                engine.census_mut().compact_scores(TOP_SCORES);
            }
            if let Some(ref pm) = self.progress_manager {
                pm.update(scheduler.processed(), started.elapsed(), page.side);
            }
        }

        let profile = engine.profile();
        info!(
            "Haul {root} done in {:.1?}: stabilising {:.1?}, census rules {:.1?}, \
             segmentation {:.1?}, {} resets, {} cached objects",
            started.elapsed(),
            profile.stabilising,
            profile.census_rules,
            profile.segmentation,
            profile.resets,
            engine.cache().len()
        );

        let header = HaulHeader {
            root,
            rule: self.rule,
            symmetry: &self.symmetry,
            soups: scheduler.processed(),
        };
        log_summary(engine.census(), root);
        let record = render(engine.census(), &header);
        if let Some(ref pm) = self.progress_manager {
            pm.complete_haul(record.objects);
        }
        write_record(&self.cli.output, root, &record)
    }
}
