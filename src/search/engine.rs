//! Census engine: turns pages of soups into census entries
//!
//! A page is a square of soups. Each soup is stabilised on its own, then
//! the ashes are drawn on a shared page far enough apart not to interact.
//! The page is coalesced, stripped of common junk and segmented; clusters
//! are identified through the object cache or classified from scratch.
//! A page that yields a pathological object is rolled back and processed
//! again after a long fast-forward.

use crate::analysis::classify::{Classification, Period, bijective_period, classify};
use crate::analysis::code::ObjectCode;
use crate::analysis::decompose::decompose;
use crate::analysis::soup::{Soup, SymmetrySpec};
use crate::analysis::stabilise::stabilise;
use crate::io::configuration::{
    DECOMPOSE_SPACESHIP_PERIOD, ERROR_CORRECTION_MARGIN, ERROR_CORRECTION_STEP_SIZE,
    EngineConfig, INITIAL_STEP_SIZE, PAGE_MARGIN,
};
use crate::io::error::{Result, invalid_parameter};
use crate::life::rule::Rule;
use crate::life::sparse::SparseUniverse;
use crate::life::universe::{Junk, RuleTable, Universe};
use crate::search::cache::{DecompositionMap, ObjectCache};
use crate::search::census::{Census, RetainedObject, SoupId};
use crate::search::segment::{PageLayout, PendingCluster, segment};
use log::{debug, warn};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Time spent in each phase, and error-correction resets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    /// Running soups until they stabilise
    pub stabilising: Duration,
    /// Coalescing pages and expunging junk
    pub census_rules: Duration,
    /// Segmenting pages and identifying clusters
    pub segmentation: Duration,
    /// Pages rolled back and reprocessed
    pub resets: u64,
}

/// Outcome of one page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageReport {
    /// Soups processed
    pub soups: usize,
    /// Mean time per soup spent coalescing and identifying, excluding
    /// stabilisation and error correction
    pub mean_delay: Duration,
    /// Pathological objects found on the first pass
    pub pathological: usize,
    /// Whether the page was rolled back and reprocessed
    pub corrected: bool,
}

/// Stabilised remains of one soup
#[derive(Clone, Debug, Default)]
struct Ash {
    cells: Vec<(i32, i32)>,
}

/// Orchestrates stabilisation, segmentation and identification
pub struct CensusEngine {
    template: Box<dyn Universe>,
    symmetry: SymmetrySpec,
    config: EngineConfig,
    stationary_junk: Vec<Junk>,
    expunge_gliders: bool,
    cache: ObjectCache,
    decompositions: DecompositionMap,
    census: Census,
    profile: Profile,
}

impl CensusEngine {
    /// Create an engine backed by the reference universe
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unusable.
    pub fn new(rule: Rule, symmetry: SymmetrySpec, config: EngineConfig) -> Result<Self> {
        Self::with_universe(Box::new(SparseUniverse::new(rule)), symmetry, config)
    }

    /// Create an engine spawning its universes from `template`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unusable: zero periods or
    /// samples, or budgets too large to represent.
    pub fn with_universe(
        template: Box<dyn Universe>,
        symmetry: SymmetrySpec,
        config: EngineConfig,
    ) -> Result<Self> {
        validate(&config)?;

        let rule = template.rule();
        let stationary_junk: Vec<Junk> = Junk::STATIONARY
            .into_iter()
            .filter(|&junk| behaves_as_junk(template.as_ref(), junk))
            .collect();
        let expunge_gliders =
            rule.gliders_exist() && behaves_as_junk(template.as_ref(), Junk::Glider);
        debug!(
            "Rule {rule}: expunging {stationary_junk:?}{}",
            if expunge_gliders { " and gliders" } else { "" }
        );

        Ok(Self {
            template,
            symmetry,
            config,
            stationary_junk,
            expunge_gliders,
            cache: ObjectCache::new(),
            decompositions: DecompositionMap::new(),
            census: Census::new(),
            profile: Profile::default(),
        })
    }

    /// Primary rule
    pub fn rule(&self) -> Rule {
        self.template.rule()
    }

    /// Symmetry soups are generated with
    pub const fn symmetry(&self) -> &SymmetrySpec {
        &self.symmetry
    }

    /// Accumulated census
    pub const fn census(&self) -> &Census {
        &self.census
    }

    /// Mutable access to the census, for compaction between rounds
    pub const fn census_mut(&mut self) -> &mut Census {
        &mut self.census
    }

    /// Object cache
    pub const fn cache(&self) -> &ObjectCache {
        &self.cache
    }

    /// Memoised decompositions
    pub const fn decompositions(&self) -> &DecompositionMap {
        &self.decompositions
    }

    /// Time spent per phase
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Start a new epoch: empty the census and optionally the caches
    pub fn reset_epoch(&mut self, clear_caches: bool) {
        self.census.reset();
        self.profile = Profile::default();
        if clear_caches {
            self.cache.clear();
            self.decompositions.clear();
        }
    }

    /// Generate and process the `side * side` soups starting at `first`
    pub fn process_page(&mut self, root: &str, first: SoupId, side: usize) -> PageReport {
        let soups: Vec<Vec<(i32, i32)>> = (0..(side * side) as u64)
            .map(|i| Soup::generate(root, first + i, &self.symmetry).cells().to_vec())
            .collect();
        self.process_patterns(&soups, first)
    }

    /// Process arbitrary starting patterns as one page of soups
    ///
    /// Pattern `i` is credited to soup `first + i`.
    pub fn process_patterns(&mut self, patterns: &[Vec<(i32, i32)>], first: SoupId) -> PageReport {
        let side = (patterns.len() as f64).sqrt().ceil() as usize;

        let started = Instant::now();
        let mut step_size = INITIAL_STEP_SIZE;
        let mut spacing: i64 = 0;
        let ashes: Vec<Ash> = patterns
            .iter()
            .map(|cells| {
                let mut universe = self.template.spawn();
                universe.put_cells(cells, 0, 0);
                step_size = step_size.max(stabilise(universe.as_mut(), &self.config.stability));
                if let Some(rect) = universe.bounding_rect() {
                    spacing = spacing.max(2 * i64::from(rect.width));
                    spacing = spacing.max(2 * i64::from(rect.height));
                }
                Ash {
                    cells: universe.live_cells(),
                }
            })
            .collect();
        self.profile.stabilising += started.elapsed();

        spacing += (1i64 << (step_size + 1)) + PAGE_MARGIN;

        let mut layout = PageLayout {
            side,
            spacing,
            first,
        };

        let started = Instant::now();
        self.census.checkpoint();
        let pathological = self.census_page(&ashes, &layout, step_size, None);
        let mean_delay = started.elapsed() / patterns.len().max(1) as u32;

        let corrected = pathological > 0 && self.config.error_correction;
        if corrected {
            let undone = self.census.rollback();
            self.profile.resets += 1;
            warn!(
                "Pathological object in soups {}..{}: undid {undone} census entries, reprocessing",
                first,
                first + patterns.len() as SoupId
            );
            layout.spacing += ERROR_CORRECTION_MARGIN;
            let step_size = step_size.max(ERROR_CORRECTION_STEP_SIZE);
            let exponent = self.config.error_correction_exponent;
            self.census_page(&ashes, &layout, step_size, Some(exponent));
        }
        self.census.commit();

        debug!(
            "Page of {} soups from {first}: step size {step_size}, spacing {}, {} cached objects",
            patterns.len(),
            layout.spacing,
            self.cache.len()
        );

        PageReport {
            soups: patterns.len(),
            mean_delay,
            pathological,
            corrected,
        }
    }

    /// Draw, coalesce, segment and identify one page; returns the number of
    /// pathological objects found
    fn census_page(
        &mut self,
        ashes: &[Ash],
        layout: &PageLayout,
        step_size: u32,
        fast_forward: Option<u32>,
    ) -> usize {
        let started = Instant::now();
        let mut page = self.template.spawn();
        for (i, ash) in ashes.iter().enumerate() {
            let (dx, dy) = layout.position(i);
            page.put_cells(&ash.cells, dx, dy);
        }
        if let Some(exponent) = fast_forward {
            page.fast_forward(1 << exponent);
        }
        self.apply_census_rules(page.as_mut(), step_size);
        self.profile.census_rules += started.elapsed();

        let started = Instant::now();
        let mut queue: VecDeque<PendingCluster> = VecDeque::new();
        for cluster in segment(page.as_mut(), layout) {
            let cached = cluster.key.and_then(|key| self.cache.lookup(key).cloned());
            match cached {
                Some(code) => self.count_identified(cluster.soup, &code),
                None => queue.push_back(cluster),
            }
        }

        let mut pathological = 0;
        while let Some(cluster) = queue.pop_front() {
            if self.resolve(&cluster) == Some(ObjectCode::Pathological) {
                pathological += 1;
            }
        }
        self.profile.segmentation += started.elapsed();
        pathological
    }

    /// Coalesce the page for `2^step_size` generations, then expunge and
    /// count junk by the population it removes
    fn apply_census_rules(&mut self, page: &mut dyn Universe, step_size: u32) {
        page.set_rule(RuleTable::Coalesce);
        page.run(1 << step_size);

        let junk = self
            .expunge_gliders
            .then_some(Junk::Glider)
            .into_iter()
            .chain(self.stationary_junk.iter().copied());

        for junk in junk {
            let before = page.population() as i64;
            page.set_rule(RuleTable::Expunge(junk));
            page.run(1);
            let removed = before - page.population() as i64;
            if let Ok(code) = junk.code().parse::<ObjectCode>() {
                self.census.increment(&code, (removed / junk.cells()).max(0) as u64);
            }
        }
    }

    /// Count a cached object, expanding it into its memoised components
    fn count_identified(&mut self, soup: SoupId, code: &ObjectCode) {
        match self.decompositions.get(code) {
            Some(parts) => {
                for part in parts.to_vec() {
                    self.census.record(soup, &part);
                }
            }
            None => self.census.record(soup, code),
        }
    }

    /// Classify a cluster from scratch and count it; returns its code
    fn resolve(&mut self, cluster: &PendingCluster) -> Option<ObjectCode> {
        let mut universe = self.template.spawn();
        universe.put_cells(&cluster.cells, 0, 0);

        let code = match classify(
            universe.as_mut(),
            cluster.population(),
            &self.config.classifier,
        ) {
            Classification::Nothing => return None,
            Classification::Identified(code) => code,
        };

        match &code {
            ObjectCode::Pathological | ObjectCode::Oversized(_) => {
                if code == ObjectCode::Pathological {
                    warn!(
                        "Pathological cluster of {} cells in soup {}",
                        cluster.population(),
                        cluster.soup
                    );
                }
                self.census.retain(RetainedObject {
                    code: code.clone(),
                    soup: cluster.soup,
                    cells: cluster.cells.clone(),
                    offset: cluster.offset,
                });
                self.census.record(cluster.soup, &code);
            }
            ObjectCode::SpaceshipUnion {
                light,
                middle,
                heavy,
            } => {
                for (ship, count) in [
                    (ObjectCode::lwss(), *light),
                    (ObjectCode::mwss(), *middle),
                    (ObjectCode::hwss(), *heavy),
                ] {
                    self.census.increment(&ship, count);
                    for _ in 0..count {
                        self.census.award(cluster.soup, &ship);
                    }
                }
            }
            ObjectCode::StillLife { .. } | ObjectCode::Oscillator { .. } => {
                self.remember(cluster, &code);
                self.enter_decomposed(cluster.soup, &code, universe.as_mut(), false);
            }
            ObjectCode::Spaceship { period, .. } => {
                self.remember(cluster, &code);
                if *period < DECOMPOSE_SPACESHIP_PERIOD {
                    self.enter_decomposed(cluster.soup, &code, universe.as_mut(), true);
                } else {
                    self.census.record(cluster.soup, &code);
                }
            }
            ObjectCode::LinearGrowth { .. } | ObjectCode::PowerLawGrowth(_) => {
                self.census.record(cluster.soup, &code);
            }
        }
        Some(code)
    }

    fn remember(&mut self, cluster: &PendingCluster, code: &ObjectCode) {
        if let Some(key) = cluster.key {
            self.cache.insert(key, code.clone());
        }
    }

    /// Count the pure components of an object, decomposing it on first sight
    fn enter_decomposed(
        &mut self,
        soup: SoupId,
        code: &ObjectCode,
        universe: &mut dyn Universe,
        moving: bool,
    ) {
        let pseudo = self.symmetry.pseudo;
        let max_period = self.config.classifier.max_period;
        let parts = self
            .decompositions
            .get_or_insert_with(code.clone(), || {
                if pseudo {
                    return vec![code.clone()];
                }
                decompose(universe, moving, max_period).unwrap_or_else(|error| {
                    debug!("{error}; counting {code} whole");
                    vec![code.clone()]
                })
            })
            .to_vec();
        for part in &parts {
            self.census.record(soup, part);
        }
    }
}

/// Whether the canonical phase of `junk` has its expected period under the
/// primary rule, so that removing it cannot hide anything else
fn behaves_as_junk(template: &dyn Universe, junk: Junk) -> bool {
    let mut universe = template.spawn();
    universe.put_cells(&junk.seed(), 0, 0);
    let expected = match junk {
        Junk::Glider => Period::Moving(junk.period()),
        _ => Period::Static(junk.period()),
    };
    bijective_period(universe.as_mut(), junk.period()) == expected
}

fn validate(config: &EngineConfig) -> Result<()> {
    let classifier = &config.classifier;
    if classifier.max_period == 0 {
        return Err(invalid_parameter(
            "max_period",
            &classifier.max_period,
            &"must be positive",
        ));
    }
    if classifier.linear_max_period == 0 || classifier.power_samples < 2 {
        return Err(invalid_parameter(
            "linear_max_period/power_samples",
            &format!("{}/{}", classifier.linear_max_period, classifier.power_samples),
            &"need a positive period and at least two samples",
        ));
    }
    if classifier.power_step_exponent >= 63 || config.stability.fallback_exponent >= 63 {
        return Err(invalid_parameter(
            "step exponent",
            &classifier.power_step_exponent.max(config.stability.fallback_exponent),
            &"must be below 63",
        ));
    }
    if config.error_correction_exponent >= 63 {
        return Err(invalid_parameter(
            "error_correction_exponent",
            &config.error_correction_exponent,
            &"must be below 63",
        ));
    }
    if config.stability.cycle_step == 0 {
        return Err(invalid_parameter(
            "cycle_step",
            &config.stability.cycle_step,
            &"must be positive",
        ));
    }
    Ok(())
}
