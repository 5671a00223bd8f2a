//! Census records: the textual summary of a haul
//!
//! A record holds a header, the census table (most common objects first),
//! the best-scoring soups and the sample soups of every object. Canonised
//! objects are verified before they are written; an object whose code does
//! not reproduce itself after its period is left out and logged.

use crate::analysis::canon::decode;
use crate::analysis::code::ObjectCode;
use crate::analysis::soup::SymmetrySpec;
use crate::io::configuration::{RECORD_PREFIX, RECORD_VERSION, SUMMARY_OBJECTS, TOP_SCORES};
use crate::io::error::{Result, WithContext};
use crate::life::rule::Rule;
use crate::life::sparse::SparseUniverse;
use crate::life::universe::Universe;
use crate::math::digest::md5_hex;
use crate::search::census::Census;
use crate::search::scoring::common_name;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Identity of a haul
#[derive(Clone, Debug)]
pub struct HaulHeader<'a> {
    /// Root the soup seeds were derived from
    pub root: &'a str,
    /// Primary rule
    pub rule: Rule,
    /// Soup symmetry
    pub symmetry: &'a SymmetrySpec,
    /// Soups searched
    pub soups: u64,
}

/// Rendered census record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CensusRecord {
    /// Record text
    pub text: String,
    /// Objects counted in the record
    pub objects: u64,
    /// Codes left out because they failed verification
    pub rejected: Vec<ObjectCode>,
}

/// Whether a canonised code reproduces itself after its period
///
/// Codes without a shape have nothing to verify and always pass; codes
/// whose shape cannot be decoded fail.
pub fn verify_object(rule: Rule, code: &ObjectCode) -> bool {
    let (Some(shape), Some(period)) = (code.shape(), code.period()) else {
        return true;
    };
    let Ok(cells) = decode(shape) else {
        return false;
    };

    let mut universe = SparseUniverse::with_cells(rule, &cells);
    let Some(before) = snapshot(&universe) else {
        return false;
    };
    universe.run(period);
    snapshot(&universe) == Some(before)
}

fn snapshot(universe: &dyn Universe) -> Option<(usize, u64)> {
    let rect = universe.bounding_rect()?;
    Some((universe.population(), universe.hash_region(rect)))
}

/// Render the census record of a haul
pub fn render(census: &Census, header: &HaulHeader<'_>) -> CensusRecord {
    let mut table = Vec::new();
    let mut verified: Vec<&ObjectCode> = Vec::new();
    let mut rejected = Vec::new();
    let mut objects = 0;

    for (code, count) in census.sorted_counts() {
        if verify_object(header.rule, code) {
            objects += count;
            verified.push(code);
            table.push(format!("{code} {count}"));
        } else {
            warn!("Object {code} failed verification and was left out of the census");
            rejected.push(code.clone());
        }
    }

    let mut lines = vec![
        format!("@VERSION {RECORD_VERSION}"),
        format!("@MD5 {}", md5_hex(header.root)),
        format!("@ROOT {}", header.root),
        format!("@RULE {}", header.rule.alphanumeric()),
        format!("@SYMMETRY {}", header.symmetry),
        format!("@NUM_SOUPS {}", header.soups),
        format!("@NUM_OBJECTS {objects}"),
        String::new(),
        "@CENSUS TABLE".to_string(),
    ];
    lines.extend(table);
    lines.push(String::new());

    lines.push(format!("@TOP {TOP_SCORES}"));
    lines.extend(
        census
            .top_scores(TOP_SCORES)
            .into_iter()
            .map(|(soup, score)| format!("{soup} {score}")),
    );
    lines.push(String::new());

    lines.push("@SAMPLE_SOUPIDS".to_string());
    for code in verified {
        let samples = census.samples(code);
        if samples.is_empty() {
            continue;
        }
        let soups: Vec<String> = samples.iter().map(ToString::to_string).collect();
        lines.push(format!("{code} {}", soups.join(" ")));
    }

    let mut text = lines.join("\n");
    text.push('\n');

    CensusRecord {
        text,
        objects,
        rejected,
    }
}

/// Code of an object followed by its familiar name, if it has one
pub fn describe(code: &ObjectCode) -> String {
    let text = code.to_string();
    match common_name(&text) {
        Some(name) => format!("{text} ({name})"),
        None => text,
    }
}

/// Log the size of a census and its most common objects
pub fn log_summary(census: &Census, root: &str) {
    info!(
        "Haul {root}: {} objects of {} kinds",
        census.total_objects(),
        census.distinct_objects()
    );
    for (code, count) in census.sorted_counts().into_iter().take(SUMMARY_OBJECTS) {
        info!("{count:>12}  {}", describe(code));
    }
}

/// File name of the record of a haul
pub fn record_file_name(root: &str) -> String {
    format!("{RECORD_PREFIX}{}.txt", md5_hex(root))
}

/// Write `record` into `directory`, creating the directory if needed
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be written.
pub fn write_record(directory: &Path, root: &str, record: &CensusRecord) -> Result<PathBuf> {
    fs::create_dir_all(directory).with_path(directory, "create directory")?;
    let path = directory.join(record_file_name(root));
    fs::write(&path, &record.text).with_path(&path, "write census record")?;
    info!(
        "Wrote census of {} objects to {}",
        record.objects,
        path.display()
    );
    Ok(path)
}
