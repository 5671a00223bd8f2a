//! Progress display for hauls of soups

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SOUP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} soups {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static HAUL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Hauls: {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates the haul counter and the per-haul soup bar
pub struct ProgressManager {
    multi_progress: MultiProgress,
    haul_bar: Option<ProgressBar>,
    soup_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            haul_bar: None,
            soup_bar: None,
        }
    }

    /// Show the haul counter when more than one haul is planned
    pub fn initialize(&mut self, hauls: u64) {
        if hauls > 1 {
            let bar = ProgressBar::new(hauls);
            bar.set_style(HAUL_STYLE.clone());
            self.haul_bar = Some(self.multi_progress.add(bar));
        }
    }

    /// Start the soup bar of a haul
    pub fn start_haul(&mut self, root: &str, soups: u64) {
        if let Some(bar) = self.soup_bar.take() {
            bar.finish_and_clear();
        }
        let bar = ProgressBar::new(soups);
        bar.set_style(SOUP_STYLE.clone());
        bar.set_prefix(root.to_string());
        self.soup_bar = Some(self.multi_progress.add(bar));
    }

    /// Report soups processed so far and the overall rate
    pub fn update(&self, processed: u64, elapsed: Duration, page_side: usize) {
        if let Some(ref bar) = self.soup_bar {
            bar.set_position(processed);
            let rate = processed as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
            bar.set_message(format!("({rate:.0}/s, page {page_side}x{page_side})"));
        }
    }

    /// Mark the current haul as complete
    pub fn complete_haul(&self, objects: u64) {
        if let Some(ref bar) = self.soup_bar {
            bar.set_message(format!("done, {objects} objects"));
            bar.finish();
        }
        if let Some(ref bar) = self.haul_bar {
            bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.haul_bar {
            bar.finish_with_message("All hauls complete");
        }
        let _ = self.multi_progress.clear();
    }
}
