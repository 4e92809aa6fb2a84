use std::collections::HashSet;
use std::path::PathBuf;

/// Directory names that are never descended into, on top of any dot-directory.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", "__pycache__", "vendor", "target"];

/// Represents the final configuration after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    /// Lowercased extensions without the leading dot. Empty means every file.
    pub extensions: Vec<String>,
    pub exclusions: DirExclusions,
    pub verbose: bool,
    pub dry_run: bool,
}

/// Directory basenames the walker must skip, including their whole subtree.
#[derive(Debug, Clone)]
pub struct DirExclusions {
    names: HashSet<String>,
}

impl DirExclusions {
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: HashSet<String> = DEFAULT_EXCLUDED_DIRS
            .iter()
            .map(|s| s.to_string())
            .collect();
        names.extend(extra.into_iter().map(Into::into));
        Self { names }
    }

    /// Hidden directories (leading `.`) are always excluded.
    pub fn is_excluded(&self, name: &str) -> bool {
        name.starts_with('.') || self.names.contains(name)
    }
}

impl Default for DirExclusions {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

/// Counters for a single run. Only the scanner mutates them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub files_scanned: usize,
    pub files_with_emojis: usize,
    pub files_cleaned: usize,
    pub total_emojis_removed: usize,
}

impl RunStats {
    pub fn record_scanned(&mut self) {
        self.files_scanned += 1;
    }

    pub fn record_emojis(&mut self, removed: usize) {
        self.files_with_emojis += 1;
        self.total_emojis_removed += removed;
    }

    pub fn record_cleaned(&mut self) {
        self.files_cleaned += 1;
    }
}
