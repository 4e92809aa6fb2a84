use crate::app::models::{RunStats, RuntimeConfig};
use crate::app::scrubber::scrub_bytes;
use anyhow::{Context, Result};
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Walks the scan root, scrubbing every file that passes the extension filter.
pub struct Scanner<'a> {
    config: &'a RuntimeConfig,
    stats: RunStats,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a RuntimeConfig) -> Self {
        Self {
            config,
            stats: RunStats::default(),
        }
    }

    /// Per-file notices go to `out`. The first walk, read or write error ends the run.
    pub fn scan(&mut self, out: &mut dyn Write) -> Result<RunStats> {
        let exclusions = self.config.exclusions.clone();

        // No ignore files, no hidden filter: the exclusion set alone decides what is skipped.
        let walker = WalkBuilder::new(&self.config.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                if entry.depth() == 0 || !is_dir(entry) {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                if exclusions.is_excluded(&name) {
                    log::debug!("Skipping directory {}", entry.path().display());
                    return false;
                }
                true
            })
            .build();

        for result in walker {
            let entry = result.context("error walking directory tree")?;
            let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
            if is_file && matches_extension(entry.path(), &self.config.extensions) {
                self.process_file(entry.path(), out)?;
            }
        }

        Ok(self.stats)
    }

    fn process_file(&mut self, path: &Path, out: &mut dyn Write) -> Result<()> {
        self.stats.record_scanned();

        let content =
            fs::read(path).with_context(|| format!("failed to read file {}", path.display()))?;
        let scrubbed = scrub_bytes(&content);

        if scrubbed.removed == 0 {
            if self.config.verbose {
                writeln!(out, "No emojis found in: {}", path.display())?;
            }
            return Ok(());
        }

        self.stats.record_emojis(scrubbed.removed);

        if self.config.dry_run {
            writeln!(
                out,
                "WOULD CLEAN: {} ({} emoji(s))",
                path.display(),
                scrubbed.removed
            )?;
            return Ok(());
        }

        // Writing through the existing file keeps its permission bits.
        fs::write(path, &scrubbed.cleaned)
            .with_context(|| format!("failed to write cleaned file {}", path.display()))?;
        self.stats.record_cleaned();
        writeln!(
            out,
            "CLEANED: {} (removed {} emoji(s))",
            path.display(),
            scrubbed.removed
        )?;

        Ok(())
    }
}

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}

/// Case-insensitive check of the file extension against the allow-list.
/// `extensions` must already be lowercased and dot-free; empty accepts everything.
///
/// The extension is whatever follows the last `.` of the file name, so a
/// dotfile such as `.env` has the extension `env`.
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    match name.rfind('.') {
        Some(dot) => {
            let ext = name[dot + 1..].to_lowercase();
            extensions.iter().any(|allowed| *allowed == ext)
        }
        None => false,
    }
}
