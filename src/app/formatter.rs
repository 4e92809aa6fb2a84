use crate::app::models::RunStats;
use std::path::Path;
use std::time::Duration;

const RULE_WIDTH: usize = 50;

pub struct OutputGenerator;

impl OutputGenerator {
    pub fn banner(root: &Path) -> String {
        format!(
            "Emoji Scrub\nScan path: {}\n{}",
            root.display(),
            "-".repeat(RULE_WIDTH)
        )
    }

    pub fn summary(stats: &RunStats, elapsed: Duration, dry_run: bool) -> String {
        let mut out = "-".repeat(RULE_WIDTH);
        out.push('\n');
        out.push_str(if dry_run {
            "Dry run complete, no files were written.\n"
        } else {
            "Scan complete!\n"
        });
        out.push_str(&format!(
            "Total files scanned:        {}\n",
            stats.files_scanned
        ));
        out.push_str(&format!(
            "Files with emojis found:    {}\n",
            stats.files_with_emojis
        ));
        out.push_str(&format!(
            "Files cleaned:              {}\n",
            stats.files_cleaned
        ));
        out.push_str(&format!(
            "Total emojis removed:       {}\n",
            stats.total_emojis_removed
        ));
        out.push_str(&format!(
            "Time taken:                 {}",
            format_elapsed(elapsed)
        ));
        out
    }
}

/// Rounds to whole milliseconds.
fn format_elapsed(elapsed: Duration) -> String {
    let ms = (elapsed.as_micros() + 500) / 1000;
    if ms >= 1000 {
        format!("{}.{:03}s", ms / 1000, ms % 1000)
    } else {
        format!("{ms}ms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_every_counter() {
        let stats = RunStats {
            files_scanned: 7,
            files_with_emojis: 3,
            files_cleaned: 3,
            total_emojis_removed: 11,
        };
        let text = OutputGenerator::summary(&stats, Duration::from_millis(42), false);

        assert!(text.contains("Scan complete!"));
        assert!(text.contains("Total files scanned:        7"));
        assert!(text.contains("Files with emojis found:    3"));
        assert!(text.contains("Files cleaned:              3"));
        assert!(text.contains("Total emojis removed:       11"));
        assert!(text.ends_with("42ms"));
    }

    #[test]
    fn dry_run_summary_says_so() {
        let text = OutputGenerator::summary(&RunStats::default(), Duration::ZERO, true);
        assert!(text.contains("Dry run complete"));
    }

    #[test]
    fn elapsed_is_rounded_to_milliseconds() {
        assert_eq!(format_elapsed(Duration::from_micros(1_499)), "1ms");
        assert_eq!(format_elapsed(Duration::from_micros(1_500)), "2ms");
        assert_eq!(format_elapsed(Duration::from_millis(2_345)), "2.345s");
    }

    #[test]
    fn banner_names_the_root() {
        let text = OutputGenerator::banner(Path::new("/tmp/project"));
        assert!(text.contains("Scan path: /tmp/project"));
    }
}
