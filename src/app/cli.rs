use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Strip emoji from every text file under a directory, in place"
)]
pub struct Cli {
    /// Directory to scan (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Only process files with these extensions (e.g., 'md' 'txt')
    #[arg(long = "ext", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Extra directory names to skip, on top of the built-in list
    #[arg(long = "exclude-dir", num_args = 1..)]
    pub exclude_dirs: Option<Vec<String>>,

    /// Report files that contain no emoji
    #[arg(short, long)]
    pub verbose: bool,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "emoji_scrub",
            "docs",
            "--ext",
            "md",
            "txt",
            "--exclude-dir",
            "build",
            "-v",
            "--dry-run",
        ]);
        assert_eq!(cli.path, Some(PathBuf::from("docs")));
        assert_eq!(cli.extensions, Some(vec!["md".into(), "txt".into()]));
        assert_eq!(cli.exclude_dirs, Some(vec!["build".into()]));
        assert!(cli.verbose);
        assert!(cli.dry_run);
    }

    #[test]
    fn defaults_are_empty() {
        let cli = Cli::parse_from(["emoji_scrub"]);
        assert!(cli.path.is_none());
        assert!(cli.extensions.is_none());
        assert!(!cli.verbose);
        assert!(!cli.dry_run);
    }
}
