use crate::app::cli::Cli;
use crate::app::models::{DirExclusions, RuntimeConfig};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PresetConfig {
    extensions: Option<Vec<String>>,
    exclude_dirs: Option<Vec<String>>,
    verbose: Option<bool>,
}

/// No home directory means no presets file to look at.
fn presets_path(home: Option<PathBuf>) -> Option<PathBuf> {
    Some(home?.join(".config").join("emoji_scrub").join("presets.toml"))
}

/// A missing file yields no presets; a broken one is an error.
pub fn load_presets_file(config_path: &Path) -> Result<HashMap<String, PresetConfig>> {
    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config at {:?}", config_path))?;

    let parsed: PresetsFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {:?}", config_path))?;

    Ok(parsed.presets)
}

fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let presets = match presets_path(dirs::home_dir()) {
        Some(path) => load_presets_file(&path)?,
        None => {
            log::debug!("No home directory, skipping presets");
            HashMap::new()
        }
    };
    resolve_with_presets(cli, &presets)
}

/// Validates the scan root, then layers CLI values over the chosen preset.
pub fn resolve_with_presets(
    cli: Cli,
    presets: &HashMap<String, PresetConfig>,
) -> Result<RuntimeConfig> {
    let root = match cli.path {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    if !root.exists() {
        bail!("scan root {} does not exist", root.display());
    }
    if !root.is_dir() {
        bail!("scan root {} is not a directory", root.display());
    }

    // Preset to use: CLI flag > directory name > none
    let root_name = root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()));
    let preset = match cli.preset.as_deref() {
        Some(name) => match presets.get(name) {
            Some(p) => p.clone(),
            None => bail!("preset '{}' not found in presets.toml", name),
        },
        None => root_name
            .as_deref()
            .and_then(|name| presets.get(name))
            .cloned()
            .unwrap_or_default(),
    };
    log::debug!("Using preset {:?}", preset);

    let extensions = merge_vecs(preset.extensions, cli.extensions)
        .iter()
        .map(|e| normalize_extension(e))
        .filter(|e| !e.is_empty())
        .collect::<Vec<_>>();

    Ok(RuntimeConfig {
        root,
        extensions: merge_vecs(Some(extensions), None),
        exclusions: DirExclusions::new(merge_vecs(preset.exclude_dirs, cli.exclude_dirs)),
        verbose: cli.verbose || preset.verbose.unwrap_or(false),
        dry_run: cli.dry_run,
    })
}
