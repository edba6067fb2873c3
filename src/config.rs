//! Configuration module for Waypoint
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WAYPOINT_*)
//! 3. User config (~/.waypoint/config.toml)
//! 4. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{WaypointError, WaypointResult};
use crate::infrastructure::default_workbook_path;

/// When to emit ANSI color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal (default)
    #[default]
    Auto,
    Always,
    Never,
}

/// Workbook location configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkbookConfig {
    /// Snapshot file path; `WAYPOINT_WORKBOOK_PATH` overrides it
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub workbook: WorkbookConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> WaypointResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> WaypointResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| WaypointError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .last()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key: key.clone(),
                    file: path.to_path_buf(),
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load the user config if one exists. A missing file yields the
    /// defaults; a file that exists but fails to parse is an error.
    pub fn load_or_default() -> WaypointResult<(Self, Vec<ConfigWarning>)> {
        match config_path() {
            Some(path) if path.exists() => Self::load_with_warnings(&path),
            _ => Ok((Self::default(), Vec::new())),
        }
    }

    /// Resolved snapshot location: `WAYPOINT_WORKBOOK_PATH` wins, then
    /// `[workbook] path`, then `~/.waypoint/workbook.json`
    pub fn workbook_path(&self) -> PathBuf {
        if let Ok(path) = std::env::var("WAYPOINT_WORKBOOK_PATH") {
            return PathBuf::from(path);
        }
        match &self.workbook.path {
            Some(path) => path.clone(),
            None => default_workbook_path(),
        }
    }
}

/// Config file location: `WAYPOINT_CONFIG_PATH` or `~/.waypoint/config.toml`
fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("WAYPOINT_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".waypoint").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["workbook", "path", "output", "color", "unicode"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
