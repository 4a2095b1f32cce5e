//! Visualizer settings, loadable from JSON.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use pathviz_paths::Algorithm;
use serde::{Deserialize, Serialize};

/// Side length of the default square board.
pub const DEFAULT_GRID_SIZE: usize = 20;

/// Smallest board that holds a distinct start and end.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest board the terminal front-end will lay out.
pub const MAX_GRID_SIZE: usize = 1024;

/// Settings for the board and the replay pacing.
///
/// Every field is optional in the JSON form; missing ones take the
/// [`Default`] value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Rows and columns of the board.
    pub grid_size: usize,
    /// Pause after each visited cell, in milliseconds.
    pub visit_delay_ms: u64,
    /// Pause after each path cell, in milliseconds.
    pub path_delay_ms: u64,
    /// Engine selected at startup.
    pub algorithm: Algorithm,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            visit_delay_ms: 10,
            path_delay_ms: 50,
            algorithm: Algorithm::Bfs,
        }
    }
}

impl VisualizerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s).map_err(ConfigError::Parse)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json(&text)?;
        log::debug!("loaded config from {}: {cfg:?}", path.display());
        Ok(cfg)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        algorithm: Option<Algorithm>,
        grid_size: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if let Some(a) = algorithm {
            self.algorithm = a;
        }
        if let Some(n) = grid_size {
            self.grid_size = n;
        }
        self.validate()?;
        Ok(self)
    }

    /// The board needs room for distinct start and end cells and must fit
    /// the terminal's screen coordinates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        Ok(())
    }

    #[inline]
    pub fn visit_delay(&self) -> Duration {
        Duration::from_millis(self.visit_delay_ms)
    }

    #[inline]
    pub fn path_delay(&self) -> Duration {
        Duration::from_millis(self.path_delay_ms)
    }
}

/// Errors that can occur when loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid configuration JSON.
    Parse(serde_json::Error),
    /// The board size is outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    GridSize(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "config: cannot read {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "config: {e}"),
            Self::GridSize(n) => write!(
                f,
                "config: grid size {n} is out of range ({MIN_GRID_SIZE}..={MAX_GRID_SIZE})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::GridSize(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_page() {
        let cfg = VisualizerConfig::default();
        assert_eq!(cfg.grid_size, 20);
        assert_eq!(cfg.visit_delay(), Duration::from_millis(10));
        assert_eq!(cfg.path_delay(), Duration::from_millis(50));
        assert_eq!(cfg.algorithm, Algorithm::Bfs);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = VisualizerConfig::from_json(r#"{ "algorithm": "astar", "grid_size": 8 }"#).unwrap();
        assert_eq!(cfg.algorithm, Algorithm::AStar);
        assert_eq!(cfg.grid_size, 8);
        assert_eq!(cfg.visit_delay_ms, 10);
        assert_eq!(cfg.path_delay_ms, 50);

        let empty = VisualizerConfig::from_json("{}").unwrap();
        assert_eq!(empty, VisualizerConfig::default());
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(matches!(
            VisualizerConfig::from_json(r#"{ "algorithm": "greedy" }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            VisualizerConfig::from_json(r#"{ "grid_size": 1 }"#),
            Err(ConfigError::GridSize(1))
        ));
    }

    #[test]
    fn overrides_win() {
        let cfg = VisualizerConfig::default()
            .with_overrides(Some(Algorithm::Dfs), Some(12))
            .unwrap();
        assert_eq!(cfg.algorithm, Algorithm::Dfs);
        assert_eq!(cfg.grid_size, 12);

        let kept = VisualizerConfig::default().with_overrides(None, None).unwrap();
        assert_eq!(kept, VisualizerConfig::default());

        assert!(matches!(
            VisualizerConfig::default().with_overrides(None, Some(0)),
            Err(ConfigError::GridSize(0))
        ));
    }

    #[test]
    fn grid_size_has_an_upper_bound() {
        let max = VisualizerConfig::default().with_overrides(None, Some(MAX_GRID_SIZE));
        assert_eq!(max.unwrap().grid_size, MAX_GRID_SIZE);

        let huge = usize::MAX;
        let err = VisualizerConfig::default()
            .with_overrides(None, Some(huge))
            .unwrap_err();
        assert!(matches!(err, ConfigError::GridSize(n) if n == huge));
        assert!(err.to_string().contains("out of range"));

        assert!(matches!(
            VisualizerConfig::from_json(r#"{ "grid_size": 1025 }"#),
            Err(ConfigError::GridSize(1025))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = VisualizerConfig::load(Path::new("/nonexistent/pathviz.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/pathviz.json"));
    }
}
