//! Configuration for stardrift.
//!
//! Settings live in `config.toml` under the platform config directory, or in
//! the file named by `STARDRIFT_CONFIG`. Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use stardrift_core::{AngleStep, CellSize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "STARDRIFT_CONFIG";

const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 120;

/// User configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for the random sky. A new sky every launch when unset.
    pub seed: Option<u64>,
    /// Target frames per second.
    pub fps: u32,
    /// How stars advance each frame: `"fixed"` or `"elapsed"`.
    pub angle_step: AngleStep,
    /// Pixels per terminal cell, horizontally.
    pub cell_width: u16,
    /// Pixels per terminal cell, vertically.
    pub cell_height: u16,
    /// Regenerate comets along with stars when the terminal is resized.
    pub regenerate_comets_on_resize: bool,
    /// Send a new batch of comets once the current one has finished.
    pub relaunch_comets: bool,
}

impl Default for Config {
    fn default() -> Self {
        let cell = CellSize::default();
        Self {
            seed: None,
            fps: 30,
            angle_step: AngleStep::default(),
            cell_width: cell.width,
            cell_height: cell.height,
            regenerate_comets_on_resize: false,
            relaunch_comets: false,
        }
    }
}

impl Config {
    /// Location of the config file, if one can be determined.
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "stardrift").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the config file, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))
    }

    /// Parse TOML and bring out-of-range values back into range.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.fps = config.fps.clamp(MIN_FPS, MAX_FPS);
        config.cell_width = config.cell_width.max(1);
        config.cell_height = config.cell_height.max(1);
        Ok(config)
    }

    pub fn cell_size(&self) -> CellSize {
        CellSize {
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Time budget of one frame at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.clamp(MIN_FPS, MAX_FPS)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.fps, 30);
        assert_eq!(config.angle_step, AngleStep::Elapsed);
        assert_eq!(config.cell_size(), CellSize::default());
        assert!(!config.regenerate_comets_on_resize);
        assert!(!config.relaunch_comets);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
            seed = 1234
            angle_step = "fixed"
            relaunch_comets = true
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.angle_step, AngleStep::Fixed);
        assert!(config.relaunch_comets);
        assert_eq!(config.fps, 30);
        assert_eq!(config.cell_width, 8);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let config = Config::from_toml("fps = 0\ncell_width = 0").unwrap();
        assert_eq!(config.fps, 1);
        assert_eq!(config.cell_width, 1);
        let config = Config::from_toml("fps = 1000").unwrap();
        assert_eq!(config.fps, 120);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::from_toml("angle_step = \"sideways\"").is_err());
        assert!(Config::from_toml("fps = \"fast\"").is_err());
    }

    #[test]
    fn test_frame_interval() {
        let config = Config {
            fps: 50,
            ..Default::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("stardrift-test-does-not-exist.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("stardrift-test-{}.toml", std::process::id()));
        fs::write(&path, "fps = 60\ncell_height = 20\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.fps, 60);
        assert_eq!(config.cell_height, 20);
    }

    #[test]
    fn test_bad_file_reports_path() {
        let path = std::env::temp_dir().join(format!("stardrift-bad-{}.toml", std::process::id()));
        fs::write(&path, "fps = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(format!("{err}").contains("invalid config file"));
    }
}
