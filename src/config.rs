//! Presentation settings
//!
//! Window, viewport and camera settings stored as RON. The grid itself,
//! its percentage table and the axis option table are fixed and not part
//! of the configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::overlay::{AxisOption, VerticalOption};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "cube-viz.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Camera start settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians of orbit per pixel dragged
    pub orbit_sensitivity: f32,
    /// Zoom factor per scroll step
    pub zoom_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [1.0, 2.0, 3.0],
            target: [0.0, 0.0, 0.0],
            fov_deg: 70.0,
            near: 0.1,
            far: 50.0,
            min_distance: 0.5,
            max_distance: 20.0,
            orbit_sensitivity: 0.008,
            zoom_step: 0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub window_width: i32,
    pub window_height: i32,
    /// Share of the window width taken by the 3D viewport
    pub viewport_fraction: f32,
    /// Viewport background as 0xRRGGBB
    pub background: u32,
    pub show_pie_charts: bool,
    /// Starting value of the vertical axis dropdown, e.g. "organisationOption"
    pub initial_vertical: String,
    pub camera: CameraConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 800,
            viewport_fraction: 0.75,
            background: 0xfff0ff,
            show_pie_charts: true,
            initial_vertical: VerticalOption::System.value().to_string(),
            camera: CameraConfig::default(),
        }
    }
}

impl VizConfig {
    /// Parse and validate a RON document
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        let config: VizConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&content)
    }

    /// The vertical axis option to start with
    pub fn vertical_option(&self) -> Option<VerticalOption> {
        VerticalOption::from_value(&self.initial_vertical)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Load the first config found in `candidates`, or defaults if none exist.
    /// A file that exists but fails to load is an error.
    pub fn load_first(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        for path in candidates {
            if path.is_file() {
                log::info!("Loading configuration from {}", path.display());
                return Self::load(path);
            }
        }
        log::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn fail(msg: String) -> Result<(), ConfigError> {
            Err(ConfigError::Validation(msg))
        }

        if self.window_width <= 0 || self.window_height <= 0 {
            return fail(format!(
                "window size must be positive ({}x{})",
                self.window_width, self.window_height
            ));
        }
        if !(self.viewport_fraction > 0.0 && self.viewport_fraction <= 1.0) {
            return fail(format!("viewport_fraction {} not in (0, 1]", self.viewport_fraction));
        }
        if self.background > 0xffffff {
            return fail(format!("background {:#x} is not an RGB color", self.background));
        }
        if self.vertical_option().is_none() {
            return fail(format!("unknown initial_vertical {:?}", self.initial_vertical));
        }

        let cam = &self.camera;
        let scalars = [
            cam.fov_deg,
            cam.near,
            cam.far,
            cam.min_distance,
            cam.max_distance,
            cam.orbit_sensitivity,
            cam.zoom_step,
        ];
        let all_finite = cam.position.iter().chain(cam.target.iter()).all(|v| v.is_finite())
            && scalars.iter().all(|v| v.is_finite());
        if !all_finite {
            return fail("camera values must be finite".to_string());
        }
        if !(cam.fov_deg > 1.0 && cam.fov_deg < 179.0) {
            return fail(format!("fov_deg {} not in (1, 179)", cam.fov_deg));
        }
        if !(cam.near > 0.0 && cam.near < cam.far) {
            return fail(format!("need 0 < near < far (near {}, far {})", cam.near, cam.far));
        }
        if !(cam.min_distance > 0.0 && cam.min_distance <= cam.max_distance) {
            return fail(format!(
                "need 0 < min_distance <= max_distance ({} / {})",
                cam.min_distance, cam.max_distance
            ));
        }
        if !(cam.zoom_step > 0.0 && cam.zoom_step < 1.0) {
            return fail(format!("zoom_step {} not in (0, 1)", cam.zoom_step));
        }
        if cam.position == cam.target {
            return fail("camera position and target coincide".to_string());
        }
        Ok(())
    }
}

/// Config file locations in lookup order: explicit path, working directory,
/// then the user config directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn config_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
    }
    paths.push(PathBuf::from(LOCAL_CONFIG_FILE));
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("cube-viz").join("config.ron"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = VizConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.background, 0xfff0ff);
        assert_eq!(config.camera.position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let doc = "(show_pie_charts: false, camera: (fov_deg: 60.0))";
        let config = VizConfig::from_ron(doc).unwrap();
        assert!(!config.show_pie_charts);
        assert_eq!(config.camera.fov_deg, 60.0);
        assert_eq!(config.camera.near, 0.1);
        assert_eq!(config.viewport_fraction, 0.75);
    }

    #[test]
    fn test_malformed_document() {
        let err = VizConfig::from_ron("(window_width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {:?}", err);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = VizConfig::from_ron("(viewport_fraction: 1.5)").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = VizConfig::from_ron("(camera: (near: 60.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = VizConfig::from_ron("(background: 16777216)").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_initial_vertical_accepts_leadership_spelling() {
        let config = VizConfig::from_ron("(initial_vertical: \"leadershipStyleOption\")").unwrap();
        assert_eq!(config.vertical_option(), Some(VerticalOption::ManagementStyle));

        let config = VizConfig::default();
        assert_eq!(config.vertical_option(), Some(VerticalOption::System));

        let err = VizConfig::from_ron("(initial_vertical: \"sideways\")").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");

        let mut config = VizConfig::default();
        config.viewport_fraction = 0.6;
        config.camera.position = [2.0, 2.0, 2.0];
        std::fs::write(&path, config.to_ron().unwrap()).unwrap();

        let loaded = VizConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_first_skips_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.ron");
        let present = dir.path().join("present.ron");
        std::fs::write(&present, "(window_width: 640)").unwrap();

        let config = VizConfig::load_first(&[missing.clone(), present]).unwrap();
        assert_eq!(config.window_width, 640);

        let config = VizConfig::load_first(&[missing]).unwrap();
        assert_eq!(config, VizConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = VizConfig::load(&dir.path().join("nope.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
