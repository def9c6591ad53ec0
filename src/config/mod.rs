use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::geometry::Color;
use crate::history::History;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "redoodle";
const APP_CONFIG_FILE: &str = "config.json";

/// Drawing defaults from `config.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DrawingConfig {
    /// Paint color a fresh canvas starts with.
    #[serde(default = "default_color")]
    pub default_color: Color,
    /// Stroke width a fresh canvas starts with.
    #[serde(default = "default_thickness")]
    pub default_thickness: f32,
    /// Maximum combined size of the undo and redo stacks.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Minimum distance an input sample must move before it extends the
    /// in-progress stroke.
    #[serde(default = "default_min_move_distance")]
    pub min_move_distance: f32,
}

fn default_color() -> Color {
    Color::opaque(255, 0, 0)
}

fn default_thickness() -> f32 {
    10.0
}

fn default_history_capacity() -> usize {
    History::DEFAULT_CAPACITY
}

fn default_min_move_distance() -> f32 {
    5.0
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            history_capacity: default_history_capacity(),
            min_move_distance: default_min_move_distance(),
        }
    }
}

impl DrawingConfig {
    /// Replaces values the engine cannot operate with by their defaults.
    fn sanitized(mut self) -> Self {
        if !self.default_thickness.is_finite() || self.default_thickness <= 0.0 {
            tracing::warn!(
                thickness = self.default_thickness,
                "ignoring non-positive default thickness; using default"
            );
            self.default_thickness = default_thickness();
        }
        if self.history_capacity == 0 {
            tracing::warn!("ignoring zero history capacity; using default");
            self.history_capacity = default_history_capacity();
        }
        if !self.min_move_distance.is_finite() || self.min_move_distance < 0.0 {
            tracing::warn!(
                distance = self.min_move_distance,
                "ignoring negative minimum move distance; using default"
            );
            self.min_move_distance = default_min_move_distance();
        }
        self
    }
}

pub fn load_drawing_config() -> DrawingConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_drawing_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_drawing_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> DrawingConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return DrawingConfig::default(),
    };
    if !path.exists() {
        return DrawingConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str::<DrawingConfig>(&contents)
            .map(DrawingConfig::sanitized)
            .unwrap_or_else(|err| {
                tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
                DrawingConfig::default()
            }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            DrawingConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "redoodle",
            "config.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/redoodle/config.json"));
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path("redoodle", "config.json", None, Some(Path::new("/tmp/home")))
            .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/redoodle/config.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("redoodle", "config.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn missing_dirs_fall_back_to_defaults() {
        let config = load_drawing_config_with(None, None);
        assert_eq!(config, DrawingConfig::default());
    }

    #[test]
    fn parsed_fields_fill_gaps_with_defaults() {
        let config: DrawingConfig =
            serde_json::from_str(r#"{ "history_capacity": 7 }"#).expect("json should parse");

        assert_eq!(config.history_capacity, 7);
        assert_eq!(config.default_thickness, 10.0);
        assert_eq!(config.default_color, Color::opaque(255, 0, 0));
        assert_eq!(config.min_move_distance, 5.0);
    }

    #[test]
    fn sanitize_restores_unusable_values() {
        let config = DrawingConfig {
            default_thickness: -3.0,
            history_capacity: 0,
            min_move_distance: f32::NAN,
            ..DrawingConfig::default()
        }
        .sanitized();

        assert_eq!(config, DrawingConfig::default());
    }
}
