use crossterm::style::Color;
use mazecore::{Dims, MazeSpec};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{constants::base_path, error::AppError};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub wall: Color,
    pub start: Color,
    pub exit: Color,
    pub solution: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            wall: Color::White,
            start: Color::Green,
            exit: Color::Red,
            solution: Color::Blue,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub solve: Option<bool>,
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_size(&self) -> Dims {
        let Dims(w, h) = MazeSpec::DEFAULT_SIZE;
        Dims(self.width.unwrap_or(w), self.height.unwrap_or(h))
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_solve(&self) -> bool {
        self.solve.unwrap_or(true)
    }

    pub fn get_color_scheme(&self) -> ColorScheme {
        self.color_scheme.clone().unwrap_or_default()
    }

    pub fn default_path() -> PathBuf {
        base_path().join("settings.ron")
    }

    pub fn parse(path: &Path, text: &str) -> Result<Self, AppError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(text)
            .map_err(|source| AppError::Settings {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Loads the settings, writing the defaults first if the file doesn't exist yet.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            let text = fs::read_to_string(path)?;
            Self::parse(path, &text)
        } else {
            log::info!("Creating default settings at {:?}", path);
            Self::reset_config(path)?;
            Self::parse(path, DEFAULT_SETTINGS)
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
