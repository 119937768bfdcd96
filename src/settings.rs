use std::{fs, path::PathBuf, str::FromStr};

use log::LevelFilter;
use mazecore::{Algorithm, Dims, MazeOptions};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

pub const DEFAULT_WIDTH: i32 = 20;
pub const DEFAULT_HEIGHT: i32 = 12;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    width: Option<i32>,
    #[serde(default)]
    height: Option<i32>,
    #[serde(default)]
    algorithm: Option<Algorithm>,
    #[serde(default)]
    start: Option<Dims>,
    #[serde(default)]
    goal: Option<Dims>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log_level: Option<String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mazegame").join("settings.ron"))
    }

    pub fn set_width(mut self, value: i32) -> Self {
        self.width = Some(value);
        self
    }

    pub fn get_width(&self) -> i32 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    pub fn set_height(mut self, value: i32) -> Self {
        self.height = Some(value);
        self
    }

    pub fn get_height(&self) -> i32 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn set_algorithm(mut self, value: Algorithm) -> Self {
        self.algorithm = Some(value);
        self
    }

    pub fn get_algorithm(&self) -> Algorithm {
        self.algorithm.unwrap_or_default()
    }

    pub fn set_start(mut self, value: Dims) -> Self {
        self.start = Some(value);
        self
    }

    pub fn get_start(&self) -> Option<Dims> {
        self.start
    }

    pub fn set_goal(mut self, value: Dims) -> Self {
        self.goal = Some(value);
        self
    }

    pub fn get_goal(&self) -> Option<Dims> {
        self.goal
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_log_level(&self) -> Result<LevelFilter> {
        match &self.log_level {
            Some(level) => {
                LevelFilter::from_str(level).map_err(|_| Error::InvalidLogLevel(level.clone()))
            }
            None => Ok(LevelFilter::Warn),
        }
    }

    /// Overlays every field set in `other` on top of `self`.
    pub fn merge(self, other: Settings) -> Self {
        Self {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            algorithm: other.algorithm.or(self.algorithm),
            start: other.start.or(self.start),
            goal: other.goal.or(self.goal),
            seed: other.seed.or(self.seed),
            log_level: other.log_level.or(self.log_level),
        }
    }

    pub fn maze_options(&self) -> Result<MazeOptions> {
        let mut options = MazeOptions::new(self.get_width(), self.get_height())?
            .with_algorithm(self.get_algorithm())
            .with_seed(self.get_seed());

        if let Some(start) = self.get_start() {
            options = options.with_start(start);
        }
        if let Some(goal) = self.get_goal() {
            options = options.with_goal(goal);
        }

        Ok(options)
    }

    pub fn parse(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(source)
    }

    /// Reads the settings at `path`, writing the defaults there first if
    /// the file doesn't exist yet.
    pub fn load(path: PathBuf) -> Result<Self> {
        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("writing default settings to {:?}", path);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, DEFAULT_SETTINGS)?;
                DEFAULT_SETTINGS.to_owned()
            }
            Err(err) => return Err(err.into()),
        };

        Self::parse(&source).map_err(|source| Error::Settings { path, source })
    }

    pub fn builtin() -> Self {
        Self::parse(DEFAULT_SETTINGS).unwrap_or_default()
    }
}
