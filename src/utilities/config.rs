// Copyright (C) 2024 Bellande Artificial Intelligence Computer Vision Research Innovation Center, Ronaldson Bellande

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::core::error::BellandeError;
use crate::data::image_folder::{LabeledImageFolder, DEFAULT_PATTERN};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DatasetConfig {
    pub root: PathBuf,
    pub split: String,
    pub categories: Vec<String>,
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            root: PathBuf::from("data"),
            split: "train".to_string(),
            categories: Vec::new(),
            pattern: default_pattern(),
        }
    }
}

impl DatasetConfig {
    pub fn new<P: Into<PathBuf>>(root: P, split: &str, categories: &[&str]) -> Self {
        DatasetConfig {
            root: root.into(),
            split: split.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            pattern: default_pattern(),
        }
    }

    /// Loads a configuration from YAML, or JSON when the file ends in `.json`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BellandeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: DatasetConfig = match Format::from_path(path) {
            Format::Json => serde_json::from_str(&content)?,
            Format::Yaml => serde_yaml::from_str(&content)?,
        };

        config
            .validate()
            .map_err(BellandeError::InvalidConfiguration)?;

        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BellandeError> {
        let path = path.as_ref();
        let content = match Format::from_path(path) {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Yaml => serde_yaml::to_string(self)?,
        };
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        // Split names a single directory below the root
        let mut components = Path::new(&self.split).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return Err(format!("Split {:?} must be a single directory name", self.split)),
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.is_empty() {
                return Err("Category names cannot be empty".to_string());
            }
            if !seen.insert(category.as_str()) {
                return Err(format!("Duplicate category {:?}", category));
            }
        }

        glob::Pattern::new(&self.pattern)
            .map_err(|e| format!("Invalid file pattern {:?}: {}", self.pattern, e))?;

        // Missing directories are fine, they just index nothing
        Ok(())
    }

    pub fn build(&self) -> Result<LabeledImageFolder, BellandeError> {
        self.validate().map_err(BellandeError::InvalidConfiguration)?;
        LabeledImageFolder::with_pattern(
            &self.root,
            &self.split,
            self.categories.iter().cloned(),
            &self.pattern,
        )
    }
}
