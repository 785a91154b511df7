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
use crate::data::dataset::Dataset;
use glob::{MatchOptions, Pattern};
use image::{ImageReader, RgbImage};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name pattern used when none is given
pub const DEFAULT_PATTERN: &str = "*.jpg";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Image dataset laid out as `root/split/<category>/<image>`
///
/// Category `i` in the list given at construction receives label `i`. The
/// index of `(path, label)` pairs is built once and never changes; images are
/// decoded from disk on every access.
#[derive(Debug, Clone)]
pub struct LabeledImageFolder {
    root: PathBuf,
    split: String,
    categories: Vec<String>,
    pattern: Pattern,
    samples: Vec<(PathBuf, usize)>,
}

impl LabeledImageFolder {
    /// Creates a new dataset matching `*.jpg` files
    pub fn new<P, I, S>(root: P, split: &str, categories: I) -> Result<Self, BellandeError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_pattern(root, split, categories, DEFAULT_PATTERN)
    }

    /// Creates a new dataset matching file names against a glob pattern
    ///
    /// Matching is case-sensitive and applies to the file name only, so only
    /// files directly inside each category directory are indexed.
    ///
    /// Categories are taken as given: a name listed twice is scanned twice and
    /// its files appear once per label. [`DatasetConfig::validate`] rejects
    /// duplicate names for configurations loaded from disk.
    ///
    /// [`DatasetConfig::validate`]: crate::utilities::config::DatasetConfig::validate
    pub fn with_pattern<P, I, S>(
        root: P,
        split: &str,
        categories: I,
        pattern: &str,
    ) -> Result<Self, BellandeError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let root = root.as_ref().to_path_buf();
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let pattern = Pattern::new(pattern)?;

        let mut samples = Vec::new();
        let split_dir = root.join(split);
        for (label, category) in categories.iter().enumerate() {
            let found = Self::scan_category(&split_dir.join(category), &pattern, label, &mut samples);
            debug!("Indexed {} files for category {:?} (label {})", found, category, label);
        }

        info!(
            "Indexed {} images across {} categories in {:?}",
            samples.len(),
            categories.len(),
            split_dir
        );

        Ok(LabeledImageFolder {
            root,
            split: split.to_string(),
            categories,
            pattern,
            samples,
        })
    }

    /// Appends every matching file of one category directory, sorted by path.
    /// A missing or unreadable directory contributes nothing.
    fn scan_category(
        dir: &Path,
        pattern: &Pattern,
        label: usize,
        samples: &mut Vec<(PathBuf, usize)>,
    ) -> usize {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Category directory {:?} does not exist", dir);
                return 0;
            }
            Err(e) => {
                warn!("Failed to read category directory {:?}: {}", dir, e);
                return 0;
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                    None
                }
            })
            .filter(|entry| pattern.matches_with(&entry.file_name().to_string_lossy(), MATCH_OPTIONS))
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let found = paths.len();
        samples.extend(paths.into_iter().map(|path| (path, label)));
        found
    }

    /// Opens, decodes and converts one image to 8-bit RGB. The file handle is
    /// dropped before returning.
    fn load_image(path: &Path) -> Result<RgbImage, BellandeError> {
        let decode_error = |reason: String| BellandeError::DecodeError {
            path: path.to_path_buf(),
            reason,
        };

        let file = File::open(path).map_err(|e| decode_error(e.to_string()))?;
        let image = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|e| decode_error(e.to_string()))?
            .decode()
            .map_err(|e| decode_error(e.to_string()))?;

        Ok(image.to_rgb8())
    }

    fn check_index(&self, index: usize) -> Result<&(PathBuf, usize), BellandeError> {
        self.samples.get(index).ok_or(BellandeError::IndexOutOfBounds {
            index,
            len: self.samples.len(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn split(&self) -> &str {
        &self.split
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The `(path, label)` index in access order
    pub fn samples(&self) -> &[(PathBuf, usize)] {
        &self.samples
    }

    pub fn path_of(&self, index: usize) -> Result<&Path, BellandeError> {
        self.check_index(index).map(|(path, _)| path.as_path())
    }

    /// Label of the sample at `index`, without touching the file
    pub fn label_of(&self, index: usize) -> Result<usize, BellandeError> {
        self.check_index(index).map(|&(_, label)| label)
    }

    /// Label assigned to a category name
    pub fn class_to_idx(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|name| name == category)
    }

    /// Number of indexed samples per category, in category order
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.categories.len()];
        for &(_, label) in &self.samples {
            counts[label] += 1;
        }
        counts
    }
}

impl Dataset for LabeledImageFolder {
    type Item = (RgbImage, usize);

    fn len(&self) -> usize {
        self.samples.len()
    }

    fn get(&self, index: usize) -> Result<(RgbImage, usize), BellandeError> {
        let (path, label) = self.check_index(index)?;
        let image = Self::load_image(path)?;
        Ok((image, *label))
    }

    fn num_classes(&self) -> usize {
        self.categories.len()
    }
}
