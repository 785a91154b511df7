// Copyright (C) 2025 Bellande Artificial Intelligence Computer Vision Research Innovation Center, Ronaldson Bellande

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

use std::error::Error;
use std::fs;

use bellande_image_dataset::{BellandeError, Dataset, DatasetConfig};
use image::{Rgb, RgbImage};
use tempfile::tempdir;

#[test]
fn test_yaml_config_builds_dataset() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let category = dir.path().join("train/alien");
    fs::create_dir_all(&category)?;
    RgbImage::from_pixel(2, 2, Rgb([9, 9, 9])).save(category.join("1.png"))?;

    let yaml = format!(
        "root: {}\nsplit: train\ncategories:\n  - alien\n  - predator\npattern: \"*.png\"\n",
        dir.path().display()
    );
    let config_path = dir.path().join("dataset.yaml");
    fs::write(&config_path, yaml)?;

    let config = DatasetConfig::from_file(&config_path)?;
    assert_eq!(config.categories, vec!["alien", "predator"]);

    let dataset = config.build()?;
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.num_classes(), 2);
    assert_eq!(dataset.get(0)?.1, 0);
    Ok(())
}

#[test]
fn test_pattern_defaults_to_jpg() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let config_path = dir.path().join("dataset.yml");
    fs::write(&config_path, "root: data\nsplit: train\ncategories: [alien]\n")?;

    let config = DatasetConfig::from_file(&config_path)?;
    assert_eq!(config.pattern, "*.jpg");
    Ok(())
}

#[test]
fn test_save_and_reload_json_and_yaml() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let config = DatasetConfig::new(dir.path(), "validation", &["alien", "predator"]);

    for name in ["dataset.json", "dataset.yaml"] {
        let path = dir.path().join(name);
        config.save(&path)?;
        assert_eq!(DatasetConfig::from_file(&path)?, config);
    }

    let json = fs::read_to_string(dir.path().join("dataset.json"))?;
    assert!(json.trim_start().starts_with('{'));
    Ok(())
}

#[test]
fn test_validation_rejects_bad_input() {
    let mut config = DatasetConfig::new("data", "train", &["alien", "alien"]);
    assert!(config.validate().unwrap_err().contains("Duplicate"));

    config.categories = vec!["alien".to_string(), String::new()];
    assert!(config.validate().is_err());

    config.categories = vec!["alien".to_string()];
    config.split = "train/extra".to_string();
    assert!(config.validate().is_err());

    config.split = "..".to_string();
    assert!(config.validate().is_err());

    config.split = "train".to_string();
    config.pattern = "[".to_string();
    assert!(matches!(
        config.build(),
        Err(BellandeError::InvalidConfiguration(_))
    ));

    config.pattern = "*.jpg".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_directories_are_valid() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let config = DatasetConfig::new(dir.path().join("absent"), "train", &["alien"]);
    assert!(config.validate().is_ok());
    assert!(config.build()?.is_empty());
    Ok(())
}

#[test]
fn test_malformed_file_is_serialization_error() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("dataset.json");
    fs::write(&path, "{ not json")?;
    assert!(matches!(
        DatasetConfig::from_file(&path),
        Err(BellandeError::SerializationError(_))
    ));
    assert!(matches!(
        DatasetConfig::from_file(dir.path().join("missing.yaml")),
        Err(BellandeError::IOError(_))
    ));
    Ok(())
}
