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

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum BellandeError {
    IndexOutOfBounds { index: usize, len: usize },
    DecodeError { path: PathBuf, reason: String },
    IOError(String),
    SerializationError(String),
    InvalidConfiguration(String),
    InvalidParameter(String),
    ShapeMismatch(String),
}

impl Error for BellandeError {}

impl fmt::Display for BellandeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BellandeError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for dataset of length {}", index, len)
            }
            BellandeError::DecodeError { path, reason } => {
                write!(f, "Failed to decode image {}: {}", path.display(), reason)
            }
            BellandeError::IOError(err) => write!(f, "IO error: {}", err),
            BellandeError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            BellandeError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            BellandeError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            BellandeError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
        }
    }
}

impl From<std::io::Error> for BellandeError {
    fn from(error: std::io::Error) -> Self {
        BellandeError::IOError(error.to_string())
    }
}

impl From<glob::PatternError> for BellandeError {
    fn from(error: glob::PatternError) -> Self {
        BellandeError::InvalidConfiguration(format!("Invalid file pattern: {}", error))
    }
}

impl From<serde_yaml::Error> for BellandeError {
    fn from(error: serde_yaml::Error) -> Self {
        BellandeError::SerializationError(error.to_string())
    }
}

impl From<serde_json::Error> for BellandeError {
    fn from(error: serde_json::Error) -> Self {
        BellandeError::SerializationError(error.to_string())
    }
}

