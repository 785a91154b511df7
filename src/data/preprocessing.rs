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
use image::RgbImage;

/// Planar image buffer in `[C, H, W]` layout
///
/// The data length always equals the product of the shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: Vec<f32>,
    shape: [usize; 3],
}

impl ImageTensor {
    pub fn new(data: Vec<f32>, shape: [usize; 3]) -> Result<Self, BellandeError> {
        let expected = shape.iter().product::<usize>();
        if data.len() != expected {
            return Err(BellandeError::ShapeMismatch(format!(
                "shape {:?} needs {} values, got {}",
                shape,
                expected,
                data.len()
            )));
        }
        Ok(ImageTensor { data, shape })
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    pub fn channels(&self) -> usize {
        self.shape[0]
    }

    pub fn height(&self) -> usize {
        self.shape[1]
    }

    pub fn width(&self) -> usize {
        self.shape[2]
    }

    /// Value at channel `c`, row `h`, column `w`, or `None` outside the shape
    pub fn at(&self, c: usize, h: usize, w: usize) -> Option<f32> {
        if c >= self.channels() || h >= self.height() || w >= self.width() {
            return None;
        }
        self.data.get((c * self.shape[1] + h) * self.shape[2] + w).copied()
    }
}

/// Converts interleaved RGB pixels to a planar tensor scaled to `[0, 1]`
pub fn to_chw(image: &RgbImage) -> ImageTensor {
    let (width, height) = image.dimensions();
    let (width, height) = (width as usize, height as usize);
    let plane = width * height;

    let mut data = vec![0.0f32; 3 * plane];
    for (i, pixel) in image.pixels().enumerate() {
        for c in 0..3 {
            data[c * plane + i] = pixel[c] as f32 / 255.0;
        }
    }

    ImageTensor {
        data,
        shape: [3, height, width],
    }
}

pub trait Preprocessor: Send + Sync {
    fn process(&self, tensor: &ImageTensor) -> Result<ImageTensor, BellandeError>;
}

pub struct Normalize {
    mean: Vec<f32>,
    std: Vec<f32>,
}

impl Normalize {
    pub fn new(mean: Vec<f32>, std: Vec<f32>) -> Result<Self, BellandeError> {
        if mean.len() != std.len() {
            return Err(BellandeError::InvalidParameter(format!(
                "mean has {} channels but std has {}",
                mean.len(),
                std.len()
            )));
        }
        if mean.iter().any(|m| !m.is_finite()) {
            return Err(BellandeError::InvalidParameter(
                "mean must be finite".to_string(),
            ));
        }
        if std.iter().any(|&s| !s.is_finite() || s == 0.0) {
            return Err(BellandeError::InvalidParameter(
                "std must be finite and non-zero".to_string(),
            ));
        }
        Ok(Normalize { mean, std })
    }

    /// ImageNet channel statistics
    pub fn imagenet() -> Self {
        Normalize {
            mean: vec![0.485, 0.456, 0.406],
            std: vec![0.229, 0.224, 0.225],
        }
    }
}

impl Preprocessor for Normalize {
    fn process(&self, tensor: &ImageTensor) -> Result<ImageTensor, BellandeError> {
        let channels = tensor.channels();
        if channels != self.mean.len() {
            return Err(BellandeError::ShapeMismatch(format!(
                "expected {} channels, got {}",
                self.mean.len(),
                channels
            )));
        }

        let plane = tensor.height() * tensor.width();
        let mut normalized = tensor.data.clone();
        for c in 0..channels {
            for value in &mut normalized[c * plane..(c + 1) * plane] {
                *value = (*value - self.mean[c]) / self.std[c];
            }
        }

        Ok(ImageTensor {
            data: normalized,
            shape: tensor.shape,
        })
    }
}
