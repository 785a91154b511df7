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

/// Trait defining the interface for datasets
///
/// A dataset is a countable collection with random access by position.
/// Batching, shuffling and prefetching are layered on top by the caller.
pub trait Dataset: Send + Sync {
    type Item;

    fn len(&self) -> usize;

    /// Returns the item at `index`, failing with
    /// [`BellandeError::IndexOutOfBounds`] when `index >= len()`.
    fn get(&self, index: usize) -> Result<Self::Item, BellandeError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn num_classes(&self) -> usize;
}
