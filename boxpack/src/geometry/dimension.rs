use std::fmt::Display;

use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::geometry::Orientation;
use crate::geometry::geo_enums::Axis;

/// Axis-aligned extents of a product or a box.
/// All extents are strictly positive when constructed through [`Dimension::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub height: u32,
    pub width: u32,
    pub length: u32,
}

impl Dimension {
    pub fn try_new(height: u32, width: u32, length: u32) -> Result<Self> {
        let dim = Dimension {
            height,
            width,
            length,
        };
        ensure!(
            dim.is_positive(),
            "invalid dimension, height: {height}, width: {width}, length: {length}"
        );
        Ok(dim)
    }

    /// Whether all three extents are strictly positive
    pub fn is_positive(&self) -> bool {
        self.height > 0 && self.width > 0 && self.length > 0
    }

    pub fn volume(&self) -> u64 {
        self.height as u64 * self.width as u64 * self.length as u64
    }

    pub fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Height => self.height,
            Axis::Width => self.width,
            Axis::Length => self.length,
        }
    }

    /// Returns the extents as seen along the axes of a box after rotating by `orientation`.
    pub fn oriented(&self, orientation: Orientation) -> Dimension {
        orientation.apply(self)
    }

    /// All distinct orientations of `self`.
    /// Orientations that coincide (products with repeated extents) are only yielded once.
    pub fn orientations(&self) -> impl Iterator<Item = Dimension> + '_ {
        Orientation::ALL
            .iter()
            .map(|o| self.oriented(*o))
            .unique()
    }

    /// Whether `self` fits inside `container` as is, without any rotation.
    pub fn fits_within(&self, container: &Dimension) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self.extent(axis) <= container.extent(axis))
    }

    /// Whether `self` fits inside `container` in at least one of its orientations.
    pub fn fits_rotated_within(&self, container: &Dimension) -> bool {
        self.orientations().any(|o| o.fits_within(container))
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, self.length)
    }
}
