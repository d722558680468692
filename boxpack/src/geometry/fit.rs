use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::geometry::Dimension;
use crate::geometry::fail_fast;
use crate::geometry::geo_enums::Axis;

/// Test deciding whether a group of products fits inside a box.
///
/// Both variants model shelf packing: the products are lined up along a single stacking axis,
/// where their extents are summed, while along the two other axes only the largest extent
/// has to fit. The group fits if this holds for at least one of the three stacking axes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitTest {
    /// Every product can take any of its six orientations, chosen jointly for the whole group
    #[default]
    Exact,
    /// Products keep the orientation in which they were declared.
    /// Accepts a subset of the groups accepted by [`FitTest::Exact`].
    Simplified,
}

impl FitTest {
    /// Whether the products with dimensions `group` fit together inside `container`.
    /// An empty group always fits.
    pub fn fits(&self, group: &[Dimension], container: &Dimension) -> bool {
        if fail_fast::exceeds_volume(group, container) {
            return false;
        }
        match self {
            FitTest::Exact => {
                let orientations = group
                    .iter()
                    .map(|d| d.orientations().collect_vec())
                    .collect_vec();
                fits_in_any_orientation(&orientations, ShelfStack::default(), container)
            }
            FitTest::Simplified => group
                .iter()
                .fold(ShelfStack::default(), |stack, d| stack.push(d))
                .fits_in(container),
        }
    }
}

/// Depth-first search over the orientations of every product.
/// Sums and maxima only grow while products are added, so a branch is abandoned
/// as soon as none of the stacking axes can still accommodate the partial group.
fn fits_in_any_orientation(
    orientations: &[Vec<Dimension>],
    stack: ShelfStack,
    container: &Dimension,
) -> bool {
    match orientations.split_first() {
        None => stack.fits_in(container),
        Some((options, rest)) => options.iter().any(|oriented| {
            let next = stack.push(oriented);
            next.fits_in(container) && fits_in_any_orientation(rest, next, container)
        }),
    }
}

/// Occupied extents of a group of (oriented) products, tracked for all three stacking axes at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShelfStack {
    /// Per axis, the sum of the extents of all products
    sums: [u64; 3],
    /// Per axis, the largest extent of any product
    maxima: [u64; 3],
}

impl ShelfStack {
    pub fn push(self, dim: &Dimension) -> Self {
        let mut next = self;
        for axis in Axis::ALL {
            let (i, extent) = (axis.index(), dim.extent(axis) as u64);
            next.sums[i] += extent;
            next.maxima[i] = next.maxima[i].max(extent);
        }
        next
    }

    /// Extent occupied along `axis` when the products are stacked along `stacking_axis`
    pub fn occupied(&self, axis: Axis, stacking_axis: Axis) -> u64 {
        match axis == stacking_axis {
            true => self.sums[axis.index()],
            false => self.maxima[axis.index()],
        }
    }

    pub fn fits_along(&self, stacking_axis: Axis, container: &Dimension) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self.occupied(axis, stacking_axis) <= container.extent(axis) as u64)
    }

    pub fn fits_in(&self, container: &Dimension) -> bool {
        Axis::ALL
            .iter()
            .any(|&stacking_axis| self.fits_along(stacking_axis, container))
    }
}
