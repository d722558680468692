use std::cmp::Reverse;
use std::sync::Arc;

use itertools::Itertools;
use log::debug;

use crate::entities::{BoxType, Product};
use crate::geometry::{Dimension, FitTest, fail_fast};

/// Searches `products` for the largest group that fits inside `box_type` according to `fit_test`.
///
/// Groups are enumerated from the largest size down, and within one size as combinations in
/// lexicographic order of their positions in `products`. The first group that fits is returned,
/// its products in the same relative order as in `products`. Empty if not even a single product fits.
///
/// Every evaluated candidate increments `check_counter`.
pub fn largest_fitting_group(
    products: &[Arc<Product>],
    box_type: &BoxType,
    fit_test: FitTest,
    check_counter: &mut usize,
) -> Vec<Arc<Product>> {
    //products that do not fit on their own can never be part of a fitting group
    let candidates = products
        .iter()
        .filter(|p| box_type.admits(p))
        .collect_vec();

    let max_size = fail_fast::max_group_size(
        candidates.iter().map(|p| p.volume()),
        box_type.volume(),
    );

    debug!(
        "[SEARCH] {}: {}/{} products fit on their own, groups of at most {} products",
        box_type.id,
        candidates.len(),
        products.len(),
        max_size
    );

    let mut dims_buffer: Vec<Dimension> = Vec::with_capacity(max_size);
    for size in (1..=max_size).rev() {
        for group in candidates.iter().copied().combinations(size) {
            dims_buffer.clear();
            dims_buffer.extend(group.iter().map(|p| p.dimension));
            *check_counter += 1;
            if fit_test.fits(&dims_buffer, &box_type.dimension) {
                return group.into_iter().cloned().collect_vec();
            }
        }
    }
    vec![]
}

/// Whether all products of `group` fit together inside `box_type`, allowing every product to be rotated.
pub fn group_fits(group: &[&Product], box_type: &BoxType) -> bool {
    let dims = group.iter().map(|p| p.dimension).collect_vec();
    FitTest::Exact.fits(&dims, &box_type.dimension)
}

/// Order in which products are offered to the search: descending volume.
/// Products with equal volume keep their relative input order.
pub fn placement_order(products: &[Arc<Product>]) -> Vec<Arc<Product>> {
    products
        .iter()
        .cloned()
        .sorted_by_key(|p| Reverse(p.volume()))
        .collect_vec()
}
