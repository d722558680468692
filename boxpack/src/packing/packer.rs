use std::sync::Arc;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};
use thousands::Separable;

use crate::entities::{BoxInstance, BoxType, Catalog, Order, PackedOrder, Product};
use crate::geometry::FitTest;
use crate::packing::search::{largest_fitting_group, placement_order};
use crate::util::assertions;

/// Greedy packing engine.
///
/// Repeatedly opens a box of the first type in the [`Catalog`] that can hold at least one of the
/// remaining products, and fills it with the largest group of remaining products that fits.
/// Products which fit none of the box types are placed alone in an overflow box.
///
/// Holds no state between calls to [`Packer::pack`], multiple orders can be packed concurrently.
#[derive(Clone, Debug, Default)]
pub struct Packer {
    pub catalog: Catalog,
    pub fit_test: FitTest,
}

impl Packer {
    pub fn new(catalog: Catalog, fit_test: FitTest) -> Self {
        Self { catalog, fit_test }
    }

    pub fn pack(&self, order: &Order) -> PackedOrder {
        let start = Instant::now();
        info!(
            "[PACK] packing order {} with {} product(s)",
            order.id,
            order.products.len()
        );

        let mut remaining = placement_order(&order.products);
        let mut boxes = vec![];
        let mut check_counter = 0;

        while !remaining.is_empty() {
            let next_box = match self.find_group(&remaining, &mut check_counter) {
                Some((box_type, group)) => {
                    remaining.retain(|p| !group.iter().any(|g| Arc::ptr_eq(p, g)));
                    let mut b = BoxInstance::open(box_type);
                    group.into_iter().for_each(|p| b.add_product(p));
                    debug!(
                        "[PACK] opened {} with {:?}, {} products remaining",
                        box_type.id,
                        b.product_ids().collect_vec(),
                        remaining.len()
                    );
                    b
                }
                None => {
                    //head of the remaining products fits in none of the box types
                    let product = remaining.remove(0);
                    warn!(
                        "[PACK] product {} ({}) of order {} does not fit in any box of the catalog, placing it in an overflow box",
                        product.id, product.dimension, order.id
                    );
                    let mut b = BoxInstance::overflow();
                    b.add_product(product);
                    b
                }
            };
            boxes.push(next_box);
        }

        let packed = PackedOrder {
            order_id: order.id,
            boxes,
        };

        debug_assert!(assertions::packing_is_complete(order, &packed));
        debug_assert!(assertions::boxes_are_consistent(&packed));

        info!(
            "[PACK] order {} packed in {} box(es), {} overflow, usage {:.1}% in {:.3}ms ({} candidate checks)",
            order.id,
            packed.n_boxes(),
            packed.n_overflow_boxes(),
            packed.usage() * 100.0,
            start.elapsed().as_secs_f64() * 1000.0,
            check_counter.separate_with_commas()
        );

        packed
    }

    /// Scans the catalog in order, returns the first box type admitting a non-empty group, along with that group.
    fn find_group(
        &self,
        remaining: &[Arc<Product>],
        check_counter: &mut usize,
    ) -> Option<(&BoxType, Vec<Arc<Product>>)> {
        self.catalog.box_types().find_map(|box_type| {
            let group = largest_fitting_group(remaining, box_type, self.fit_test, check_counter);
            match group.is_empty() {
                true => None,
                false => Some((box_type, group)),
            }
        })
    }
}
