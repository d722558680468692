use itertools::Itertools;
use log::error;

use crate::entities::{BoxInstance, Order, PackedOrder};
//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

/// Every product of the order appears in exactly one box, and no other products do.
pub fn packing_is_complete(order: &Order, packed: &PackedOrder) -> bool {
    let packed_ids = packed
        .boxes
        .iter()
        .flat_map(|b| b.product_ids())
        .sorted()
        .collect_vec();
    let order_ids = order
        .products
        .iter()
        .map(|p| p.id.as_str())
        .sorted()
        .collect_vec();

    if packed.order_id != order.id || packed_ids != order_ids {
        error!(
            "packing of order {} does not match its products, packed: {packed_ids:?}, order: {order_ids:?}",
            order.id
        );
        return false;
    }
    true
}

/// Catalog boxes are non-empty and their remaining volume matches their contents,
/// overflow boxes hold exactly one product and no volume.
pub fn boxes_are_consistent(packed: &PackedOrder) -> bool {
    packed.boxes.iter().all(|b| {
        let consistent = box_is_consistent(b);
        if !consistent {
            error!(
                "inconsistent box {:?} in order {}: {:?}, remaining volume {}",
                b.id(),
                packed.order_id,
                b.product_ids().collect_vec(),
                b.remaining_volume
            );
        }
        consistent
    })
}

pub fn box_is_consistent(b: &BoxInstance) -> bool {
    match &b.box_type {
        Some(bt) => {
            !b.products.is_empty()
                && b.product_volume() <= bt.volume()
                && b.remaining_volume == bt.volume() - b.product_volume()
        }
        None => b.products.len() == 1 && b.remaining_volume == 0,
    }
}
