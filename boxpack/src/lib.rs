//! Assignment of rectangular products to shipping boxes, chosen from a small ordered catalog.
//!
//! The [`Packer`](packing::Packer) repeatedly looks for the largest group of remaining products
//! that fits into a box type, scanning the [`Catalog`](entities::Catalog) in priority order.
//! Products which fit none of the box types end up alone in an overflow box.

/// Entities to model orders, products, box types and packed boxes
pub mod entities;

/// Dimensions, orientations and the test deciding whether a group of products fits a box
pub mod geometry;

/// Importing orders into and exporting packings out of this library
pub mod io;

/// The greedy packing engine
pub mod packing;

/// Helper functions which do not belong to any specific module
pub mod util;
