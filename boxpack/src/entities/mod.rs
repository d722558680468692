mod box_instance;
mod box_type;
mod catalog;
mod order;
mod packed_order;
mod product;

#[doc(inline)]
pub use product::Product;

#[doc(inline)]
pub use box_type::BoxType;

#[doc(inline)]
pub use catalog::Catalog;

#[doc(inline)]
pub use catalog::STANDARD_BOX_TYPES;

#[doc(inline)]
pub use box_instance::BoxInstance;

#[doc(inline)]
pub use box_instance::OVERFLOW_NOTE;

#[doc(inline)]
pub use order::Order;

#[doc(inline)]
pub use packed_order::PackedOrder;
