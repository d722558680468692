mod packer;
mod search;

#[doc(inline)]
pub use packer::Packer;

#[doc(inline)]
pub use search::group_fits;

#[doc(inline)]
pub use search::largest_fitting_group;

#[doc(inline)]
pub use search::placement_order;
