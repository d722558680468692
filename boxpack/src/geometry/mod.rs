mod dimension;
mod fit;
mod orientation;

/// Cheap necessary conditions, used to discard candidates before the full fit test
pub mod fail_fast;

/// Enums used throughout the geometry module
pub mod geo_enums;

#[doc(inline)]
pub use dimension::Dimension;

#[doc(inline)]
pub use fit::FitTest;

#[doc(inline)]
pub use fit::ShelfStack;

#[doc(inline)]
pub use orientation::Orientation;
