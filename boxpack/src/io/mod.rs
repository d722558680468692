/// External (serializable) representations of all entities
pub mod ext_repr;

/// Exporting packings out of the library
pub mod export;

/// Importing orders and catalogs into the library
pub mod import;
