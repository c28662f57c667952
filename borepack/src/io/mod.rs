/// External (serializable) representations of all entities
pub mod ext_repr;

/// Exporting results out of the library
pub mod export;

/// Importing cable selections into the library
pub mod import;

/// Drawing packing results as SVG
pub mod svg;
