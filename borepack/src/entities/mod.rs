mod cable;
mod circle_spec;
mod packing_result;
mod placed_circle;

#[doc(inline)]
pub use cable::CableCatalog;
#[doc(inline)]
pub use cable::CableKind;
#[doc(inline)]
pub use cable::CableSelection;
#[doc(inline)]
pub use cable::CatalogCable;
#[doc(inline)]
pub use circle_spec::CircleSpec;
#[doc(inline)]
pub use packing_result::Bore;
#[doc(inline)]
pub use packing_result::PackingResult;
#[doc(inline)]
pub use placed_circle::PlacedCircle;
