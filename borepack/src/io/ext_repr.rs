use serde::{Deserialize, Serialize};

/// External representation of a [`CatalogCable`](crate::entities::CatalogCable).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCatalogCable {
    /// Unique identifier of the cable type
    pub id: u64,
    pub name: String,
    /// Outer diameter of the cable
    pub diameter: f64,
}

/// External representation of a [`CableSelection`](crate::entities::CableSelection).
/// Every field apart from the type is optional, incomplete rows are skipped during extraction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ExtCableSelection {
    /// A cable from the catalog
    Catalog {
        cable_id: Option<u64>,
        #[serde(default)]
        quantity: i64,
    },
    /// A one-off cable
    Custom {
        name: Option<String>,
        diameter: Option<f64>,
        #[serde(default)]
        quantity: i64,
    },
}

/// A packing request: a catalog of known cables and the selected cables to pass through the bore
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBoreInstance {
    /// The name of the instance
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub catalog: Vec<ExtCatalogCable>,
    pub selections: Vec<ExtCableSelection>,
}

/// External representation of a [`Bore`](crate::entities::Bore), always centered at the origin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBore {
    pub radius: f64,
    pub diameter: f64,
}

/// External representation of a [`PlacedCircle`](crate::entities::PlacedCircle).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedCircle {
    pub name: String,
    pub radius: f64,
    /// Position of the center, relative to the center of the bore
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// External representation of a [`PackingResult`](crate::entities::PackingResult).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPackingResult {
    pub bore: ExtBore,
    pub circles: Vec<ExtPlacedCircle>,
    /// Fraction of the bore area covered by the circles
    pub density: f64,
}
