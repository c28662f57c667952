/// A known cable type, identified by `id`
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogCable {
    pub id: u64,
    pub name: String,
    pub diameter: f64,
}

/// Lookup table of the known cable types
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CableCatalog {
    cables: Vec<CatalogCable>,
}

impl CableCatalog {
    pub fn new(cables: Vec<CatalogCable>) -> Self {
        Self { cables }
    }

    pub fn get(&self, id: u64) -> Option<&CatalogCable> {
        self.cables.iter().find(|c| c.id == id)
    }

    pub fn cables(&self) -> &[CatalogCable] {
        &self.cables
    }

    pub fn len(&self) -> usize {
        self.cables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cables.is_empty()
    }
}

/// Which cable a selection row refers to.
/// Fields are optional: rows are gathered from user input and may be incomplete.
#[derive(Clone, Debug, PartialEq)]
pub enum CableKind {
    /// A cable from the [`CableCatalog`]
    Catalog { cable_id: Option<u64> },
    /// A one-off cable with a user supplied name and diameter
    Custom {
        name: Option<String>,
        diameter: Option<f64>,
    },
}

/// One row of a cable selection: a cable and how many of it should go through the bore.
#[derive(Clone, Debug, PartialEq)]
pub struct CableSelection {
    pub kind: CableKind,
    pub quantity: i64,
}

impl CableSelection {
    pub fn catalog(cable_id: u64, quantity: i64) -> Self {
        Self {
            kind: CableKind::Catalog {
                cable_id: Some(cable_id),
            },
            quantity,
        }
    }

    pub fn custom(name: impl Into<String>, diameter: f64, quantity: i64) -> Self {
        Self {
            kind: CableKind::Custom {
                name: Some(name.into()),
                diameter: Some(diameter),
            },
            quantity,
        }
    }

    /// Effective name and diameter of the row, `None` if either is missing or the diameter is not a
    /// positive number.
    pub fn resolve<'a>(&'a self, catalog: &'a CableCatalog) -> Option<(&'a str, f64)> {
        let (name, diameter) = match &self.kind {
            CableKind::Catalog { cable_id } => {
                let cable = catalog.get((*cable_id)?)?;
                (cable.name.as_str(), cable.diameter)
            }
            CableKind::Custom { name, diameter } => (name.as_deref()?, (*diameter)?),
        };
        let name = name.trim();
        match !name.is_empty() && diameter.is_finite() && diameter > 0.0 {
            true => Some((name, diameter)),
            false => None,
        }
    }
}
