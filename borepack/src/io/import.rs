use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::entities::{CableCatalog, CableKind, CableSelection, CatalogCable};
use crate::io::ext_repr::{ExtBoreInstance, ExtCableSelection, ExtCatalogCable};

/// Imports the catalog and cable selections of an instance into the library.
///
/// Fails if the catalog itself is inconsistent (duplicate ids or invalid diameters).
/// Incomplete selection rows are passed on as-is, the extractor skips them.
pub fn import(ext_instance: &ExtBoreInstance) -> Result<(CableCatalog, Vec<CableSelection>)> {
    let catalog = import_catalog(&ext_instance.catalog)?;
    let selections = ext_instance
        .selections
        .iter()
        .map(import_selection)
        .collect_vec();
    Ok((catalog, selections))
}

pub fn import_catalog(ext_cables: &[ExtCatalogCable]) -> Result<CableCatalog> {
    let duplicate_ids = ext_cables.iter().map(|c| c.id).duplicates().collect_vec();
    ensure!(
        duplicate_ids.is_empty(),
        "catalog cable ids should be unique, duplicates: {:?}",
        duplicate_ids
    );
    for cable in ext_cables {
        ensure!(
            cable.diameter.is_finite() && cable.diameter > 0.0,
            "catalog cable {} ({}) has an invalid diameter: {}",
            cable.id,
            cable.name,
            cable.diameter
        );
    }

    let cables = ext_cables
        .iter()
        .map(|c| CatalogCable {
            id: c.id,
            name: c.name.clone(),
            diameter: c.diameter,
        })
        .collect_vec();
    Ok(CableCatalog::new(cables))
}

pub fn import_selection(ext_selection: &ExtCableSelection) -> CableSelection {
    match ext_selection {
        ExtCableSelection::Catalog { cable_id, quantity } => CableSelection {
            kind: CableKind::Catalog {
                cable_id: *cable_id,
            },
            quantity: *quantity,
        },
        ExtCableSelection::Custom {
            name,
            diameter,
            quantity,
        } => CableSelection {
            kind: CableKind::Custom {
                name: name.clone(),
                diameter: *diameter,
            },
            quantity: *quantity,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSTANCE: &str = r#"{
        "name": "panel_feed",
        "catalog": [
            {"id": 0, "name": "THHN 6", "diameter": 0.258},
            {"id": 1, "name": "THHN 2", "diameter": 0.395}
        ],
        "selections": [
            {"type": "catalog", "cable_id": 1, "quantity": 3},
            {"type": "custom", "name": "Ground", "diameter": 0.2, "quantity": 1},
            {"type": "custom", "name": "No diameter", "quantity": 2},
            {"type": "catalog", "cable_id": 0}
        ]
    }"#;

    #[test]
    fn imports_catalog_and_selections() {
        let ext_instance: ExtBoreInstance = serde_json::from_str(INSTANCE).unwrap();
        let (catalog, selections) = import(&ext_instance).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(selections.len(), 4);
        assert_eq!(selections[0], CableSelection::catalog(1, 3));
        assert_eq!(selections[1], CableSelection::custom("Ground", 0.2, 1));
        assert_eq!(
            selections[2].kind,
            CableKind::Custom {
                name: Some("No diameter".into()),
                diameter: None
            }
        );
        //missing quantity defaults to zero
        assert_eq!(selections[3].quantity, 0);
    }

    #[test]
    fn rejects_inconsistent_catalog() {
        let duplicate = [
            ExtCatalogCable {
                id: 4,
                name: "a".into(),
                diameter: 0.3,
            },
            ExtCatalogCable {
                id: 4,
                name: "b".into(),
                diameter: 0.4,
            },
        ];
        assert!(import_catalog(&duplicate).is_err());

        let invalid = [ExtCatalogCable {
            id: 0,
            name: "a".into(),
            diameter: -0.3,
        }];
        assert!(import_catalog(&invalid).is_err());
    }
}
